//! Recorded per-year series and the reporting views built on them

use crate::contract::AnnuityFormula;
use crate::error::{ProjectionError, ProjectionResult};
use super::vector::ScenarioVector;
use serde::{Deserialize, Serialize};

/// Contract phase a year belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Contributions and disability premiums paid in
    Accumulation,
    /// Disability benefit paid out, contributions grow passively
    Decumulation,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Accumulation => "accumulation",
            Phase::Decumulation => "decumulation",
        }
    }
}

/// Values recorded at the end of one simulated year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSnapshot {
    /// 0-indexed year of the projection
    pub year: u32,

    /// Age at the start of the year
    pub age: u32,

    pub phase: Phase,

    /// Pension wealth per scenario
    pub pension_wealth: ScenarioVector,

    pub cumulative_disability_paid: f64,
    pub cumulative_disability_received: f64,

    // Monthly amounts after this year's indexation
    pub monthly_pension_contribution: f64,
    pub monthly_disability_premium: f64,
    pub monthly_disability_benefit: f64,
}

/// Ordered snapshots of a completed run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordedSeries {
    snapshots: Vec<YearSnapshot>,
}

impl RecordedSeries {
    pub fn with_capacity(years: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(years),
        }
    }

    pub fn push(&mut self, snapshot: YearSnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[YearSnapshot] {
        &self.snapshots
    }

    pub fn last(&self) -> Option<&YearSnapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, YearSnapshot> {
        self.snapshots.iter()
    }

    /// Reject stale or partial series
    pub fn ensure_len(&self, expected_years: usize) -> ProjectionResult<()> {
        if self.snapshots.len() != expected_years {
            return Err(ProjectionError::LengthMismatch {
                expected: expected_years,
                actual: self.snapshots.len(),
            });
        }
        Ok(())
    }

    fn column(&self, f: impl Fn(&YearSnapshot) -> f64) -> Vec<f64> {
        self.snapshots.iter().map(f).collect()
    }

    /// Wealth over time, one trajectory per scenario rate
    pub fn wealth_trajectories(
        &self,
        expected_years: usize,
        scenario_rates: &ScenarioVector,
        annuity_formula: &AnnuityFormula,
    ) -> ProjectionResult<Vec<WealthTrajectory>> {
        self.ensure_len(expected_years)?;

        let trajectories = scenario_rates
            .iter()
            .enumerate()
            .map(|(idx, &rate)| {
                let wealth = self.column(|s| s.pension_wealth[idx]);
                let final_wealth = wealth.last().copied().unwrap_or(0.0);
                WealthTrajectory {
                    rate,
                    final_monthly_annuity: annuity_formula.evaluate(final_wealth),
                    final_wealth,
                    wealth,
                }
            })
            .collect();

        Ok(trajectories)
    }

    /// Monthly disability benefit over time
    pub fn disability_benefit_trajectory(&self, expected_years: usize) -> ProjectionResult<Vec<f64>> {
        self.ensure_len(expected_years)?;
        Ok(self.column(|s| s.monthly_disability_benefit))
    }

    /// Cumulative disability premiums paid against benefits received
    pub fn disability_cashflows(&self, expected_years: usize) -> ProjectionResult<DisabilityCashflows> {
        self.ensure_len(expected_years)?;
        Ok(DisabilityCashflows {
            paid: self.column(|s| s.cumulative_disability_paid),
            received: self.column(|s| s.cumulative_disability_received),
        })
    }

    /// Monthly pension contribution and disability premium over time
    pub fn contribution_trajectories(
        &self,
        expected_years: usize,
    ) -> ProjectionResult<ContributionTrajectories> {
        self.ensure_len(expected_years)?;
        Ok(ContributionTrajectories {
            pension: self.column(|s| s.monthly_pension_contribution),
            disability: self.column(|s| s.monthly_disability_premium),
        })
    }
}

/// Wealth path of a single growth scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WealthTrajectory {
    pub rate: f64,
    pub wealth: Vec<f64>,
    pub final_wealth: f64,
    pub final_monthly_annuity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisabilityCashflows {
    pub paid: Vec<f64>,
    pub received: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionTrajectories {
    pub pension: Vec<f64>,
    pub disability: Vec<f64>,
}

/// End-of-projection totals for one contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub identifier: String,
    pub switch_age: u32,
    pub scenario_rates: Vec<f64>,
    pub total_disability_paid: f64,
    pub total_disability_received: f64,
    pub final_wealth: Vec<f64>,
    pub monthly_annuities: Vec<f64>,
}
