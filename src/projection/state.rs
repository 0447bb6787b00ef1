//! Simulation state for a single projection run

use crate::contract::ContractParameters;
use crate::error::{ProjectionError, ProjectionResult};
use super::series::{Phase, YearSnapshot};
use super::vector::ScenarioVector;
use serde::{Deserialize, Serialize};

/// Age at which every projection starts
pub const DEFAULT_CURRENT_AGE: u32 = 25;

/// Age at which every projection ends
pub const DEFAULT_RETIREMENT_AGE: u32 = 67;

/// Start and end of the projection horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionAges {
    pub current_age: u32,
    pub retirement_age: u32,
}

impl Default for ProjectionAges {
    fn default() -> Self {
        Self {
            current_age: DEFAULT_CURRENT_AGE,
            retirement_age: DEFAULT_RETIREMENT_AGE,
        }
    }
}

impl ProjectionAges {
    /// Number of simulated years
    pub fn total_years(&self) -> usize {
        self.retirement_age.saturating_sub(self.current_age) as usize
    }

    /// Switch age must lie in `[current_age, retirement_age]`
    pub fn validate_switch_age(&self, switch_age: u32) -> ProjectionResult<()> {
        if switch_age < self.current_age || switch_age > self.retirement_age {
            return Err(ProjectionError::InvalidSwitchAge {
                switch_age,
                current_age: self.current_age,
                retirement_age: self.retirement_age,
            });
        }
        Ok(())
    }
}

/// Running totals and current monthly amounts of one run
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub ages: ProjectionAges,
    pub switch_age: u32,
    pub scenario_rates: ScenarioVector,
    growth_factors: ScenarioVector,

    /// Years simulated so far (both phases)
    pub years_elapsed: u32,

    /// Accumulated pension wealth, one value per scenario
    pub pension_wealth: ScenarioVector,

    pub cumulative_disability_paid: f64,
    pub cumulative_disability_received: f64,

    pub monthly_pension_contribution: f64,
    pub monthly_disability_premium: f64,
    pub monthly_disability_benefit: f64,
}

impl SimulationState {
    /// Fresh state at the projection start
    pub fn start(
        params: &ContractParameters,
        ages: ProjectionAges,
        switch_age: u32,
        scenario_rates: ScenarioVector,
    ) -> Self {
        Self {
            ages,
            switch_age,
            growth_factors: scenario_rates.growth_factors(),
            pension_wealth: ScenarioVector::zeros(scenario_rates.len()),
            scenario_rates,
            years_elapsed: 0,
            cumulative_disability_paid: 0.0,
            cumulative_disability_received: 0.0,
            monthly_pension_contribution: params.monthly_pension_contribution,
            monthly_disability_premium: params.monthly_disability_premium,
            monthly_disability_benefit: params.monthly_disability_benefit,
        }
    }

    pub fn accumulation_years(&self) -> u32 {
        self.switch_age.saturating_sub(self.ages.current_age)
    }

    pub fn decumulation_years(&self) -> u32 {
        self.ages.retirement_age.saturating_sub(self.switch_age)
    }

    /// Grow wealth on the opening balance, then add this year's contributions
    fn grow_wealth(&mut self) {
        self.pension_wealth =
            &self.pension_wealth * &self.growth_factors + 12.0 * self.monthly_pension_contribution;
    }

    /// One accumulation year; `year` is the 0-indexed year within the phase
    pub fn accumulate_year(&mut self, params: &ContractParameters, year: u32) -> YearSnapshot {
        self.grow_wealth();
        self.cumulative_disability_paid += 12.0 * self.monthly_disability_premium;

        if params.is_step_year(year) {
            let step = 1.0 + params.contribution_step_rate;
            self.monthly_pension_contribution *= step;
            self.monthly_disability_premium *= step;
            self.monthly_disability_benefit *= step;
        }

        self.record(Phase::Accumulation)
    }

    /// The premium obligation ends at the switch age
    pub fn enter_decumulation(&mut self) {
        self.monthly_disability_premium = 0.0;
    }

    /// One decumulation year: benefit received at the start of the year
    pub fn decumulate_year(&mut self, params: &ContractParameters) -> YearSnapshot {
        self.cumulative_disability_received += 12.0 * self.monthly_disability_benefit;
        self.grow_wealth();

        self.monthly_disability_benefit *= 1.0 + params.inflation_adjustment_rate;
        self.monthly_pension_contribution *= 1.0 + params.passive_growth_rate;

        self.record(Phase::Decumulation)
    }

    fn record(&mut self, phase: Phase) -> YearSnapshot {
        let snapshot = YearSnapshot {
            year: self.years_elapsed,
            age: self.ages.current_age + self.years_elapsed,
            phase,
            pension_wealth: self.pension_wealth.clone(),
            cumulative_disability_paid: self.cumulative_disability_paid,
            cumulative_disability_received: self.cumulative_disability_received,
            monthly_pension_contribution: self.monthly_pension_contribution,
            monthly_disability_premium: self.monthly_disability_premium,
            monthly_disability_benefit: self.monthly_disability_benefit,
        };
        self.years_elapsed += 1;
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::sample_al;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_horizon() {
        let ages = ProjectionAges::default();
        assert_eq!(ages.total_years(), 42);
    }

    #[test]
    fn test_switch_age_bounds() {
        let ages = ProjectionAges::default();
        assert!(ages.validate_switch_age(25).is_ok());
        assert!(ages.validate_switch_age(45).is_ok());
        assert!(ages.validate_switch_age(67).is_ok());
        assert!(ages.validate_switch_age(24).is_err());
        assert!(ages.validate_switch_age(68).is_err());
    }

    #[test]
    fn test_phase_lengths() {
        let state = SimulationState::start(
            &sample_al(),
            ProjectionAges::default(),
            45,
            ScenarioVector::from_slice(&[0.02]),
        );
        assert_eq!(state.accumulation_years(), 20);
        assert_eq!(state.decumulation_years(), 22);
    }

    #[test]
    fn test_benefit_received_before_growth() {
        let params = sample_al();
        let mut state = SimulationState::start(
            &params,
            ProjectionAges::default(),
            25,
            ScenarioVector::from_slice(&[0.0]),
        );
        state.enter_decumulation();
        let snap = state.decumulate_year(&params);

        // First year's benefit uses the starting amount, before inflation
        assert_relative_eq!(snap.cumulative_disability_received, 12.0 * 1500.0, epsilon = 1e-9);
        assert_relative_eq!(snap.monthly_disability_benefit, 1500.0 * 1.02, epsilon = 1e-9);
        assert_relative_eq!(snap.monthly_pension_contribution, 30.49 * 1.05, epsilon = 1e-9);
        assert_relative_eq!(snap.pension_wealth[0], 12.0 * 30.49, epsilon = 1e-9);
        assert_eq!(snap.monthly_disability_premium, 0.0);
        assert_eq!(snap.age, 25);
    }
}
