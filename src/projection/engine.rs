//! Year-by-year projection of one contract across several growth scenarios

use crate::contract::ContractParameters;
use crate::error::{ProjectionError, ProjectionResult};
use super::series::{
    ContributionTrajectories, DisabilityCashflows, ProjectionSummary, RecordedSeries,
    WealthTrajectory,
};
use super::state::{ProjectionAges, SimulationState};
use super::vector::ScenarioVector;

/// Inputs and output of the last successful run
#[derive(Debug, Clone)]
struct CompletedRun {
    switch_age: u32,
    scenario_rates: ScenarioVector,
    series: RecordedSeries,
}

/// Projects one contract and keeps the series of its last successful run
#[derive(Debug, Clone)]
pub struct ContractProjector {
    params: ContractParameters,
    ages: ProjectionAges,
    last_run: Option<CompletedRun>,
}

impl ContractProjector {
    /// Create a projector over the default 25..67 horizon
    pub fn new(params: ContractParameters) -> Self {
        Self {
            params,
            ages: ProjectionAges::default(),
            last_run: None,
        }
    }

    /// Override the projection horizon; discards any recorded run
    pub fn with_ages(mut self, ages: ProjectionAges) -> Self {
        self.ages = ages;
        self.last_run = None;
        self
    }

    pub fn params(&self) -> &ContractParameters {
        &self.params
    }

    pub fn ages(&self) -> ProjectionAges {
        self.ages
    }

    pub fn total_years(&self) -> usize {
        self.ages.total_years()
    }

    /// Run the projection and replace the recorded series
    ///
    /// A rejected run leaves the previous series untouched.
    pub fn run(&mut self, switch_age: u32, scenario_rates: &[f64]) -> ProjectionResult<&RecordedSeries> {
        match self.project(switch_age, scenario_rates) {
            Ok(run) => {
                let run = self.last_run.insert(run);
                Ok(&run.series)
            }
            Err(e) => {
                log::warn!("{}: projection rejected: {}", self.params.identifier, e);
                Err(e)
            }
        }
    }

    fn validate(&self, switch_age: u32, scenario_rates: &[f64]) -> ProjectionResult<()> {
        if scenario_rates.is_empty() {
            return Err(ProjectionError::EmptyScenarioSet);
        }
        if let Some((index, &rate)) = scenario_rates
            .iter()
            .enumerate()
            .find(|(_, r)| !r.is_finite() || **r <= -1.0)
        {
            return Err(ProjectionError::InvalidScenarioRate { index, rate });
        }
        self.ages.validate_switch_age(switch_age)?;
        if self.params.step_interval_years == 0 {
            return Err(ProjectionError::InvalidStepInterval);
        }
        Ok(())
    }

    /// Simulate both phases into a fresh series without touching `self`
    fn project(&self, switch_age: u32, scenario_rates: &[f64]) -> ProjectionResult<CompletedRun> {
        self.validate(switch_age, scenario_rates)?;

        let rates = ScenarioVector::from_slice(scenario_rates);
        let mut state = SimulationState::start(&self.params, self.ages, switch_age, rates.clone());
        let mut series = RecordedSeries::with_capacity(self.total_years());

        let accumulation_years = state.accumulation_years();
        let decumulation_years = state.decumulation_years();
        log::info!(
            "{}: projecting switch age {} ({} accumulation, {} decumulation years, {} scenarios)",
            self.params.identifier,
            switch_age,
            accumulation_years,
            decumulation_years,
            rates.len(),
        );

        for year in 0..accumulation_years {
            series.push(state.accumulate_year(&self.params, year));
        }
        log::debug!(
            "{}: accumulation done, disability premiums paid {:.2}",
            self.params.identifier,
            state.cumulative_disability_paid,
        );

        state.enter_decumulation();
        for _ in 0..decumulation_years {
            series.push(state.decumulate_year(&self.params));
        }
        log::debug!(
            "{}: decumulation done, disability benefits received {:.2}",
            self.params.identifier,
            state.cumulative_disability_received,
        );

        Ok(CompletedRun {
            switch_age,
            scenario_rates: rates,
            series,
        })
    }

    fn completed(&self) -> ProjectionResult<&CompletedRun> {
        let run = self
            .last_run
            .as_ref()
            .ok_or(ProjectionError::UninitializedSeriesAccess)?;
        run.series.ensure_len(self.total_years())?;
        Ok(run)
    }

    /// Series of the last successful run
    pub fn series(&self) -> ProjectionResult<&RecordedSeries> {
        self.completed().map(|run| &run.series)
    }

    /// Scenario rates of the last successful run
    pub fn scenario_rates(&self) -> ProjectionResult<&ScenarioVector> {
        self.completed().map(|run| &run.scenario_rates)
    }

    pub fn switch_age(&self) -> ProjectionResult<u32> {
        self.completed().map(|run| run.switch_age)
    }

    pub fn wealth_trajectories(&self) -> ProjectionResult<Vec<WealthTrajectory>> {
        let run = self.completed()?;
        run.series.wealth_trajectories(
            self.total_years(),
            &run.scenario_rates,
            &self.params.annuity_formula,
        )
    }

    pub fn disability_benefit_trajectory(&self) -> ProjectionResult<Vec<f64>> {
        self.completed()?.series.disability_benefit_trajectory(self.total_years())
    }

    pub fn disability_cashflows(&self) -> ProjectionResult<DisabilityCashflows> {
        self.completed()?.series.disability_cashflows(self.total_years())
    }

    pub fn contribution_trajectories(&self) -> ProjectionResult<ContributionTrajectories> {
        self.completed()?.series.contribution_trajectories(self.total_years())
    }

    /// Final totals, wealth and monthly annuity per scenario
    pub fn summary(&self) -> ProjectionResult<ProjectionSummary> {
        let run = self.completed()?;
        let (paid, received, final_wealth) = match run.series.last() {
            Some(last) => (
                last.cumulative_disability_paid,
                last.cumulative_disability_received,
                last.pension_wealth.clone(),
            ),
            None => (0.0, 0.0, ScenarioVector::zeros(run.scenario_rates.len())),
        };

        Ok(ProjectionSummary {
            identifier: self.params.identifier.clone(),
            switch_age: run.switch_age,
            scenario_rates: run.scenario_rates.as_slice().to_vec(),
            total_disability_paid: paid,
            total_disability_received: received,
            monthly_annuities: final_wealth.iter().map(|&w| self.params.monthly_annuity(w)).collect(),
            final_wealth: final_wealth.into_vec(),
        })
    }
}
