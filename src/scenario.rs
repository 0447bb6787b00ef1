//! Scenario runner for projecting several contracts side by side
//!
//! Every contract gets its own projector, so runs share no state and can
//! proceed in parallel.

use crate::contract::{ContractParameters, DEFAULT_SCENARIO_RATES, DEFAULT_SWITCH_AGE};
use crate::error::ProjectionResult;
use crate::projection::{ContractProjector, ProjectionAges};
use rayon::prelude::*;

/// Shared run inputs applied to every contract
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(45, vec![0.02, 0.04, 0.06]);
/// for projector in runner.run_contracts(sample_contracts()) {
///     println!("{:?}", projector?.summary()?);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    switch_age: u32,
    scenario_rates: Vec<f64>,
    ages: ProjectionAges,
}

impl ScenarioRunner {
    pub fn new(switch_age: u32, scenario_rates: Vec<f64>) -> Self {
        Self {
            switch_age,
            scenario_rates,
            ages: ProjectionAges::default(),
        }
    }

    /// Use a non-default projection horizon
    pub fn with_ages(mut self, ages: ProjectionAges) -> Self {
        self.ages = ages;
        self
    }

    pub fn switch_age(&self) -> u32 {
        self.switch_age
    }

    pub fn scenario_rates(&self) -> &[f64] {
        &self.scenario_rates
    }

    /// Project a single contract
    pub fn run(&self, params: ContractParameters) -> ProjectionResult<ContractProjector> {
        let mut projector = ContractProjector::new(params).with_ages(self.ages);
        projector.run(self.switch_age, &self.scenario_rates)?;
        Ok(projector)
    }

    /// Project all contracts in parallel; results keep the input order
    pub fn run_contracts(
        &self,
        contracts: Vec<ContractParameters>,
    ) -> Vec<ProjectionResult<ContractProjector>> {
        contracts
            .into_par_iter()
            .map(|params| self.run(params))
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(DEFAULT_SWITCH_AGE, DEFAULT_SCENARIO_RATES.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{sample_al, sample_contracts};
    use crate::error::ProjectionError;

    #[test]
    fn test_run_contracts_in_order() {
        let runner = ScenarioRunner::default();
        let results = runner.run_contracts(sample_contracts());

        let names: Vec<String> = results
            .iter()
            .map(|r| r.as_ref().expect("valid run").params().identifier.clone())
            .collect();
        assert_eq!(names, vec!["AL", "VW"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let runner = ScenarioRunner::default();
        let parallel = runner.run_contracts(sample_contracts());

        for (params, result) in sample_contracts().into_iter().zip(parallel) {
            let sequential = runner.run(params).expect("valid run");
            let parallel = result.expect("valid run");
            assert_eq!(sequential.series(), parallel.series());
        }
    }

    #[test]
    fn test_failure_is_per_contract() {
        let runner = ScenarioRunner::new(80, vec![0.02]);
        let results = runner.run_contracts(vec![sample_al()]);
        assert!(matches!(results[0], Err(ProjectionError::InvalidSwitchAge { .. })));
    }

    #[test]
    fn test_custom_horizon_applies_to_every_contract() {
        let ages = ProjectionAges { current_age: 40, retirement_age: 50 };
        let runner = ScenarioRunner::new(45, vec![0.03]).with_ages(ages);
        for result in runner.run_contracts(sample_contracts()) {
            let projector = result.expect("valid run");
            assert_eq!(projector.series().map(|s| s.len()), Ok(10));
        }
    }
}
