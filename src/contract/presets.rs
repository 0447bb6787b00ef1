//! Built-in sample contracts and the default run inputs

use super::{AnnuityFormula, ContractParameters};

/// Default age at which contributions switch to disability benefits
pub const DEFAULT_SWITCH_AGE: u32 = 45;

/// Default fund-growth scenarios (1% to 8%)
pub const DEFAULT_SCENARIO_RATES: [f64; 8] = [0.01, 0.02, 0.03, 0.04, 0.05, 0.06, 0.07, 0.08];

/// Sample contract "AL"
pub fn sample_al() -> ContractParameters {
    ContractParameters {
        identifier: "AL".to_string(),
        passive_growth_rate: 0.05,
        contribution_step_rate: 0.03,
        inflation_adjustment_rate: 0.02,
        step_interval_years: 3,
        monthly_disability_premium: 72.55,
        monthly_pension_contribution: 30.49,
        monthly_disability_benefit: 1500.0,
        annuity_formula: AnnuityFormula::per_10k(21.47),
    }
}

/// Sample contract "VW"
pub fn sample_vw() -> ContractParameters {
    ContractParameters {
        identifier: "VW".to_string(),
        passive_growth_rate: 0.10,
        contribution_step_rate: 0.03,
        inflation_adjustment_rate: 0.015,
        step_interval_years: 3,
        monthly_disability_premium: 63.13,
        monthly_pension_contribution: 39.87,
        monthly_disability_benefit: 1500.0,
        annuity_formula: AnnuityFormula::per_10k(21.52),
    }
}

/// Both sample contracts, in reporting order
pub fn sample_contracts() -> Vec<ContractParameters> {
    vec![sample_al(), sample_vw()]
}
