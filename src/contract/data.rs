//! Contract parameter structures for the pension contract and its disability rider

use std::fmt;
use std::sync::Arc;

/// Conversion from accumulated pension wealth to a monthly annuity payout
#[derive(Clone)]
pub struct AnnuityFormula {
    label: String,
    formula: Arc<dyn Fn(f64) -> f64 + Send + Sync>,
}

impl AnnuityFormula {
    /// Linear payout rule: `factor` currency units per month for every 10,000 of wealth
    pub fn per_10k(factor: f64) -> Self {
        Self {
            label: format!("{} per 10k", factor),
            formula: Arc::new(move |wealth| wealth / 10_000.0 * factor),
        }
    }

    /// Wrap an arbitrary payout function
    pub fn from_fn<F>(label: impl Into<String>, formula: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            formula: Arc::new(formula),
        }
    }

    /// Monthly annuity for the given wealth
    pub fn evaluate(&self, wealth: f64) -> f64 {
        (self.formula)(wealth)
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for AnnuityFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnuityFormula")
            .field("label", &self.label)
            .finish()
    }
}

/// Static parameters of one pension contract with a disability (BU) rider
#[derive(Debug, Clone)]
pub struct ContractParameters {
    /// Contract label used in reports
    pub identifier: String,

    /// Annual growth of the monthly pension contribution after the switch age
    pub passive_growth_rate: f64,

    /// Step increase applied to all three monthly amounts during accumulation
    pub contribution_step_rate: f64,

    /// Annual increase of the disability benefit after the switch age
    pub inflation_adjustment_rate: f64,

    /// Cadence of the contribution step, in years
    pub step_interval_years: u32,

    /// Starting monthly disability premium
    pub monthly_disability_premium: f64,

    /// Starting monthly pension contribution
    pub monthly_pension_contribution: f64,

    /// Starting monthly disability benefit
    pub monthly_disability_benefit: f64,

    /// Wealth-to-annuity conversion applied at retirement
    pub annuity_formula: AnnuityFormula,
}

impl ContractParameters {
    /// Monthly annuity for the given accumulated wealth
    pub fn monthly_annuity(&self, wealth: f64) -> f64 {
        self.annuity_formula.evaluate(wealth)
    }

    /// Whether the contribution step fires at the end of 0-indexed accumulation year `year`
    pub fn is_step_year(&self, year: u32) -> bool {
        self.step_interval_years > 0
            && year % self.step_interval_years == self.step_interval_years - 1
    }
}
