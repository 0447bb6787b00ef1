//! Pension Projection - yearly projection of a deferred-annuity contract with a disability rider
//!
//! This library provides:
//! - Contract parameters, JSON configuration loading and sample contracts
//! - The two-phase (accumulation, decumulation) projection across growth scenarios
//! - Reporting views over the recorded per-year series
//! - Parallel projection of competing contracts
//! - Text summaries and CSV export

pub mod contract;
pub mod error;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use contract::{AnnuityFormula, ContractParameters};
pub use error::{ConfigError, ProjectionError, ProjectionResult};
pub use projection::{ContractProjector, ProjectionSummary, RecordedSeries, ScenarioVector};
pub use scenario::ScenarioRunner;
