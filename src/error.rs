//! Error types for contract loading and projection runs

use thiserror::Error;

/// Rejected projection calls and reporting views
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("Recorded series accessed before a projection run completed")]
    UninitializedSeriesAccess,

    #[error("Recorded series has {actual} years, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Switch age {switch_age} outside [{current_age}, {retirement_age}]")]
    InvalidSwitchAge {
        switch_age: u32,
        current_age: u32,
        retirement_age: u32,
    },

    #[error("Scenario rate set is empty")]
    EmptyScenarioSet,

    #[error("Scenario rate {rate} at index {index} is not a usable growth rate")]
    InvalidScenarioRate { index: usize, rate: f64 },

    #[error("Step interval must be at least one year")]
    InvalidStepInterval,
}

pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Failures while loading contract configurations or writing reports
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid contract configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}
