//! Projection engine for the two-phase contract recurrence

mod vector;
mod state;
mod series;
mod engine;

pub use vector::ScenarioVector;
pub use state::{ProjectionAges, SimulationState, DEFAULT_CURRENT_AGE, DEFAULT_RETIREMENT_AGE};
pub use series::{
    ContributionTrajectories, DisabilityCashflows, Phase, ProjectionSummary, RecordedSeries,
    WealthTrajectory, YearSnapshot,
};
pub use engine::ContractProjector;
