//! Contract parameters, configuration loading and sample contracts

mod data;
pub mod loader;
pub mod presets;

pub use data::{AnnuityFormula, ContractParameters};
pub use loader::{load_contracts, load_contracts_from_reader, ContractConfig};
pub use presets::{sample_al, sample_contracts, sample_vw, DEFAULT_SCENARIO_RATES, DEFAULT_SWITCH_AGE};
