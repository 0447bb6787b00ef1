//! Load contract configurations from JSON

use super::{AnnuityFormula, ContractParameters};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

fn default_step_interval_years() -> u32 {
    3
}

/// Raw configuration record for one contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractConfig {
    #[serde(alias = "name")]
    pub identifier: String,
    pub passive_growth_rate: f64,
    pub contribution_step_rate: f64,
    pub inflation_adjustment_rate: f64,
    #[serde(default = "default_step_interval_years")]
    pub step_interval_years: u32,
    pub monthly_disability_premium: f64,
    pub monthly_pension_contribution: f64,
    pub monthly_disability_benefit: f64,
    /// Monthly annuity paid per 10,000 of accumulated wealth
    pub annuity_factor_per_10k: f64,
}

impl ContractConfig {
    pub fn into_parameters(self) -> ContractParameters {
        ContractParameters {
            identifier: self.identifier,
            passive_growth_rate: self.passive_growth_rate,
            contribution_step_rate: self.contribution_step_rate,
            inflation_adjustment_rate: self.inflation_adjustment_rate,
            step_interval_years: self.step_interval_years,
            monthly_disability_premium: self.monthly_disability_premium,
            monthly_pension_contribution: self.monthly_pension_contribution,
            monthly_disability_benefit: self.monthly_disability_benefit,
            annuity_formula: AnnuityFormula::per_10k(self.annuity_factor_per_10k),
        }
    }
}

/// A file holds either one contract or a list of them
#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigFile {
    Many(Vec<ContractConfig>),
    One(ContractConfig),
}

/// Load contracts from any reader (file, string buffer, ...)
pub fn load_contracts_from_reader<R: Read>(reader: R) -> Result<Vec<ContractParameters>, ConfigError> {
    let configs = match serde_json::from_reader(reader)? {
        ConfigFile::Many(configs) => configs,
        ConfigFile::One(config) => vec![config],
    };

    Ok(configs.into_iter().map(ContractConfig::into_parameters).collect())
}

/// Load all contracts from a JSON file
pub fn load_contracts<P: AsRef<Path>>(path: P) -> Result<Vec<ContractParameters>, ConfigError> {
    let file = File::open(path.as_ref())?;
    let contracts = load_contracts_from_reader(BufReader::new(file))?;
    log::debug!("Loaded {} contract(s) from {}", contracts.len(), path.as_ref().display());
    Ok(contracts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SINGLE: &str = r#"{
        "identifier": "AL",
        "passive_growth_rate": 0.05,
        "contribution_step_rate": 0.03,
        "inflation_adjustment_rate": 0.02,
        "monthly_disability_premium": 72.55,
        "monthly_pension_contribution": 30.49,
        "monthly_disability_benefit": 1500,
        "annuity_factor_per_10k": 21.47
    }"#;

    #[test]
    fn test_load_single_contract() {
        let contracts = load_contracts_from_reader(SINGLE.as_bytes()).expect("valid config");
        assert_eq!(contracts.len(), 1);

        let c = &contracts[0];
        assert_eq!(c.identifier, "AL");
        assert_eq!(c.step_interval_years, 3);
        assert_relative_eq!(c.monthly_annuity(10_000.0), 21.47, epsilon = 1e-12);
    }

    #[test]
    fn test_load_contract_list() {
        let json = format!("[{}, {}]", SINGLE, SINGLE.replace("\"AL\"", "\"VW\""));
        let contracts = load_contracts_from_reader(json.as_bytes()).expect("valid config");
        let names: Vec<_> = contracts.iter().map(|c| c.identifier.as_str()).collect();
        assert_eq!(names, vec!["AL", "VW"]);
    }

    #[test]
    fn test_name_alias_and_explicit_interval() {
        let json = SINGLE
            .replace("\"identifier\"", "\"name\"")
            .replace("\"passive_growth_rate\"", "\"step_interval_years\": 2, \"passive_growth_rate\"");
        let contracts = load_contracts_from_reader(json.as_bytes()).expect("valid config");
        assert_eq!(contracts[0].identifier, "AL");
        assert_eq!(contracts[0].step_interval_years, 2);
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = SINGLE.replace("\"monthly_disability_benefit\": 1500,", "");
        let result = load_contracts_from_reader(json.as_bytes());
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_contracts("does/not/exist.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
