//! Pension Projection CLI
//!
//! Projects the sample contracts (or contracts loaded from JSON files) and
//! prints a summary per contract.

use anyhow::Context;
use clap::Parser;
use pension_projection::contract::{
    load_contracts, sample_contracts, DEFAULT_SCENARIO_RATES, DEFAULT_SWITCH_AGE,
};
use pension_projection::report::{format_summary, write_series_csv_path};
use pension_projection::ScenarioRunner;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Project pension wealth and disability cashflows per contract")]
struct Args {
    /// Age at which disability premiums stop and benefits start
    #[arg(long, default_value_t = DEFAULT_SWITCH_AGE)]
    switch_age: u32,

    /// Comma-separated annual fund growth rates, e.g. 0.02,0.04
    #[arg(long, value_delimiter = ',')]
    rates: Option<Vec<f64>>,

    /// JSON contract configuration file (repeatable); defaults to the sample contracts
    #[arg(long)]
    config: Vec<PathBuf>,

    /// Directory for per-contract CSV output
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let contracts = if args.config.is_empty() {
        sample_contracts()
    } else {
        let mut contracts = Vec::new();
        for path in &args.config {
            let loaded = load_contracts(path)
                .with_context(|| format!("loading contracts from {}", path.display()))?;
            contracts.extend(loaded);
        }
        contracts
    };

    let rates = args.rates.unwrap_or_else(|| DEFAULT_SCENARIO_RATES.to_vec());
    let runner = ScenarioRunner::new(args.switch_age, rates);

    println!("Projecting {} contract(s), switch age {}", contracts.len(), runner.switch_age());

    for result in runner.run_contracts(contracts) {
        let projector = result.context("projection failed")?;
        println!("\n{}", format_summary(&projector)?);

        if let Some(dir) = &args.output_dir {
            let path = write_series_csv_path(&projector, dir)
                .with_context(|| format!("writing CSV for {}", projector.params().identifier))?;
            println!("Series written to: {}", path.display());
        }
    }

    Ok(())
}
