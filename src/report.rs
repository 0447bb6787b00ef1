//! Text summaries and CSV export of completed projections

use crate::error::{ConfigError, ProjectionResult};
use crate::projection::ContractProjector;
use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Console summary of a completed run
pub fn format_summary(projector: &ContractProjector) -> ProjectionResult<String> {
    let summary = projector.summary()?;
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{:-^60}", format!(" {} ", summary.identifier));
    let _ = writeln!(out, "Switch age: {}", summary.switch_age);
    let _ = writeln!(out, "Disability premiums paid:     {:>14.2}", summary.total_disability_paid);
    let _ = writeln!(out, "Disability benefits received: {:>14.2}", summary.total_disability_received);
    let _ = writeln!(out, "{:>10} {:>16} {:>14}", "Fund rate", "Pension wealth", "Monthly annuity");
    for ((rate, wealth), annuity) in summary
        .scenario_rates
        .iter()
        .zip(&summary.final_wealth)
        .zip(&summary.monthly_annuities)
    {
        let _ = writeln!(out, "{:>9.2}% {:>16.2} {:>14.2}", rate * 100.0, wealth, annuity);
    }

    Ok(out)
}

/// Write one CSV row per projected year
pub fn write_series_csv<W: Write>(projector: &ContractProjector, writer: W) -> Result<(), ConfigError> {
    let series = projector.series()?;
    let rates = projector.scenario_rates()?;
    let mut csv = csv::Writer::from_writer(writer);

    let mut header: Vec<String> = vec!["Year".into(), "Age".into(), "Phase".into()];
    header.extend(rates.iter().map(|r| format!("Wealth_{:.4}", r)));
    header.extend(
        [
            "DisabilityPaid",
            "DisabilityReceived",
            "MonthlyPensionContribution",
            "MonthlyDisabilityPremium",
            "MonthlyDisabilityBenefit",
        ]
        .iter()
        .map(|s| s.to_string()),
    );
    csv.write_record(&header)?;

    for snap in series.iter() {
        let mut record = vec![
            snap.year.to_string(),
            snap.age.to_string(),
            snap.phase.as_str().to_string(),
        ];
        record.extend(snap.pension_wealth.iter().map(|w| format!("{:.2}", w)));
        record.push(format!("{:.2}", snap.cumulative_disability_paid));
        record.push(format!("{:.2}", snap.cumulative_disability_received));
        record.push(format!("{:.4}", snap.monthly_pension_contribution));
        record.push(format!("{:.4}", snap.monthly_disability_premium));
        record.push(format!("{:.4}", snap.monthly_disability_benefit));
        csv.write_record(&record)?;
    }

    csv.flush()?;
    Ok(())
}

/// Write the series to `<dir>/<identifier>_projection.csv` and return the path
pub fn write_series_csv_path(
    projector: &ContractProjector,
    dir: &Path,
) -> Result<std::path::PathBuf, ConfigError> {
    let path = dir.join(format!("{}_projection.csv", projector.params().identifier));
    let file = File::create(&path)?;
    write_series_csv(projector, file)?;
    log::info!("Wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::sample_al;
    use crate::error::ProjectionError;

    fn completed() -> ContractProjector {
        let mut projector = ContractProjector::new(sample_al());
        projector.run(45, &[0.02, 0.05]).expect("valid run");
        projector
    }

    #[test]
    fn test_summary_lists_every_scenario() {
        let text = format_summary(&completed()).expect("completed run");
        assert!(text.contains(" AL "));
        assert!(text.contains("Switch age: 45"));
        assert!(text.contains("2.00%"));
        assert!(text.contains("5.00%"));
    }

    #[test]
    fn test_summary_requires_run() {
        let projector = ContractProjector::new(sample_al());
        assert_eq!(format_summary(&projector), Err(ProjectionError::UninitializedSeriesAccess));
    }

    #[test]
    fn test_csv_has_one_row_per_year() {
        let mut buf = Vec::new();
        write_series_csv(&completed(), &mut buf).expect("writable");

        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 43);
        assert!(lines[0].starts_with("Year,Age,Phase,Wealth_0.0200,Wealth_0.0500,DisabilityPaid"));
        assert!(lines[1].starts_with("0,25,accumulation,"));
        assert!(lines[42].starts_with("41,66,decumulation,"));
    }

    #[test]
    fn test_csv_requires_run() {
        let projector = ContractProjector::new(sample_al());
        let result = write_series_csv(&projector, Vec::new());
        assert!(matches!(result, Err(ConfigError::Projection(_))));
    }
}
