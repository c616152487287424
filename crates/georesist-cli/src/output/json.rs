use georesist_core::error::GeoresistError;
use georesist_core::ProcessedReport;

pub fn print(report: &ProcessedReport) -> Result<(), GeoresistError> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
