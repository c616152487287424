use georesist_core::locale::Locale;
use georesist_core::model::ModelReply;
use std::path::{Path, PathBuf};

use super::load_bands;
use crate::output;

pub fn run(
    reply_file: PathBuf,
    lang: &str,
    bands_file: Option<&Path>,
    output_format: &str,
    output_file: Option<PathBuf>,
    upstream_error: bool,
) -> Result<(), georesist_core::error::GeoresistError> {
    // Validate the language before touching any files
    let locale = Locale::for_code(lang)?;
    let bands = load_bands(bands_file)?;

    let text = std::fs::read_to_string(&reply_file)?;
    let reply = if upstream_error {
        ModelReply::UpstreamError(text.trim().to_string())
    } else {
        ModelReply::Completion(text)
    };

    let report = georesist_core::process_reply(&reply, &locale, &bands);

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&report)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Processed {} row(s), written to {}",
                report.table.len(),
                path.display()
            );
            for d in &report.diagnostics {
                eprintln!("  note: {}", d.message);
            }
        }
        None => match output_format {
            "json" => output::json::print(&report)?,
            _ => output::table::print(&report),
        },
    }

    Ok(())
}
