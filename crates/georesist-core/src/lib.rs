pub mod bands;
pub mod classify;
pub mod diagnostics;
pub mod error;
pub mod locale;
pub mod model;
pub mod parsing;
pub mod prompt;
pub mod resolve;
pub mod table;

use bands::schema::BandTable;
use diagnostics::Diagnostic;
use error::GeoresistError;
use locale::Locale;
use model::{Language, ModelReply};
use serde::{Deserialize, Serialize};
use table::MeasurementTable;

/// Everything produced from one model reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedReport {
    pub language: Language,
    pub table: MeasurementTable,
    pub diagnostics: Vec<Diagnostic>,
    /// Set when the upstream call failed; the table is then empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_error: Option<String>,
}

/// Main API entry point: turn a model reply into a normalized,
/// classified table plus diagnostics.
///
/// Never fails. An upstream error yields an empty table and the error
/// message, both in `upstream_error` and as the first diagnostic.
pub fn process_reply(reply: &ModelReply, locale: &Locale, bands: &BandTable) -> ProcessedReport {
    let text = match reply {
        ModelReply::Completion(text) => text,
        ModelReply::UpstreamError(message) => {
            tracing::warn!(%message, "upstream text generation failed");
            return ProcessedReport {
                language: locale.language,
                table: table::assemble_table(Vec::new(), locale),
                diagnostics: vec![diagnostics::upstream_error(message, locale)],
                upstream_error: Some(message.clone()),
            };
        }
    };

    let parsed = parsing::parse_rows(text);
    let rows = resolve::resolve_rows(&parsed.rows, bands, locale);
    let table = table::assemble_table(rows, locale);
    let diagnostics = diagnostics::scan(&table, &parsed.rows, &parsed.skipped_lines, locale);

    if table.is_empty() {
        tracing::warn!("no measurement rows found in reply");
    }
    tracing::info!(
        rows = table.len(),
        skipped = parsed.skipped_lines.len(),
        diagnostics = diagnostics.len(),
        language = %locale.language,
        "processed reply"
    );

    ProcessedReport {
        language: locale.language,
        table,
        diagnostics,
        upstream_error: None,
    }
}

/// Convenience entry point using the built-in band table and locale.
///
/// Fails fast on an unknown language code.
pub fn process_reply_for(
    reply: &ModelReply,
    language_code: &str,
) -> Result<ProcessedReport, GeoresistError> {
    let locale = Locale::for_code(language_code)?;
    let bands = bands::builtin::soil_corrosivity()?;
    Ok(process_reply(reply, &locale, &bands))
}
