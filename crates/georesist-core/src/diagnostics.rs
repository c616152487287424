use crate::locale::{render, Locale};
use crate::model::{Column, ResistivitySource};
use crate::parsing::{FieldTokens, SkippedLine, MIN_TOKENS};
use crate::table::MeasurementTable;
use serde::{Deserialize, Serialize};

/// Cell values treated as "no data" (compared trimmed and lowercased).
pub const PLACEHOLDERS: &[&str] = &["-", "nan", "", "none"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    UpstreamError,
    MissingCell,
    MissingReading,
    ResistivityCalculated,
    ResistivityReplaced,
    ResistivityMissing,
    SkippedLine,
    NoRows,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 1-based row position in the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<Column>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_id: Option<String>,
    /// 1-based line in the model reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    fn new(kind: DiagnosticKind, message: String) -> Self {
        Diagnostic {
            kind,
            row: None,
            column: None,
            point_id: None,
            line: None,
            message,
        }
    }
}

pub fn is_placeholder(value: &str) -> bool {
    let lower = value.trim().to_lowercase();
    PLACEHOLDERS.contains(&lower.as_str())
}

/// Run the table passes: missing cells, explanations, skipped lines,
/// and an empty-table note.
///
/// Passes are read-only and independent, so one cell may be reported
/// twice (as missing and with an explanation).
pub fn scan(
    table: &MeasurementTable,
    rows: &[FieldTokens],
    skipped: &[SkippedLine],
    locale: &Locale,
) -> Vec<Diagnostic> {
    let mut out = scan_missing_cells(table, locale);
    out.extend(scan_explanations(table, rows, locale));
    out.extend(scan_skipped_lines(skipped, locale));
    if table.is_empty() {
        out.push(no_rows(locale));
    }
    out
}

/// Flag every placeholder cell, naming its row and column.
pub fn scan_missing_cells(table: &MeasurementTable, locale: &Locale) -> Vec<Diagnostic> {
    let mut out = Vec::new();

    for (i, row) in table.rows.iter().enumerate() {
        for (column, value) in row.cells() {
            if !is_placeholder(value) {
                continue;
            }
            let row_no = (i + 1).to_string();
            let message = render(
                &locale.messages.missing_cell,
                &[("row", row_no.as_str()), ("column", locale.column(column))],
            );
            out.push(Diagnostic {
                row: Some(i + 1),
                column: Some(column),
                point_id: Some(row.point_id.clone()),
                ..Diagnostic::new(DiagnosticKind::MissingCell, message)
            });
        }
    }

    out
}

/// Explain missing readings and how each resistivity was obtained,
/// keyed by point id. `rows` are the parsed rows the table was built
/// from, in the same order.
pub fn scan_explanations(
    table: &MeasurementTable,
    rows: &[FieldTokens],
    locale: &Locale,
) -> Vec<Diagnostic> {
    let m = &locale.messages;
    let mut out = Vec::new();

    for (i, row) in table.rows.iter().enumerate() {
        let point = row.point_id.as_str();
        let value = row.resistivity_ohm_m.as_str();
        let keyed = |kind, column, message| Diagnostic {
            row: Some(i + 1),
            column: Some(column),
            point_id: Some(point.to_string()),
            line: rows.get(i).map(|r| r.line),
            ..Diagnostic::new(kind, message)
        };

        if is_placeholder(&row.resistance_ohm) {
            out.push(keyed(
                DiagnosticKind::MissingReading,
                Column::Resistance,
                render(&m.missing_reading, &[("point", point)]),
            ));
        }

        match row.resistivity_source {
            ResistivitySource::Supplied => {}
            ResistivitySource::Calculated => out.push(keyed(
                DiagnosticKind::ResistivityCalculated,
                Column::Resistivity,
                render(&m.resistivity_calculated, &[("point", point), ("value", value)]),
            )),
            ResistivitySource::Replaced => {
                let supplied = rows.get(i).map(|r| r.get(4)).unwrap_or("");
                out.push(keyed(
                    DiagnosticKind::ResistivityReplaced,
                    Column::Resistivity,
                    render(
                        &m.resistivity_replaced,
                        &[("point", point), ("supplied", supplied), ("value", value)],
                    ),
                ));
            }
            ResistivitySource::Missing => out.push(keyed(
                DiagnosticKind::ResistivityMissing,
                Column::Resistivity,
                render(&m.resistivity_missing, &[("point", point)]),
            )),
        }
    }

    out
}

/// Report row candidates that were dropped for having too few fields.
pub fn scan_skipped_lines(skipped: &[SkippedLine], locale: &Locale) -> Vec<Diagnostic> {
    let required = MIN_TOKENS.to_string();
    skipped
        .iter()
        .map(|s| {
            let line = s.line.to_string();
            let count = s.token_count.to_string();
            let message = render(
                &locale.messages.skipped_line,
                &[
                    ("line", line.as_str()),
                    ("count", count.as_str()),
                    ("required", required.as_str()),
                ],
            );
            Diagnostic {
                line: Some(s.line),
                ..Diagnostic::new(DiagnosticKind::SkippedLine, message)
            }
        })
        .collect()
}

pub fn no_rows(locale: &Locale) -> Diagnostic {
    Diagnostic::new(DiagnosticKind::NoRows, locale.messages.no_rows.clone())
}

pub fn upstream_error(message: &str, locale: &Locale) -> Diagnostic {
    Diagnostic::new(
        DiagnosticKind::UpstreamError,
        render(&locale.messages.upstream_error, &[("message", message)]),
    )
}
