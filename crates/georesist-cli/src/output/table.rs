use georesist_core::diagnostics::{Diagnostic, DiagnosticKind};
use georesist_core::model::Column;
use georesist_core::ProcessedReport;

pub fn print(report: &ProcessedReport) {
    let table = &report.table;

    if let Some(ref message) = report.upstream_error {
        println!("  Upstream error: {}\n", message);
    }

    if !table.is_empty() {
        // Width per column, counted in chars since headers are Cyrillic
        let widths: Vec<usize> = Column::ALL
            .iter()
            .map(|&col| {
                table
                    .rows
                    .iter()
                    .map(|r| r.cell(col).chars().count())
                    .chain(std::iter::once(table.header(col).chars().count()))
                    .max()
                    .unwrap_or(1)
            })
            .collect();

        let header: Vec<String> = Column::ALL
            .iter()
            .zip(&widths)
            .map(|(&col, &w)| pad(table.header(col), w))
            .collect();
        println!("  {}", header.join(" | "));

        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        println!("  {}", rule.join("-+-"));

        for row in &table.rows {
            let cells: Vec<String> = row
                .cells()
                .zip(&widths)
                .map(|((_, value), &w)| pad(value, w))
                .collect();
            println!("  {}", cells.join(" | "));
        }
        println!();
    }

    // Upstream error is already shown above
    let notes: Vec<&Diagnostic> = report
        .diagnostics
        .iter()
        .filter(|d| d.kind != DiagnosticKind::UpstreamError)
        .collect();

    if !notes.is_empty() {
        println!("  Notes:");
        for d in notes {
            println!("    - {}", d.message);
        }
        println!();
    }
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    let mut out = String::with_capacity(value.len() + width.saturating_sub(len));
    out.push_str(value);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    out
}
