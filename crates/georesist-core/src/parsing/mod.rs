pub mod header;
pub mod values;

use header::{is_header_line, is_separator_line};
use serde::{Deserialize, Serialize};

/// Column delimiter of the table rows in a model reply.
pub const DELIMITER: char = '|';

/// Rows need at least: number, point, distance, resistance, resistivity.
pub const MIN_TOKENS: usize = 5;

/// Trimmed, non-empty fields of one table row, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTokens {
    /// 1-based line number in the reply.
    pub line: usize,
    pub tokens: Vec<String>,
}

impl FieldTokens {
    pub fn get(&self, idx: usize) -> &str {
        self.tokens.get(idx).map(String::as_str).unwrap_or("")
    }
}

/// A row candidate that was dropped for having too few fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    pub line: usize,
    pub text: String,
    pub token_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReply {
    pub rows: Vec<FieldTokens>,
    pub skipped_lines: Vec<SkippedLine>,
}

/// Parse a model reply into table rows.
///
/// Commentary, header rows and separator decorations are ignored.
/// Duplicate rows are kept: repeated field readings are real data.
pub fn parse_rows(reply: &str) -> ParsedReply {
    let mut parsed = ParsedReply::default();

    for (idx, line) in reply.lines().enumerate() {
        if !is_row_candidate(line) {
            continue;
        }

        let tokens = tokenize(line);
        if tokens.len() < MIN_TOKENS {
            tracing::debug!(
                line = idx + 1,
                tokens = tokens.len(),
                "dropping row candidate with too few fields"
            );
            parsed.skipped_lines.push(SkippedLine {
                line: idx + 1,
                text: line.trim().to_string(),
                token_count: tokens.len(),
            });
            continue;
        }

        parsed.rows.push(FieldTokens {
            line: idx + 1,
            tokens,
        });
    }

    parsed
}

/// A line is a row candidate if it carries the delimiter and is neither
/// a header nor a separator.
fn is_row_candidate(line: &str) -> bool {
    line.contains(DELIMITER) && !is_header_line(line) && !is_separator_line(line)
}

/// Split a row candidate into trimmed, non-empty fields.
///
/// Leading list decoration ("- | 1 | ...") is stripped first.
fn tokenize(line: &str) -> Vec<String> {
    line.trim_start_matches(|c: char| c == '-' || c.is_whitespace())
        .split(DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
