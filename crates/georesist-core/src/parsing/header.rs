/// Glyph the model uses for the sequence-number column header.
const NUMERO_SIGN: char = '№';

/// Point-column header words (borehole / point).
const POINT_HEADER_WORDS: &[&str] = &[
    "скважина", "скв", "точка", "point", "borehole", "nuqta", "quduq",
];

/// Check whether a pipe-delimited line is a table header row.
///
/// Only the sequence and point cells are inspected: a header has no
/// digit in its sequence cell and a header word in its point cell.
/// Measurement cells never make a line a header, so "no data" stays a
/// data row.
pub fn is_header_line(line: &str) -> bool {
    if line.contains(NUMERO_SIGN) {
        return true;
    }

    let mut cells = line
        .trim_start_matches(|c: char| c == '-' || c.is_whitespace())
        .split('|')
        .map(str::trim)
        .filter(|c| !c.is_empty());
    let (Some(sequence), Some(point)) = (cells.next(), cells.next()) else {
        return false;
    };

    !sequence.chars().any(|c| c.is_ascii_digit()) && is_point_header(point)
}

fn is_point_header(cell: &str) -> bool {
    let lower = cell.to_lowercase();
    if lower.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    let first_word = lower
        .split(|c: char| !c.is_alphanumeric())
        .find(|w| !w.is_empty())
        .unwrap_or("");
    POINT_HEADER_WORDS.contains(&first_word)
}

/// Check whether a line is a separator decoration such as `|---|---|`,
/// `|:---:|` or `=====`.
pub fn is_separator_line(line: &str) -> bool {
    let trimmed = line.trim();
    if !(trimmed.contains("--") || trimmed.contains("==")) {
        return false;
    }
    trimmed
        .chars()
        .all(|c| matches!(c, '|' | '-' | '=' | ':' | '+') || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numero_header() {
        assert!(is_header_line("| № | Точка | a, м | R, Ом | ρ, Ом·м |"));
    }

    #[test]
    fn test_word_headers() {
        assert!(is_header_line("| No | Point | a (m) | R (Ohm) | rho |"));
        assert!(is_header_line("| # | Скважина | a | R | ρ |"));
        assert!(is_header_line("| T/r | Nuqta | a | R | ρ |"));
        assert!(is_header_line("- | No | Borehole | a | R | rho |"));
    }

    #[test]
    fn test_data_row_with_point_word_is_not_header() {
        assert!(!is_header_line("| 1 | Скв. 3 | 1.5 | 4.2 | 40 |"));
        assert!(!is_header_line("| 2 | Point 7 | 150 | 3,1 | - |"));
        assert!(!is_header_line("| 3 | T-1 | 1 | 10 | 62.8 |"));
    }

    #[test]
    fn test_letter_only_point_id_is_not_header() {
        assert!(!is_header_line("| 2 | Точка А | 1 | 10 | 70 |"));
        assert!(!is_header_line("| 3 | Point North | 1 | 10 | 70 |"));
        assert!(!is_header_line("| 4 | Скв. Б | 1 | 10 | 70 |"));
    }

    #[test]
    fn test_placeholder_phrase_in_measurement_cell_is_not_header() {
        assert!(!is_header_line("| 1 | T-1 | 1 | 10 | no data |"));
        assert!(!is_header_line("| 1 | T-1 | 1 | no reading | none given |"));
    }

    #[test]
    fn test_word_inside_other_word_is_not_header() {
        // "points" is not "point"
        assert!(!is_header_line("| # | points | a | R | ρ |"));
    }

    #[test]
    fn test_separator_lines() {
        assert!(is_separator_line("|---|---|---|---|---|"));
        assert!(is_separator_line("| :---: | --- |"));
        assert!(is_separator_line("======"));
        assert!(is_separator_line("  +----+----+  "));
    }

    #[test]
    fn test_not_separator() {
        assert!(!is_separator_line("| 1 | T-1 | 1 | -- | 20 |"));
        assert!(!is_separator_line("| - | - |"));
        assert!(!is_separator_line(""));
    }
}
