use crate::locale::Locale;
use crate::model::{Column, Language, MeasurementRow};
use serde::{Deserialize, Serialize};

/// The normalized measurement table with localized column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementTable {
    pub language: Language,
    /// Column headers in [`Column::ALL`] order.
    pub headers: Vec<String>,
    pub rows: Vec<MeasurementRow>,
}

impl MeasurementTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn header(&self, column: Column) -> &str {
        let idx = Column::ALL
            .iter()
            .position(|&c| c == column)
            .unwrap_or_default();
        self.headers.get(idx).map(String::as_str).unwrap_or("")
    }
}

/// Collect resolved rows under the locale's column headers.
///
/// Rows keep parse order; nothing is sorted, filtered or deduplicated.
pub fn assemble_table(rows: Vec<MeasurementRow>, locale: &Locale) -> MeasurementTable {
    MeasurementTable {
        language: locale.language,
        headers: Column::ALL
            .iter()
            .map(|&c| locale.column(c).to_string())
            .collect(),
        rows,
    }
}
