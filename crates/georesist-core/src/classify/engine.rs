use crate::bands::schema::BandTable;
use crate::locale::Locale;
use crate::parsing::values::NumericInput;
use serde::{Deserialize, Serialize};

/// Label pair for values that are not numbers.
pub const INVALID: &str = "Invalid";

/// Label pair for numbers that fall in no band.
pub const OUT_OF_RANGE: &str = "Out of range";

/// Canonical (untranslated) label pair for one resistivity value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub nace: String,
    pub astm: String,
}

impl Classification {
    fn both(label: &str) -> Self {
        Classification {
            nace: label.to_string(),
            astm: label.to_string(),
        }
    }

    /// Translate both labels for display.
    pub fn localized(&self, locale: &Locale) -> Classification {
        Classification {
            nace: locale.label(&self.nace).to_string(),
            astm: locale.label(&self.astm).to_string(),
        }
    }
}

/// Classify a resistivity value (ohm-meters) against a band table.
///
/// Bands are scanned in table order and the first closed interval that
/// contains the value wins. Bounds are compared exactly, so a value
/// inside a seam such as (50, 50.01) matches no band.
pub fn classify<'a>(value: impl Into<NumericInput<'a>>, table: &BandTable) -> Classification {
    let Some(value) = value.into().to_decimal() else {
        return Classification::both(INVALID);
    };

    table
        .bands
        .iter()
        .find(|band| band.contains(value))
        .map(|band| Classification {
            nace: band.nace.clone(),
            astm: band.astm.clone(),
        })
        .unwrap_or_else(|| Classification::both(OUT_OF_RANGE))
}
