use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An ordered table of resistivity bands used by the classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandTable {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Unit of the band bounds, for display.
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Scanned in order; the first band containing the value wins.
    pub bands: Vec<CorrosionBand>,
}

/// One closed resistivity interval and its two labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrosionBand {
    /// Inclusive lower bound (as string for exact decimal).
    pub lower: Decimal,
    /// Inclusive upper bound; `None` means unbounded.
    #[serde(default)]
    pub upper: Option<Decimal>,
    /// Qualitative severity class (NACE).
    pub nace: String,
    /// Descriptive tag (ASTM).
    pub astm: String,
}

impl CorrosionBand {
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.lower && self.upper.map_or(true, |upper| value <= upper)
    }
}

fn default_unit() -> String {
    "Ohm·m".to_string()
}
