use crate::error::GeoresistError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel used for every missing or unparseable cell.
pub const MISSING: &str = "-";

/// What the upstream text-generation step handed us.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum ModelReply {
    /// A normal completion, possibly containing a pipe-delimited table.
    Completion(String),
    /// The upstream call failed; the message describes why.
    UpstreamError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ru,
    En,
    Uz,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Ru, Language::En, Language::Uz];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
            Language::Uz => "uz",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = GeoresistError;

    /// Unknown codes are rejected; there is no silent default language.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" => Ok(Language::Ru),
            "en" => Ok(Language::En),
            "uz" => Ok(Language::Uz),
            _ => Err(GeoresistError::UnknownLanguage(s.to_string())),
        }
    }
}

/// The fixed columns of the measurement table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Sequence,
    Point,
    Distance,
    Resistance,
    Resistivity,
    CorrosionNace,
    CorrosionAstm,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Sequence,
        Column::Point,
        Column::Distance,
        Column::Resistance,
        Column::Resistivity,
        Column::CorrosionNace,
        Column::CorrosionAstm,
    ];
}

/// How the resistivity cell of a row was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResistivitySource {
    /// Taken from the reply as-is.
    Supplied,
    /// Computed as 2·π·R·a because the supplied value was absent.
    Calculated,
    /// Computed because the supplied value was below the plausibility floor.
    Replaced,
    /// Neither supplied nor computable.
    Missing,
}

/// One normalized row of the measurement table.
///
/// Every cell is always present; unparseable input becomes [`MISSING`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementRow {
    /// Row ordinal exactly as the reply gave it.
    pub sequence_label: String,
    pub point_id: String,
    /// Electrode spacing in meters, two decimals.
    pub distance_m: String,
    /// Instrument reading in ohms, two decimals.
    pub resistance_ohm: String,
    /// Apparent resistivity in ohm-meters, two decimals.
    pub resistivity_ohm_m: String,
    pub corrosion_nace: String,
    pub corrosion_astm: String,
    pub resistivity_source: ResistivitySource,
}

impl MeasurementRow {
    pub fn cell(&self, column: Column) -> &str {
        match column {
            Column::Sequence => &self.sequence_label,
            Column::Point => &self.point_id,
            Column::Distance => &self.distance_m,
            Column::Resistance => &self.resistance_ohm,
            Column::Resistivity => &self.resistivity_ohm_m,
            Column::CorrosionNace => &self.corrosion_nace,
            Column::CorrosionAstm => &self.corrosion_astm,
        }
    }

    /// Cells in column order.
    pub fn cells(&self) -> impl Iterator<Item = (Column, &str)> + '_ {
        Column::ALL.iter().map(move |&c| (c, self.cell(c)))
    }
}
