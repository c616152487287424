use crate::bands::schema::BandTable;
use crate::bands::validate_band_table;
use crate::error::GeoresistError;

const SOIL_CORROSIVITY_JSON: &str = include_str!("../../../../bands/soil-corrosivity.json");

/// Available predefined band tables.
pub const PRESETS: &[&str] = &["soil"];

/// The default band table: soil corrosivity by apparent resistivity.
pub fn soil_corrosivity() -> Result<BandTable, GeoresistError> {
    load_preset("soil")
}

/// Load a predefined band table by name.
pub fn load_preset(name: &str) -> Result<BandTable, GeoresistError> {
    match name {
        "soil" => {
            let table: BandTable = serde_json::from_str(SOIL_CORROSIVITY_JSON)?;
            validate_band_table(&table)?;
            Ok(table)
        }
        _ => Err(GeoresistError::BandTableInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
