pub mod builtin;
pub mod schema;

use crate::error::GeoresistError;
use rust_decimal::Decimal;
use schema::BandTable;
use std::path::Path;

/// Load a band table from a JSON file.
pub fn load_band_table(path: &Path) -> Result<BandTable, GeoresistError> {
    let content = std::fs::read_to_string(path).map_err(|e| GeoresistError::BandTableLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_band_table(&content, path)
}

/// Parse a band table from a JSON string.
pub fn parse_band_table(json: &str, source: &Path) -> Result<BandTable, GeoresistError> {
    let table: BandTable =
        serde_json::from_str(json).map_err(|e| GeoresistError::BandTableLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_band_table(&table)?;
    Ok(table)
}

/// Parse a band table from a JSON string (no file path context).
pub fn parse_band_table_str(json: &str) -> Result<BandTable, GeoresistError> {
    let table: BandTable = serde_json::from_str(json).map_err(GeoresistError::Json)?;
    validate_band_table(&table)?;
    Ok(table)
}

/// Validate that a band table is well-formed.
pub fn validate_band_table(table: &BandTable) -> Result<(), GeoresistError> {
    if table.bands.is_empty() {
        return Err(GeoresistError::BandTableInvalid(
            "bands must not be empty".into(),
        ));
    }

    for (i, band) in table.bands.iter().enumerate() {
        if band.lower < Decimal::ZERO {
            return Err(GeoresistError::BandTableInvalid(format!(
                "band {} has negative lower bound {}",
                i + 1,
                band.lower
            )));
        }

        if let Some(upper) = band.upper {
            if upper < band.lower {
                return Err(GeoresistError::BandTableInvalid(format!(
                    "band {} has upper bound {} below lower bound {}",
                    i + 1,
                    upper,
                    band.lower
                )));
            }
        }

        if band.nace.trim().is_empty() || band.astm.trim().is_empty() {
            return Err(GeoresistError::BandTableInvalid(format!(
                "band {} must have both a NACE and an ASTM label",
                i + 1
            )));
        }
    }

    Ok(())
}
