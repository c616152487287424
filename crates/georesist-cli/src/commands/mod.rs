pub mod bands;
pub mod classify;
pub mod process;
pub mod prompt;

use georesist_core::bands::schema::BandTable;
use georesist_core::error::GeoresistError;
use std::path::Path;

/// Use the band table file when given, else the built-in soil table.
fn load_bands(path: Option<&Path>) -> Result<BandTable, GeoresistError> {
    match path {
        Some(p) => georesist_core::bands::load_band_table(p),
        None => georesist_core::bands::builtin::soil_corrosivity(),
    }
}
