use georesist_core::classify::classify;
use georesist_core::locale::Locale;
use georesist_core::parsing::values::format_fixed2;
use std::path::Path;

use super::load_bands;

pub fn run(
    value: &str,
    lang: &str,
    bands_file: Option<&Path>,
) -> Result<(), georesist_core::error::GeoresistError> {
    let locale = Locale::for_code(lang)?;
    let bands = load_bands(bands_file)?;

    let result = classify(value, &bands).localized(&locale);

    println!("{} {}", format_fixed2(value), bands.unit);
    println!("  NACE: {}", result.nace);
    println!("  ASTM: {}", result.astm);

    Ok(())
}
