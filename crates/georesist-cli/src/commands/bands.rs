use georesist_core::bands::builtin;
use georesist_core::locale::Locale;
use std::path::Path;

pub fn list() -> Result<(), georesist_core::error::GeoresistError> {
    println!("Available predefined band tables:\n");
    for name in builtin::PRESETS {
        let table = builtin::load_preset(name)?;
        println!(
            "  {:<8} {} (v{}), {} bands",
            name,
            table.name,
            table.version,
            table.bands.len()
        );
        if let Some(ref desc) = table.description {
            println!("           {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str, lang: &str) -> Result<(), georesist_core::error::GeoresistError> {
    let locale = Locale::for_code(lang)?;
    let table = builtin::load_preset(preset)?;

    println!("{} (version {})\n", table.name, table.version);

    if let Some(ref desc) = table.description {
        println!("{}\n", desc);
    }

    println!("Bands are scanned top to bottom; the first closed interval that");
    println!("contains the resistivity wins. Values in no band are \"Out of range\",");
    println!("non-numeric values are \"Invalid\".\n");

    let ranges: Vec<String> = table
        .bands
        .iter()
        .map(|b| match b.upper {
            Some(upper) => format!("[{}, {}]", b.lower, upper),
            None => format!("[{}, ∞)", b.lower),
        })
        .collect();
    let range_width = ranges.iter().map(|r| r.chars().count()).max().unwrap_or(10);
    let nace_width = table
        .bands
        .iter()
        .map(|b| locale.label(&b.nace).chars().count())
        .max()
        .unwrap_or(10);

    println!(
        "  {:<rw$}  {:<nw$}  ASTM",
        table.unit,
        "NACE",
        rw = range_width,
        nw = nace_width
    );
    println!("  {}", "-".repeat(range_width + nace_width + 30));

    for (band, range) in table.bands.iter().zip(&ranges) {
        println!(
            "  {:<rw$}  {:<nw$}  {}",
            range,
            locale.label(&band.nace),
            locale.label(&band.astm),
            rw = range_width,
            nw = nace_width
        );
    }

    println!();
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), georesist_core::error::GeoresistError> {
    let table = georesist_core::bands::load_band_table(file)?;

    println!("Band table '{}' (v{}) is valid.", table.name, table.version);
    println!("  Bands: {}", table.bands.len());

    // Check for potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    for pair in table.bands.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if b.lower > a.lower {
            warnings.push(format!(
                "band starting at {} follows a lower band starting at {}; \
                 the earlier band may shadow it",
                b.lower, a.lower
            ));
        }
    }
    if !table.bands.iter().any(|b| b.upper.is_none()) {
        warnings.push("no band is unbounded above; large values will be out of range".into());
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
