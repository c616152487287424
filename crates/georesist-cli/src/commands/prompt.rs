use georesist_core::locale::Locale;
use georesist_core::prompt::{self, ASTM_STANDARDS, RESISTIVITY_TEST};
use std::path::PathBuf;

pub fn run(
    document_file: PathBuf,
    test: Option<&str>,
    resistivity: bool,
    lang: &str,
) -> Result<(), georesist_core::error::GeoresistError> {
    let locale = Locale::for_code(lang)?;
    let text = std::fs::read_to_string(&document_file)?;

    // Pre-check findings go to stderr so the prompt can be piped
    for finding in prompt::keyword_findings(&text, &locale) {
        eprintln!("{finding}");
    }

    let out = if resistivity {
        prompt::build_resistivity_prompt(&text, &locale)
    } else {
        prompt::build_analysis_prompt(test.unwrap_or(RESISTIVITY_TEST), &text, &locale)
    };
    println!("{out}");

    Ok(())
}

pub fn standards() -> Result<(), georesist_core::error::GeoresistError> {
    let width = ASTM_STANDARDS
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(20);

    for (name, standard) in ASTM_STANDARDS {
        println!("  {:<width$}  {}", name, standard, width = width);
    }
    Ok(())
}
