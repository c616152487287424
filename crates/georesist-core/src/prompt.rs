use crate::locale::{render, Locale};

/// Test name used for resistivity surveys.
pub const RESISTIVITY_TEST: &str = "Electrical Resistivity Test (ERT)";

/// Geotechnical tests and the ASTM standard each is checked against.
pub const ASTM_STANDARDS: &[(&str, &str)] = &[
    (RESISTIVITY_TEST, "ASTM G57"),
    ("Seismic Refraction Test (SRT)", "ASTM D5777"),
    ("Atterberg Limit Test", "ASTM D4318"),
    ("Sieve Analysis", "ASTM D6913"),
    ("UCS Test - Soil", "ASTM D2166"),
    ("UCS Test - Rock", "ASTM D7012"),
    ("Oedometer Test", "ASTM D2435"),
    ("Direct Shear Test", "ASTM D3080"),
    ("Collapse Test", "ASTM D5333"),
    ("California Bearing Ratio", "ASTM D1883"),
    ("Proctor Test", "ASTM D698"),
];

/// Words whose presence suggests the document carries test parameters.
const KEY_PARAMETER_WORDS: &[&str] = &["density", "stress", "moisture", "shear"];

pub fn standard_for(test_name: &str) -> Option<&'static str> {
    ASTM_STANDARDS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(test_name.trim()))
        .map(|(_, standard)| *standard)
}

/// Build the compliance-analysis prompt for a test report.
pub fn build_analysis_prompt(test_name: &str, document_text: &str, locale: &Locale) -> String {
    let standard = standard_for(test_name).unwrap_or(locale.prompts.generic_standard.as_str());
    render(
        &locale.prompts.analysis,
        &[
            ("standard", standard),
            ("test", test_name),
            ("text", document_text),
        ],
    )
}

/// Build the prompt asking for the pipe-delimited resistivity table.
pub fn build_resistivity_prompt(document_text: &str, locale: &Locale) -> String {
    let standard =
        standard_for(RESISTIVITY_TEST).unwrap_or(locale.prompts.generic_standard.as_str());
    render(
        &locale.prompts.resistivity_table,
        &[("standard", standard), ("text", document_text)],
    )
}

/// Quick pre-check: does the document mention any key parameter?
pub fn keyword_findings(document_text: &str, locale: &Locale) -> Vec<String> {
    let lower = document_text.to_lowercase();
    let found = KEY_PARAMETER_WORDS.iter().any(|w| lower.contains(w));
    let finding = if found {
        &locale.messages.parameters_found
    } else {
        &locale.messages.parameters_missing
    };
    vec![finding.clone()]
}
