use crate::error::GeoresistError;
use crate::model::{Column, Language};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const RU_JSON: &str = include_str!("../../../locales/ru.json");
const EN_JSON: &str = include_str!("../../../locales/en.json");
const UZ_JSON: &str = include_str!("../../../locales/uz.json");

/// User-facing strings for one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Locale {
    pub language: Language,
    pub columns: ColumnLabels,
    /// Translations of classifier labels. Keys missing here pass through.
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    pub messages: Messages,
    pub prompts: Prompts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnLabels {
    pub sequence: String,
    pub point: String,
    pub distance: String,
    pub resistance: String,
    pub resistivity: String,
    pub corrosion_nace: String,
    pub corrosion_astm: String,
}

/// Message templates; `{name}` placeholders are filled by [`render`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Messages {
    pub missing_cell: String,
    pub missing_reading: String,
    pub resistivity_calculated: String,
    pub resistivity_missing: String,
    pub resistivity_replaced: String,
    pub skipped_line: String,
    pub no_rows: String,
    pub upstream_error: String,
    pub parameters_found: String,
    pub parameters_missing: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompts {
    /// Used in place of a standard when the test name is unknown.
    pub generic_standard: String,
    pub analysis: String,
    pub resistivity_table: String,
}

impl Locale {
    /// Load the built-in locale for a language.
    pub fn builtin(language: Language) -> Result<Locale, GeoresistError> {
        let json = match language {
            Language::Ru => RU_JSON,
            Language::En => EN_JSON,
            Language::Uz => UZ_JSON,
        };
        let locale: Locale =
            serde_json::from_str(json).map_err(|e| GeoresistError::LocaleInvalid {
                language: language.to_string(),
                reason: e.to_string(),
            })?;
        if locale.language != language {
            return Err(GeoresistError::LocaleInvalid {
                language: language.to_string(),
                reason: format!("file declares language '{}'", locale.language),
            });
        }
        Ok(locale)
    }

    /// Load the built-in locale for a language code such as "ru".
    pub fn for_code(code: &str) -> Result<Locale, GeoresistError> {
        Locale::builtin(code.parse()?)
    }

    /// Translate a classifier label, falling back to the key itself.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn column(&self, column: Column) -> &str {
        let c = &self.columns;
        match column {
            Column::Sequence => &c.sequence,
            Column::Point => &c.point,
            Column::Distance => &c.distance,
            Column::Resistance => &c.resistance,
            Column::Resistivity => &c.resistivity,
            Column::CorrosionNace => &c.corrosion_nace,
            Column::CorrosionAstm => &c.corrosion_astm,
        }
    }
}

/// Fill `{name}` placeholders in a template.
///
/// One left-to-right pass: substituted values are never rescanned, and
/// unknown placeholders are left as written.
pub fn render(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let filled = after.find('}').and_then(|close| {
            let name = &after[..close];
            args.iter()
                .find(|(n, _)| *n == name)
                .map(|(_, value)| (*value, close))
        });
        match filled {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtin_locales_load() {
        for lang in Language::ALL {
            let locale = Locale::builtin(lang).unwrap();
            assert_eq!(locale.language, lang);
        }
    }

    #[test]
    fn test_unknown_code_fails_fast() {
        assert!(matches!(
            Locale::for_code("fr"),
            Err(GeoresistError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_label_translation_with_identity_fallback() {
        let en = Locale::builtin(Language::En).unwrap();
        assert_eq!(en.label("Низкое"), "Low");
        assert_eq!(en.label("Out of range"), "Out of range");
        assert_eq!(en.label("something else"), "something else");

        let ru = Locale::builtin(Language::Ru).unwrap();
        assert_eq!(ru.label("Низкое"), "Низкое");
        assert_eq!(ru.label("Invalid"), "Некорректное значение");
    }

    #[test]
    fn test_every_band_label_translated_in_en_and_uz() {
        let table = crate::bands::builtin::soil_corrosivity().unwrap();
        for lang in [Language::En, Language::Uz] {
            let locale = Locale::builtin(lang).unwrap();
            for band in &table.bands {
                assert!(locale.labels.contains_key(&band.nace), "{lang}: {}", band.nace);
                assert!(locale.labels.contains_key(&band.astm), "{lang}: {}", band.astm);
            }
        }
    }

    #[test]
    fn test_column_headers() {
        let ru = Locale::builtin(Language::Ru).unwrap();
        assert_eq!(ru.column(Column::Sequence), "№");
        let en = Locale::builtin(Language::En).unwrap();
        assert_eq!(en.column(Column::Resistivity), "ρ, Ohm·m");
    }

    #[test]
    fn test_render() {
        assert_eq!(
            render("Point {point}: {value} ({value})", &[("point", "T-1"), ("value", "62.83")]),
            "Point T-1: 62.83 (62.83)"
        );
        assert_eq!(render("no placeholders", &[("x", "y")]), "no placeholders");
        assert_eq!(render("{unknown} {x}", &[("x", "y")]), "{unknown} y");
        assert_eq!(render("{{x}} {", &[("x", "y")]), "{y} {");
    }

    #[test]
    fn test_render_does_not_rescan_values() {
        assert_eq!(
            render("{point}: {value}", &[("point", "P{value}"), ("value", "62.83")]),
            "P{value}: 62.83"
        );
    }
}
