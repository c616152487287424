use crate::bands::schema::BandTable;
use crate::classify::classify;
use crate::locale::Locale;
use crate::model::{MeasurementRow, ResistivitySource, MISSING};
use crate::parsing::values::{
    format_fixed2, format_optional, parse_distance_to_meters, parse_locale_float,
};
use crate::parsing::FieldTokens;
use rust_decimal::Decimal;

/// Supplied resistivities below this (ohm-meters) are treated as
/// extraction errors and recomputed when possible.
pub const PLAUSIBLE_RESISTIVITY_FLOOR: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Field positions in a table row.
const SEQUENCE: usize = 0;
const POINT: usize = 1;
const DISTANCE: usize = 2;
const RESISTANCE: usize = 3;
const RESISTIVITY: usize = 4;

/// Wenner-array apparent resistivity: ρ = 2·π·R·a.
///
/// `None` on overflow.
pub fn compute_resistivity(resistance_ohm: Decimal, spacing_m: Decimal) -> Option<Decimal> {
    Decimal::TWO_PI
        .checked_mul(resistance_ohm)?
        .checked_mul(spacing_m)
}

/// Resolve every parsed row, preserving order.
pub fn resolve_rows(
    rows: &[FieldTokens],
    bands: &BandTable,
    locale: &Locale,
) -> Vec<MeasurementRow> {
    rows.iter()
        .map(|row| resolve_row(row, bands, locale))
        .collect()
}

/// Turn one tokenized row into a normalized, classified measurement row.
pub fn resolve_row(row: &FieldTokens, bands: &BandTable, locale: &Locale) -> MeasurementRow {
    let distance_m = parse_distance_to_meters(row.get(DISTANCE));
    let resistance = parse_reading(row.get(RESISTANCE));
    let supplied = parse_reading(row.get(RESISTIVITY));

    let (resistivity, source) = decide_resistivity(supplied, resistance, distance_m);
    let classification = classify(resistivity.as_str(), bands).localized(locale);

    tracing::debug!(
        line = row.line,
        point = row.get(POINT),
        resistivity = %resistivity,
        source = ?source,
        "resolved row"
    );

    MeasurementRow {
        sequence_label: row.get(SEQUENCE).to_string(),
        point_id: row.get(POINT).to_string(),
        distance_m: format_optional(distance_m),
        resistance_ohm: format_fixed2(row.get(RESISTANCE)),
        resistivity_ohm_m: resistivity,
        corrosion_nace: classification.nace,
        corrosion_astm: classification.astm,
        resistivity_source: source,
    }
}

fn parse_reading(raw: &str) -> Option<Decimal> {
    if raw.trim() == MISSING {
        return None;
    }
    parse_locale_float(raw)
}

/// Trust the supplied resistivity unless it is absent or implausibly
/// low and both R and a are known; then compute it.
fn decide_resistivity(
    supplied: Option<Decimal>,
    resistance: Option<Decimal>,
    distance_m: Option<Decimal>,
) -> (String, ResistivitySource) {
    let needs_recompute = supplied.map_or(true, |v| v < PLAUSIBLE_RESISTIVITY_FLOOR);

    if needs_recompute {
        if let (Some(r), Some(a)) = (resistance, distance_m) {
            if let Some(rho) = compute_resistivity(r, a) {
                let source = if supplied.is_some() {
                    ResistivitySource::Replaced
                } else {
                    ResistivitySource::Calculated
                };
                return (format_fixed2(rho), source);
            }
        }
    }

    match supplied {
        Some(v) => (format_fixed2(v), ResistivitySource::Supplied),
        None => (MISSING.to_string(), ResistivitySource::Missing),
    }
}
