//! Label normalization and display formatting for exam parameters.
//!
//! Two distinct notions of "same name" exist in this engine and must not be
//! conflated: time-series grouping uses the exact trimmed name (see
//! `series`), while panel classification uses the lossy normalization below.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::models::RawValue;

/// Lowercase, NFD-decompose and strip combining marks from a label, so that
/// "Eritrócitos" and "ERITROCITOS" compare equal. Total: empty or
/// whitespace-only input yields the empty string.
pub fn normalize_label(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Grouping key for comparison rows: trimmed and uppercased, accents kept.
pub fn comparison_key(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Table-cell text for a possibly missing value, with optional unit.
pub fn format_cell(value: Option<&RawValue>, unit: Option<&str>) -> String {
    let Some(value) = value else {
        return "—".into();
    };
    let text = value.to_string();
    if text.is_empty() {
        return "—".into();
    }
    match unit.map(str::trim).filter(|u| !u.is_empty()) {
        Some(unit) => format!("{text} {unit}"),
        None => text,
    }
}

/// Reference-range text with `—` placeholders for missing bounds.
pub fn format_reference_range(min: Option<&RawValue>, max: Option<&RawValue>) -> String {
    let min = min.map(|v| v.to_string()).unwrap_or_else(|| "—".into());
    let max = max.map(|v| v.to_string()).unwrap_or_else(|| "—".into());
    format!("{min} - {max}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawValue;

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(normalize_label("Eritrócitos"), "eritrocitos");
        assert_eq!(normalize_label("ERITROCITOS"), "eritrocitos");
        assert_eq!(normalize_label("  Hematócrito  "), "hematocrito");
        assert_eq!(normalize_label("urobilinogênio"), "urobilinogenio");
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(normalize_label(""), "");
        assert_eq!(normalize_label("   "), "");
    }

    #[test]
    fn ascii_passes_through() {
        assert_eq!(normalize_label("RDW"), "rdw");
        assert_eq!(normalize_label("pH"), "ph");
    }

    #[test]
    fn comparison_key_keeps_accents() {
        assert_eq!(comparison_key(" Eritrócitos "), "ERITRÓCITOS");
        assert_eq!(comparison_key("creatinina"), "CREATININA");
    }

    #[test]
    fn formats_cells_with_and_without_unit() {
        let v = RawValue::Number(1.2);
        assert_eq!(format_cell(Some(&v), Some("mg/dL")), "1.2 mg/dL");
        assert_eq!(format_cell(Some(&v), Some("  ")), "1.2");
        assert_eq!(format_cell(Some(&v), None), "1.2");
        assert_eq!(format_cell(None, Some("mg/dL")), "—");
        assert_eq!(format_cell(Some(&RawValue::from("")), None), "—");
    }

    #[test]
    fn formats_reference_range_placeholders() {
        let min = RawValue::Number(0.5);
        let max = RawValue::from("1,4");
        assert_eq!(format_reference_range(Some(&min), Some(&max)), "0.5 - 1,4");
        assert_eq!(format_reference_range(None, Some(&max)), "— - 1,4");
        assert_eq!(format_reference_range(None, None), "— - —");
    }
}
