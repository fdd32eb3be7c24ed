//! Points géodésiques (Kolmiopiste, Korkeuskiintopiste)

use crate::error::Result;
use crate::record::{get_real, SourceRecord};
use crate::types::{tags_from, TagMap};

/// Altitude N60 en millimètres (entier ou réel selon l'export)
pub const ELEVATION: &str = "korkeus";

pub fn survey_point(record: &dyn SourceRecord) -> Result<TagMap> {
    let mut tags = tags_from(&[("man_made", "survey_point")]);

    if let Some(millimetres) = get_real(record, ELEVATION)? {
        tags.insert("ele:n60".to_string(), format_decimal(millimetres / 1000.0));
    }

    Ok(tags)
}

/// Formate un réel en gardant toujours une décimale (`12` -> `"12.0"`)
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;
    use std::collections::HashMap;

    fn record(value: Option<FieldValue>) -> HashMap<String, FieldValue> {
        value
            .map(|v| (ELEVATION.to_string(), v))
            .into_iter()
            .collect()
    }

    #[test]
    fn test_elevation_conversion() {
        let tags = survey_point(&record(Some(FieldValue::Integer(123456)))).unwrap();
        assert_eq!(tags.get("ele:n60").map(String::as_str), Some("123.456"));
        assert_eq!(
            tags.get("man_made").map(String::as_str),
            Some("survey_point")
        );
    }

    #[test]
    fn test_elevation_whole_metres() {
        let tags = survey_point(&record(Some(FieldValue::Integer(12000)))).unwrap();
        assert_eq!(tags.get("ele:n60").map(String::as_str), Some("12.0"));
    }

    #[test]
    fn test_elevation_zero_is_kept() {
        let tags = survey_point(&record(Some(FieldValue::Integer(0)))).unwrap();
        assert_eq!(tags.get("ele:n60").map(String::as_str), Some("0.0"));
    }

    #[test]
    fn test_elevation_real_and_text() {
        let tags = survey_point(&record(Some(FieldValue::Real(34567.5)))).unwrap();
        assert_eq!(tags.get("ele:n60").map(String::as_str), Some("34.5675"));

        let tags = survey_point(&record(Some(" 2500 ".into()))).unwrap();
        assert_eq!(tags.get("ele:n60").map(String::as_str), Some("2.5"));

        assert!(survey_point(&record(Some("n/a".into()))).is_err());
    }

    #[test]
    fn test_elevation_absent() {
        let tags = survey_point(&record(None)).unwrap();
        assert!(!tags.contains_key("ele:n60"));

        let tags = survey_point(&record(Some(FieldValue::Null))).unwrap();
        assert!(!tags.contains_key("ele:n60"));
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1.5), "1.5");
        assert_eq!(format_decimal(-2.0), "-2.0");
        assert_eq!(format_decimal(0.001), "0.001");
    }
}
