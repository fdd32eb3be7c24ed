//! Règles des voies ferrées (couche Rautatie)

use crate::error::Result;
use crate::record::{get_int, SourceRecord};
use crate::rules::road::{apply_vertical_position, VERTICAL_POSITION};
use crate::types::{tags_from, TagMap};

pub const CONSTRUCTION_STATE: &str = "valmiusaste";
pub const ELECTRIFICATION: &str = "sahkoistys";

/// État "en projet": l'objet reste volontairement sans tags
pub const PLANNED_STATE: i64 = 4;

/// Tags d'une voie ferrée dont `railway` vaut `kind` en service
///
/// `electrified` ne sert que si le champ d'électrification est inconnu (0).
pub fn railway(
    record: &dyn SourceRecord,
    kind: &str,
    electrified: Option<&str>,
) -> Result<TagMap> {
    let state = match get_int(record, CONSTRUCTION_STATE, 0)? {
        1 => "construction",
        2 => "disused",
        PLANNED_STATE => return Ok(TagMap::new()),
        _ => kind,
    };
    let mut tags = tags_from(&[("railway", state)]);

    apply_vertical_position(&mut tags, get_int(record, VERTICAL_POSITION, 0)?);

    let electrified = match get_int(record, ELECTRIFICATION, 0)? {
        1 => Some("yes"),
        2 => Some("no"),
        _ => electrified,
    };
    if let Some(value) = electrified {
        tags.insert("electrified".to_string(), value.to_string());
    }

    Ok(tags)
}

/// Rautatie
pub fn rail(record: &dyn SourceRecord) -> Result<TagMap> {
    railway(record, "rail", None)
}

/// Rautatie, sähköistetty
pub fn electrified_rail(record: &dyn SourceRecord) -> Result<TagMap> {
    railway(record, "rail", Some("yes"))
}

/// Rautatie, sähköistämätön
pub fn non_electrified_rail(record: &dyn SourceRecord) -> Result<TagMap> {
    railway(record, "rail", Some("no"))
}

pub fn narrow_gauge(record: &dyn SourceRecord) -> Result<TagMap> {
    railway(record, "narrow_gauge", None)
}

pub fn subway(record: &dyn SourceRecord) -> Result<TagMap> {
    railway(record, "subway", None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;
    use std::collections::HashMap;

    fn record(pairs: &[(&str, i64)]) -> HashMap<String, FieldValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), FieldValue::Integer(*v)))
            .collect()
    }

    #[test]
    fn test_in_service() {
        let tags = rail(&record(&[])).unwrap();
        assert_eq!(tags, tags_from(&[("railway", "rail")]));
    }

    #[test]
    fn test_construction_states() {
        let tags = rail(&record(&[(CONSTRUCTION_STATE, 1)])).unwrap();
        assert_eq!(tags.get("railway").map(String::as_str), Some("construction"));

        let tags = subway(&record(&[(CONSTRUCTION_STATE, 2)])).unwrap();
        assert_eq!(tags.get("railway").map(String::as_str), Some("disused"));
    }

    #[test]
    fn test_planned_is_empty() {
        let r = record(&[
            (CONSTRUCTION_STATE, PLANNED_STATE),
            (ELECTRIFICATION, 1),
            (VERTICAL_POSITION, -11),
        ]);
        assert!(rail(&r).unwrap().is_empty());
        assert!(electrified_rail(&r).unwrap().is_empty());
    }

    #[test]
    fn test_tunnel_and_layer() {
        let tags = rail(&record(&[(VERTICAL_POSITION, -11)])).unwrap();
        assert_eq!(tags.get("tunnel").map(String::as_str), Some("yes"));
        assert!(!tags.contains_key("layer"));

        let tags = rail(&record(&[(VERTICAL_POSITION, 2)])).unwrap();
        assert_eq!(tags.get("layer").map(String::as_str), Some("2"));
        assert!(!tags.contains_key("tunnel"));
    }

    #[test]
    fn test_electrification() {
        let tags = rail(&record(&[(ELECTRIFICATION, 1)])).unwrap();
        assert_eq!(tags.get("electrified").map(String::as_str), Some("yes"));

        let tags = rail(&record(&[(ELECTRIFICATION, 2)])).unwrap();
        assert_eq!(tags.get("electrified").map(String::as_str), Some("no"));

        let tags = rail(&record(&[(ELECTRIFICATION, 0)])).unwrap();
        assert!(!tags.contains_key("electrified"));
    }

    #[test]
    fn test_class_electrification_fallback() {
        let tags = electrified_rail(&record(&[])).unwrap();
        assert_eq!(tags.get("electrified").map(String::as_str), Some("yes"));

        // le champ renseigné prime sur la classe
        let tags = non_electrified_rail(&record(&[(ELECTRIFICATION, 1)])).unwrap();
        assert_eq!(tags.get("electrified").map(String::as_str), Some("yes"));
    }
}
