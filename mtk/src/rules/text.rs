//! Règles lisant le champ texte des objets (noms, cotes, légendes)

use crate::error::Result;
use crate::record::{get_text, SourceRecord};
use crate::types::{tags_from, TagMap};

/// Texte associé à l'objet (nom, cote ou légende selon la classe)
pub const TEXT: &str = "teksti";

/// Tags fixes, plus `key=<teksti>` si le texte est renseigné
fn with_text(record: &dyn SourceRecord, fixed: &[(&str, &str)], key: &str) -> TagMap {
    let mut tags = tags_from(fixed);
    if let Some(text) = get_text(record, TEXT) {
        tags.insert(key.to_string(), text);
    }
    tags
}

/// `tags` si la légende commence par `prefix` (sensible à la casse), sinon rien
fn caption_prefix(record: &dyn SourceRecord, prefix: &str, tags: &[(&str, &str)]) -> TagMap {
    match get_text(record, TEXT) {
        Some(caption) if caption.starts_with(prefix) => tags_from(tags),
        _ => TagMap::new(),
    }
}

/// Korkeuspiste, Vedenpinnan korkeusluku
pub fn elevation(record: &dyn SourceRecord) -> Result<TagMap> {
    Ok(with_text(record, &[], "ele:n60"))
}

/// Syvyyspiste, Hylyn syvyys
pub fn depth(record: &dyn SourceRecord) -> Result<TagMap> {
    Ok(with_text(record, &[], "depth"))
}

/// Kulkukorkeusrajoitteen korkeus
pub fn max_height(record: &dyn SourceRecord) -> Result<TagMap> {
    Ok(with_text(record, &[], "maxheight"))
}

/// Savupiipun korkeus
pub fn height(record: &dyn SourceRecord) -> Result<TagMap> {
    Ok(with_text(record, &[], "height"))
}

/// Maston korkeus
pub fn tower_height(record: &dyn SourceRecord) -> Result<TagMap> {
    Ok(with_text(record, &[("man_made", "tower")], "height"))
}

pub fn name(record: &dyn SourceRecord) -> Result<TagMap> {
    Ok(with_text(record, &[], "name"))
}

/// Merkittävän luontokohteen nimi
pub fn natural_feature_name(record: &dyn SourceRecord) -> Result<TagMap> {
    Ok(with_text(record, &[("natural", "feature")], "name"))
}

pub fn locality_name(record: &dyn SourceRecord) -> Result<TagMap> {
    Ok(with_text(record, &[("place", "locality")], "name"))
}

pub fn island_name(record: &dyn SourceRecord) -> Result<TagMap> {
    Ok(with_text(record, &[("place", "island")], "name"))
}

/// Rakennusryhmän nimi
pub fn hamlet_name(record: &dyn SourceRecord) -> Result<TagMap> {
    Ok(with_text(record, &[("place", "hamlet")], "name"))
}

/// Liikennealueen selite: seules les hélistations sont reconnues
pub fn traffic_area_caption(record: &dyn SourceRecord) -> Result<TagMap> {
    Ok(caption_prefix(
        record,
        "Helikopter",
        &[("aeroway", "helipad")],
    ))
}

/// Rakennuksen selite: seuls les hôtels sont reconnus
pub fn building_caption(record: &dyn SourceRecord) -> Result<TagMap> {
    Ok(caption_prefix(record, "Hot", &[("tourism", "hotel")]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;
    use std::collections::HashMap;

    fn caption(text: &str) -> HashMap<String, FieldValue> {
        HashMap::from([(TEXT.to_string(), FieldValue::from(text))])
    }

    #[test]
    fn test_helipad_prefix() {
        let tags = traffic_area_caption(&caption("Helikopterikenttä")).unwrap();
        assert_eq!(tags, tags_from(&[("aeroway", "helipad")]));
    }

    #[test]
    fn test_caption_must_match_at_start() {
        assert!(traffic_area_caption(&caption("Vanha Helikopterikenttä"))
            .unwrap()
            .is_empty());
        assert!(building_caption(&caption("Kylpylähotelli")).unwrap().is_empty());
    }

    #[test]
    fn test_caption_is_case_sensitive() {
        assert!(building_caption(&caption("hotelli")).unwrap().is_empty());
        assert_eq!(
            building_caption(&caption("Hotelli Aulanko")).unwrap(),
            tags_from(&[("tourism", "hotel")])
        );
    }

    #[test]
    fn test_caption_absent() {
        assert!(building_caption(&HashMap::<String, FieldValue>::new()).unwrap().is_empty());
    }

    #[test]
    fn test_text_tags() {
        let tags = tower_height(&caption("120")).unwrap();
        assert_eq!(tags.get("man_made").map(String::as_str), Some("tower"));
        assert_eq!(tags.get("height").map(String::as_str), Some("120"));

        let tags = island_name(&caption("Seurasaari")).unwrap();
        assert_eq!(tags.get("place").map(String::as_str), Some("island"));
        assert_eq!(tags.get("name").map(String::as_str), Some("Seurasaari"));
    }

    #[test]
    fn test_text_absent_keeps_fixed_tags() {
        let tags = locality_name(&HashMap::<String, FieldValue>::new()).unwrap();
        assert_eq!(tags, tags_from(&[("place", "locality")]));
        assert!(depth(&HashMap::<String, FieldValue>::new()).unwrap().is_empty());
    }
}
