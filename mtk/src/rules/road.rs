//! Règles des tronçons routiers (couche Tieviiva)
//!
//! Toutes les classes routières partagent la règle de base [`base`]:
//! revêtement, sens unique, position verticale, nom et interpolation
//! d'adresses. Les règles spécialisées fusionnent leurs propres tags par
//! dessus (les tags spécialisés l'emportent).

use geo::{Geometry, Point};
use tracing::debug;

use crate::error::Result;
use crate::name::resolve_name;
use crate::record::{get_int, get_text, SourceRecord};
use crate::types::{tags_from, AuxiliaryFeature, TagMap, Translation};

pub const VERTICAL_POSITION: &str = "tasosijainti";
pub const PAVEMENT: &str = "paallyste";
pub const ONEWAY: &str = "yksisuuntaisuus";
pub const ROAD_NUMBER: &str = "tienumero";

pub const MIN_ADDRESS_LEFT: &str = "minOsoitenumeroVasen";
pub const MAX_ADDRESS_LEFT: &str = "maxOsoitenumeroVasen";
pub const MIN_ADDRESS_RIGHT: &str = "minOsoitenumeroOikea";
pub const MAX_ADDRESS_RIGHT: &str = "maxOsoitenumeroOikea";

/// Position verticale "en tunnel"
pub const TUNNEL_POSITION: i64 = -11;

/// Nom générique porté par les routes nationales sans nom propre
const TRUNK_GENERIC_NAME: &str = "Valtatie";

/// Règle routière: reçoit aussi la géométrie pour dériver les auxiliaires
pub type RoadRule = fn(&dyn SourceRecord, &Geometry) -> Result<Translation>;

/// Table des classes routières, prioritaire sur la table générale
pub static ROAD_RULES: &[(u32, RoadRule)] = &[
    (12111, motorway),      // Autotie Ia
    (12112, trunk),         // Autotie Ib
    (12121, base),          // Autotie IIa
    (12122, base),          // Autotie IIb
    (12131, base),          // Autotie IIIa
    (12132, base),          // Autotie IIIb
    (12141, track),         // Ajotie
    (12312, winter_road),   // Talvitie
    (12313, path),          // Polku
    (12314, cycleway),      // Kävely- ja pyörätie
    (12316, unpaved_track), // Ajopolku
];

/// Ajoute `tunnel` ou `layer` selon la position verticale (0 = au sol)
pub(crate) fn apply_vertical_position(tags: &mut TagMap, position: i64) {
    match position {
        0 => {}
        TUNNEL_POSITION => {
            tags.insert("tunnel".to_string(), "yes".to_string());
        }
        level => {
            tags.insert("layer".to_string(), level.to_string());
        }
    }
}

/// Tags de base d'un tronçon routier, sans interpolation d'adresses
pub fn base_tags(record: &dyn SourceRecord) -> Result<TagMap> {
    let mut tags = tags_from(&[("highway", "road")]);

    apply_vertical_position(&mut tags, get_int(record, VERTICAL_POSITION, 0)?);

    match get_int(record, PAVEMENT, 0)? {
        0 => {}
        2 => {
            tags.insert("surface".to_string(), "paved".to_string());
        }
        _ => {
            tags.insert("surface".to_string(), "unpaved".to_string());
        }
    }

    match get_int(record, ONEWAY, 0)? {
        0 => {}
        1 => {
            tags.insert("oneway".to_string(), "yes".to_string());
        }
        _ => {
            tags.insert("oneway".to_string(), "-1".to_string());
        }
    }

    if let Some(name) = resolve_name(record) {
        tags.insert("name".to_string(), name);
    }

    Ok(tags)
}

/// Bornes d'adresses du tronçon (min, max), si les deux sont connues
pub fn address_range(record: &dyn SourceRecord) -> Result<Option<(i64, i64)>> {
    let min = segment_bound(
        get_int(record, MIN_ADDRESS_LEFT, 0)?,
        get_int(record, MIN_ADDRESS_RIGHT, 0)?,
        i64::min,
    );
    let max = segment_bound(
        get_int(record, MAX_ADDRESS_LEFT, 0)?,
        get_int(record, MAX_ADDRESS_RIGHT, 0)?,
        i64::max,
    );

    Ok(min.zip(max))
}

/// Combine les bornes gauche/droite: seules les valeurs positives comptent
fn segment_bound(left: i64, right: i64, pick: fn(i64, i64) -> i64) -> Option<i64> {
    match (left > 0, right > 0) {
        (true, true) => Some(pick(left, right)),
        (true, false) => Some(left),
        (false, true) => Some(right),
        (false, false) => None,
    }
}

/// Premier et dernier sommet d'une géométrie linéaire
pub fn endpoints(geometry: &Geometry) -> Option<(Point, Point)> {
    match geometry {
        Geometry::LineString(ls) => {
            let first = ls.0.first()?;
            let last = ls.0.last()?;
            Some((Point::from(*first), Point::from(*last)))
        }
        Geometry::MultiLineString(mls) => {
            let first = mls.0.iter().find_map(|ls| ls.0.first())?;
            let last = mls.0.iter().rev().find_map(|ls| ls.0.last())?;
            Some((Point::from(*first), Point::from(*last)))
        }
        _ => None,
    }
}

/// Règle de base commune à toutes les classes routières
pub fn base(record: &dyn SourceRecord, geometry: &Geometry) -> Result<Translation> {
    let mut translation = Translation::from_tags(base_tags(record)?);

    let Some((min, max)) = address_range(record)? else {
        return Ok(translation);
    };

    let Some((first, last)) = endpoints(geometry) else {
        debug!(min, max, "Address range on a non-linear geometry, interpolation skipped");
        return Ok(translation);
    };

    translation
        .tags
        .insert("addr:interpolation".to_string(), "all".to_string());
    translation.auxiliaries.push(AuxiliaryFeature {
        point: first,
        tags: tags_from(&[("addr:housenumber", min.to_string().as_str())]),
    });
    translation.auxiliaries.push(AuxiliaryFeature {
        point: last,
        tags: tags_from(&[("addr:housenumber", max.to_string().as_str())]),
    });

    Ok(translation)
}

/// Règle de base puis fusion de tags fixes
fn specialize(
    record: &dyn SourceRecord,
    geometry: &Geometry,
    overrides: &[(&str, &str)],
) -> Result<Translation> {
    let mut translation = base(record, geometry)?;
    translation.tags.extend(tags_from(overrides));
    Ok(translation)
}

pub fn motorway(record: &dyn SourceRecord, geometry: &Geometry) -> Result<Translation> {
    specialize(
        record,
        geometry,
        &[("highway", "motorway"), ("oneway", "yes")],
    )
}

/// Autotie Ib: route nationale, numéro accolé au nom générique
pub fn trunk(record: &dyn SourceRecord, geometry: &Geometry) -> Result<Translation> {
    let mut translation = specialize(record, geometry, &[("highway", "trunk")])?;

    if translation.tags.get("name").map(String::as_str) == Some(TRUNK_GENERIC_NAME) {
        if let Some(number) = get_text(record, ROAD_NUMBER) {
            let name = format!("{} {}", TRUNK_GENERIC_NAME, number.trim());
            translation
                .tags
                .insert("name".to_string(), name.trim().to_string());
        }
    }

    Ok(translation)
}

/// Ajotie: chemin carrossable, qualité déduite du revêtement
pub fn track(record: &dyn SourceRecord, geometry: &Geometry) -> Result<Translation> {
    let mut translation = specialize(record, geometry, &[("highway", "track")])?;

    let grade = match translation.tags.get("surface").map(String::as_str) {
        Some("paved") => "grade1",
        _ => "grade2",
    };
    translation
        .tags
        .insert("tracktype".to_string(), grade.to_string());

    Ok(translation)
}

pub fn winter_road(record: &dyn SourceRecord, geometry: &Geometry) -> Result<Translation> {
    specialize(record, geometry, &[("winter_road", "yes")])
}

pub fn path(record: &dyn SourceRecord, geometry: &Geometry) -> Result<Translation> {
    specialize(record, geometry, &[("highway", "path")])
}

pub fn cycleway(record: &dyn SourceRecord, geometry: &Geometry) -> Result<Translation> {
    specialize(
        record,
        geometry,
        &[("highway", "cycleway"), ("foot", "designated")],
    )
}

pub fn unpaved_track(record: &dyn SourceRecord, geometry: &Geometry) -> Result<Translation> {
    specialize(
        record,
        geometry,
        &[("highway", "track"), ("tracktype", "grade3")],
    )
}
