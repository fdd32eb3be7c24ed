//! Résolution du nom d'un objet parmi les champs de nom multilingues

use crate::record::{get_text, SourceRecord};

/// Champs de nom, du plus fréquent au moins fréquent dans MTK
///
/// L'ordre conditionne la sortie: ne pas le trier.
pub const NAME_FIELDS: [&str; 5] = [
    "nimi_suomi",
    "nimi_ruotsi",
    "nimi_pohjoissaame",
    "nimi_inarinsaame",
    "nimi_koltansaame",
];

/// Retourne le premier nom renseigné, `None` si aucun
pub fn resolve_name(record: &dyn SourceRecord) -> Option<String> {
    NAME_FIELDS.iter().find_map(|field| get_text(record, field))
}
