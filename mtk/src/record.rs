//! Accès aux attributs d'un objet source
//!
//! Toutes les règles lisent les attributs via ces fonctions: un champ absent
//! ou à `FieldValue::Null` n'est jamais une erreur, il vaut la valeur par défaut
//! (attribut non relevé pour cet objet). Seule une valeur présente mais non
//! convertible remonte une `MtkError::InvalidField`.

use std::collections::HashMap;

use encoding_rs::Encoding;

use crate::error::{MtkError, Result};

/// Nom du champ portant le code de classe MTK
pub const CLASS_CODE_FIELD: &str = "kohdeluokka";

/// Valeur d'un attribut, telle qu'exposée par le collaborateur d'entrée
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Sentinelle "pas de donnée", distincte de 0 et de la chaîne vide
    Null,
    Integer(i64),
    Real(f64),
    /// Texte déjà décodé (voir [`decode_text`])
    Text(String),
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Objet source en lecture seule: accès aux champs par nom
pub trait SourceRecord {
    fn field(&self, name: &str) -> Option<&FieldValue>;
}

impl SourceRecord for HashMap<String, FieldValue> {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.get(name)
    }
}

/// Lit un entier, `default` si le champ est absent ou vide
pub fn get_int(record: &dyn SourceRecord, name: &str, default: i64) -> Result<i64> {
    Ok(get_opt_int(record, name)?.unwrap_or(default))
}

/// Lit un entier, `None` si le champ est absent ou vide
pub fn get_opt_int(record: &dyn SourceRecord, name: &str) -> Result<Option<i64>> {
    match record.field(name) {
        None | Some(FieldValue::Null) => Ok(None),
        Some(FieldValue::Integer(v)) => Ok(Some(*v)),
        Some(FieldValue::Real(v)) => {
            // 2^63 n'est pas représentable en i64: borne exclue
            let in_range = (i64::MIN as f64..i64::MAX as f64).contains(v);
            if in_range && v.fract() == 0.0 {
                Ok(Some(*v as i64))
            } else {
                Err(MtkError::invalid_field(name, v.to_string()))
            }
        }
        Some(FieldValue::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|_| MtkError::invalid_field(name, s.as_str()))
        }
    }
}

/// Lit un réel, `None` si le champ est absent ou vide
pub fn get_real(record: &dyn SourceRecord, name: &str) -> Result<Option<f64>> {
    match record.field(name) {
        None | Some(FieldValue::Null) => Ok(None),
        Some(FieldValue::Integer(v)) => Ok(Some(*v as f64)),
        Some(FieldValue::Real(v)) => Ok(Some(*v)),
        Some(FieldValue::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            fast_float::parse(trimmed)
                .map(Some)
                .map_err(|_| MtkError::invalid_field(name, s.as_str()))
        }
    }
}

/// Lit un texte, `None` si le champ est absent ou ne contient que des blancs
///
/// Les valeurs numériques sont rendues sous leur forme décimale.
pub fn get_text(record: &dyn SourceRecord, name: &str) -> Option<String> {
    match record.field(name)? {
        FieldValue::Null => None,
        FieldValue::Integer(v) => Some(v.to_string()),
        FieldValue::Real(v) => Some(v.to_string()),
        FieldValue::Text(s) if s.trim().is_empty() => None,
        FieldValue::Text(s) => Some(s.clone()),
    }
}

/// Code de classe brut de l'objet, 0 (inconnu) si le champ manque
///
/// Aucun contrôle de plage: un code négatif est simplement inconnu des tables.
pub fn class_code(record: &dyn SourceRecord) -> Result<i64> {
    get_int(record, CLASS_CODE_FIELD, 0)
}

/// Décode les bytes d'un attribut texte avec l'encodage de la source
///
/// Les séquences invalides sont remplacées (U+FFFD) plutôt que rejetées.
pub fn decode_text(data: &[u8], encoding: &'static Encoding) -> String {
    let (decoded, _, _) = encoding.decode(data);
    decoded.into_owned()
}

/// Résout un libellé d'encodage ("utf-8", "latin1", "windows-1252", ...)
pub fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}
