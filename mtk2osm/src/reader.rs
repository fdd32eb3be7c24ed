//! Lecture d'une couche MTK exportée en GeoJSON
//!
//! Une couche = un fichier FeatureCollection, nommé d'après la couche
//! (ex: `Tieviiva.geojson`). Le décodage des octets se fait ici, une fois,
//! avant toute lecture d'attribut.

use std::collections::HashMap;
use std::path::Path;

use encoding_rs::Encoding;
use geojson::{feature::Id, GeoJson};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use mtk::record::decode_text;
use mtk::{FieldValue, Record};

/// Erreurs de lecture d'une couche
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid GeoJSON in {path}: {reason}")]
    InvalidGeoJson { path: String, reason: String },
}

/// Couche lue: nom et objets
#[derive(Debug)]
pub struct Layer {
    pub name: String,
    pub records: Vec<Record>,
    /// Objets ignorés faute de géométrie exploitable
    pub dropped: usize,
}

/// Nom de couche d'après le nom de fichier (sans extension)
pub fn layer_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// Lit un fichier de couche GeoJSON
pub fn read_layer(path: &Path, encoding: &'static Encoding) -> Result<Layer, ReadError> {
    let bytes = std::fs::read(path).map_err(|source| ReadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_layer(&layer_name(path), &bytes, encoding).map_err(|reason| ReadError::InvalidGeoJson {
        path: path.display().to_string(),
        reason,
    })
}

/// Parse le contenu d'une couche déjà chargée en mémoire
pub fn parse_layer(
    name: &str,
    bytes: &[u8],
    encoding: &'static Encoding,
) -> Result<Layer, String> {
    let content = decode_text(bytes, encoding);
    let geojson: GeoJson = content.parse().map_err(|e: geojson::Error| e.to_string())?;

    let features = match geojson {
        GeoJson::FeatureCollection(fc) => fc.features,
        GeoJson::Feature(f) => vec![f],
        GeoJson::Geometry(_) => return Err("expected a Feature or FeatureCollection".to_string()),
    };

    let mut records = Vec::with_capacity(features.len());
    let mut dropped = 0;

    for (index, feature) in features.into_iter().enumerate() {
        let id = match &feature.id {
            Some(Id::String(s)) => s.clone(),
            Some(Id::Number(n)) => n.to_string(),
            None => format!("{}_{}", name, index),
        };

        let Some(geometry) = feature.geometry else {
            warn!(layer = name, id = %id, "Feature without geometry, dropped");
            dropped += 1;
            continue;
        };
        let geometry = match geo::Geometry::<f64>::try_from(geometry) {
            Ok(g) => g,
            Err(e) => {
                warn!(layer = name, id = %id, error = %e, "Unsupported geometry, dropped");
                dropped += 1;
                continue;
            }
        };

        let properties = feature
            .properties
            .unwrap_or_default()
            .into_iter()
            .map(|(k, v)| (k, json_to_field(v)))
            .collect::<HashMap<_, _>>();

        records.push(Record {
            id,
            layer: name.to_string(),
            geometry,
            properties,
        });
    }

    Ok(Layer {
        name: name.to_string(),
        records,
        dropped,
    })
}

/// Convertit une valeur JSON en valeur d'attribut
fn json_to_field(value: Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Integer(i64::from(b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => FieldValue::Integer(i),
            None => n.as_f64().map_or(FieldValue::Null, FieldValue::Real),
        },
        Value::String(s) => FieldValue::Text(s),
        other => FieldValue::Text(other.to_string()),
    }
}
