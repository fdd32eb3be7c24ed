//! Types de données pour le crate mtk

use std::collections::{BTreeMap, HashMap};

use geo::{Geometry, Point};

use crate::record::{FieldValue, SourceRecord};

/// Tags OSM produits pour un objet (clé -> valeur)
///
/// `BTreeMap` pour une sortie déterministe, l'ordre n'a pas de sens métier.
pub type TagMap = BTreeMap<String, String>;

/// Construit un `TagMap` depuis une liste statique de paires
pub fn tags_from(pairs: &[(&str, &str)]) -> TagMap {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Résultat de la traduction d'un objet MTK
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translation {
    /// Tags de l'objet principal
    pub tags: TagMap,

    /// Objets ponctuels dérivés (extrémités d'interpolation d'adresses)
    pub auxiliaries: Vec<AuxiliaryFeature>,
}

impl Translation {
    /// Traduction sans objet auxiliaire
    pub fn from_tags(tags: TagMap) -> Self {
        Self {
            tags,
            auxiliaries: Vec::new(),
        }
    }

    /// Nombre d'objets produits (principal + auxiliaires)
    pub fn feature_count(&self) -> usize {
        1 + self.auxiliaries.len()
    }
}

/// Objet auxiliaire synthétisé à partir d'un sommet de la géométrie source
#[derive(Debug, Clone, PartialEq)]
pub struct AuxiliaryFeature {
    pub point: Point,
    pub tags: TagMap,
}

/// Objet de sortie prêt à être persisté par le collaborateur
#[derive(Debug, Clone)]
pub struct OutputFeature {
    /// Identifiant de l'objet (l'identifiant source, suffixé pour les auxiliaires)
    pub id: String,

    pub geometry: Geometry,

    pub tags: TagMap,
}

impl OutputFeature {
    /// Éclate une traduction en objets de sortie: l'objet principal
    /// (géométrie source) puis les auxiliaires (géométrie ponctuelle)
    pub fn from_translation(id: &str, geometry: &Geometry, translation: Translation) -> Vec<Self> {
        let mut features = Vec::with_capacity(translation.feature_count());
        features.push(Self {
            id: id.to_string(),
            geometry: geometry.clone(),
            tags: translation.tags,
        });
        for (i, aux) in translation.auxiliaries.into_iter().enumerate() {
            features.push(Self {
                id: format!("{}_{}", id, i + 1),
                geometry: Geometry::Point(aux.point),
                tags: aux.tags,
            });
        }
        features
    }
}

/// Un objet MTK lu par le collaborateur d'entrée
#[derive(Debug, Clone)]
pub struct Record {
    /// Identifiant de l'objet (gid MTK ou index dans la couche)
    pub id: String,

    /// Nom de la couche d'origine (ex: "Tieviiva", "Rautatie")
    pub layer: String,

    /// Géométrie (Point, LineString, ou Polygon)
    pub geometry: Geometry,

    /// Attributs de l'objet (champ -> valeur)
    pub properties: HashMap<String, FieldValue>,
}

impl SourceRecord for Record {
    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.properties.get(name)
    }
}
