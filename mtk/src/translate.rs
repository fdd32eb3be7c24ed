//! Aiguillage des objets vers leur règle et post-traitement

use geo::Geometry;
use tracing::warn;

use crate::error::Result;
use crate::record::{class_code, SourceRecord};
use crate::rules::{RoadRuleRef, RuleTables, Selected};
use crate::types::{TagMap, Translation};

/// Provenance apposée sur chaque objet traduit (millésime du jeu de données)
pub const DEFAULT_SOURCE: &str = "MTK_2013";

/// Traducteur MTK -> OSM
///
/// Sans état mutable: une même instance peut être partagée entre threads.
#[derive(Debug, Clone)]
pub struct Translator {
    tables: &'static RuleTables,
    source: String,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    pub fn new() -> Self {
        Self {
            tables: RuleTables::shared(),
            source: DEFAULT_SOURCE.to_string(),
        }
    }

    /// Remplace la valeur du tag `source`
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tables(&self) -> &RuleTables {
        self.tables
    }

    /// Traduit un objet: règle routière, sinon générale, sinon code inconnu
    ///
    /// Le tag `source` est toujours posé en dernier.
    pub fn translate(&self, record: &dyn SourceRecord, geometry: &Geometry) -> Result<Translation> {
        let code = class_code(record)?;

        let mut translation = match self.tables.lookup(code) {
            Some(Selected::Road(RoadRuleRef(rule))) => rule(record, geometry)?,
            Some(Selected::General(rule)) => Translation::from_tags(rule.apply(record)?),
            None => Translation::from_tags(unknown_code(code)),
        };

        translation
            .tags
            .insert("source".to_string(), self.source.clone());

        Ok(translation)
    }

    /// Point d'entrée du collaborateur de sortie
    ///
    /// `(None, None)` signale la fin du flux et ne produit rien. Un objet
    /// sans géométrie est traduit avec une géométrie vide.
    pub fn filter_feature_post(
        &self,
        record: Option<&dyn SourceRecord>,
        geometry: Option<&Geometry>,
    ) -> Result<Option<Translation>> {
        let Some(record) = record else {
            return Ok(None);
        };
        match geometry {
            Some(geometry) => self.translate(record, geometry).map(Some),
            None => {
                let empty = Geometry::GeometryCollection(Default::default());
                self.translate(record, &empty).map(Some)
            }
        }
    }
}

fn unknown_code(code: i64) -> TagMap {
    warn!(code, "Feature class not known to the translation tables");
    TagMap::new()
}
