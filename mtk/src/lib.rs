//! # mtk
//!
//! Traduction des objets du Maastotietokanta (base topographique nationale
//! finlandaise) en tags OpenStreetMap.
//!
//! ## Features
//!
//! - Tables de règles par code de classe (`kohdeluokka`), table routière
//!   prioritaire sur la table générale
//! - Règles dérivées: voirie (revêtement, sens unique, tunnels, interpolation
//!   d'adresses), voies ferrées, points géodésiques, noms multilingues
//! - Filtre d'admission des couches sans équivalent OSM
//! - Types `geo` pour les géométries; la lecture et l'écriture des fichiers
//!   restent à la charge de l'appelant
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mtk::{layers, Translator};
//!
//! let translator = Translator::new();
//! if layers::admit(&layer_name).is_some() {
//!     for record in &records {
//!         let translation = translator.translate(record, &record.geometry)?;
//!         println!("{:?} (+{} auxiliaires)", translation.tags, translation.auxiliaries.len());
//!     }
//! }
//! ```

pub mod error;
pub mod layers;
pub mod name;
pub mod record;
pub mod rules;
pub mod translate;
pub mod types;

pub use error::MtkError;
pub use layers::LayerFilter;
pub use record::{FieldValue, SourceRecord};
pub use rules::RuleTables;
pub use translate::{Translator, DEFAULT_SOURCE};
pub use types::{AuxiliaryFeature, OutputFeature, Record, TagMap, Translation};
