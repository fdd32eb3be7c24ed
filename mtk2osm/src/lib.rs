//! # mtk2osm
//!
//! Traduction de couches Maastotietokanta exportées en GeoJSON vers des
//! couches GeoJSON taguées OpenStreetMap.
//!
//! ## Features
//!
//! - Une couche par fichier, nommée d'après le fichier (`Tieviiva.geojson`)
//! - Filtre d'admission des couches sans équivalent OSM
//! - Points d'interpolation d'adresses écrits avec la couche routière
//! - Traitement parallèle des dossiers (rayon)
//! - Rapport de traduction JSON
//!
//! ## Usage CLI
//!
//! ```bash
//! mtk2osm translate --input ./mtk/ --output ./osm/
//! mtk2osm translate --input ./Tieviiva.geojson --output ./osm/ --source MTK_2024
//! mtk2osm rules --code 12141
//! mtk2osm layers
//! ```

pub mod config;
pub mod export;
pub mod pipeline;
pub mod reader;
pub mod report;

pub use config::Config;
pub use pipeline::Pipeline;
pub use report::{TranslationReport, TranslationStatus};
