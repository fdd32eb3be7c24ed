//! Configuration du système

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use mtk::{LayerFilter, Translator, DEFAULT_SOURCE};

/// Variable d'environnement désignant la configuration (preset ou fichier)
pub const CONFIG_ENV: &str = "MTK2OSM_CONFIG";

/// Configuration principale
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Valeur du tag `source` apposé sur chaque objet
    #[serde(default = "default_source")]
    pub source: String,

    /// Code EPSG écrit dans le `crs` des fichiers produits (3067 = ETRS-TM35FIN)
    #[serde(default = "default_epsg")]
    pub epsg: u32,

    /// Encodage des fichiers d'entrée
    #[serde(default = "default_encoding")]
    pub encoding: String,

    /// Continuer malgré un attribut numérique illisible (objet ignoré)
    #[serde(default)]
    pub keep_going: bool,

    /// Couches écartées en plus de la liste fixe
    #[serde(default)]
    pub extra_denied_layers: Vec<String>,
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_epsg() -> u32 {
    3067
}

fn default_encoding() -> String {
    "utf-8".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            epsg: default_epsg(),
            encoding: default_encoding(),
            keep_going: false,
            extra_denied_layers: Vec::new(),
        }
    }
}

impl Config {
    /// Charge une configuration depuis un fichier
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse config JSON")
    }

    /// Charge une configuration depuis un preset embarqué
    pub fn from_preset(preset: &str) -> Result<Self> {
        match preset {
            "default" => Self::load_embedded(include_str!("presets/default.json")),
            "strict" => Self::load_embedded(include_str!("presets/strict.json")),
            _ => anyhow::bail!("Unknown preset: {}. Use: default, strict", preset),
        }
    }

    fn load_embedded(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse embedded config")
    }

    /// Résout un preset ou un chemin, sinon `MTK2OSM_CONFIG`, sinon le preset par défaut
    pub fn resolve(preset_or_path: Option<&str>) -> Result<Self> {
        let choice = preset_or_path
            .map(str::to_string)
            .or_else(|| std::env::var(CONFIG_ENV).ok());

        match choice.as_deref() {
            None => Self::from_preset("default"),
            Some(s) if s.ends_with(".json") || Path::new(s).is_file() => Self::load(Path::new(s)),
            Some(s) => Self::from_preset(s),
        }
    }

    /// Encodage des fichiers d'entrée
    pub fn input_encoding(&self) -> Result<&'static encoding_rs::Encoding> {
        mtk::record::encoding_for_label(&self.encoding)
            .with_context(|| format!("Unknown encoding: {}", self.encoding))
    }

    pub fn translator(&self) -> Translator {
        Translator::new().with_source(self.source.clone())
    }

    pub fn layer_filter(&self) -> LayerFilter {
        LayerFilter::new().with_denied(self.extra_denied_layers.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset() {
        let config = Config::from_preset("default").unwrap();
        assert_eq!(config.source, "MTK_2013");
        assert_eq!(config.epsg, 3067);
        assert!(!config.keep_going);
        assert!(config.extra_denied_layers.is_empty());
    }

    #[test]
    fn test_strict_preset_denies_more_layers() {
        let config = Config::from_preset("strict").unwrap();
        let filter = config.layer_filter();
        assert!(filter.admit("Kunta").is_none());
        assert!(filter.admit("Maastokuvionreuna").is_none());
        assert!(filter.admit("Tieviiva").is_some());
    }

    #[test]
    fn test_unknown_preset() {
        assert!(Config::from_preset("full").is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"source": "MTK_2024"}"#).unwrap();
        assert_eq!(config.source, "MTK_2024");
        assert_eq!(config.encoding, "utf-8");
        assert_eq!(config.translator().source(), "MTK_2024");
    }

    #[test]
    fn test_input_encoding() {
        let mut config = Config::default();
        assert_eq!(config.input_encoding().unwrap().name(), "UTF-8");
        config.encoding = "latin1".to_string();
        assert_eq!(config.input_encoding().unwrap().name(), "windows-1252");
        config.encoding = "klingon".to_string();
        assert!(config.input_encoding().is_err());
    }
}
