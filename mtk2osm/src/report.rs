//! Rapport de traduction avec graceful degradation
//!
//! Collecte les compteurs par couche, les codes de classe inconnus et les
//! erreurs, puis les restitue sur la console ou en JSON.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

/// Statut global de la traduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TranslationStatus {
    /// Toutes les couches traduites sans erreur
    Success,
    /// Traduction terminée avec des erreurs non-fatales
    PartialSuccess,
    /// Traduction échouée
    Failed,
}

/// Niveau de sévérité des erreurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorLevel {
    /// Erreur fatale: couche abandonnée
    Fatal,
    /// Erreur: objet ignoré
    Error,
}

/// Erreur de traduction avec contexte
#[derive(Debug, Clone, Serialize)]
pub struct TranslationError {
    pub level: ErrorLevel,
    /// Couche source (optionnel)
    pub layer: Option<String>,
    /// Identifiant de l'objet (optionnel)
    pub feature_id: Option<String>,
    pub message: String,
}

/// Statistiques par couche
#[derive(Debug, Clone, Default, Serialize)]
pub struct LayerStats {
    /// Objets lus
    pub read: usize,
    /// Objets écrits (hors auxiliaires)
    pub written: usize,
    /// Points auxiliaires d'interpolation écrits
    pub auxiliaries: usize,
    /// Objets sans géométrie exploitable
    pub dropped: usize,
    pub errors: usize,
}

impl LayerStats {
    pub fn total_output(&self) -> usize {
        self.written + self.auxiliaries
    }
}

/// Rapport complet de traduction
#[derive(Debug, Clone, Serialize)]
pub struct TranslationReport {
    /// Valeur du tag `source`
    pub source: String,
    pub duration_secs: f64,
    pub status: TranslationStatus,

    // Compteurs globaux
    pub layers_processed: usize,
    /// Couches écartées par le filtre d'admission
    pub layers_skipped: usize,
    pub layers_failed: usize,
    pub features_read: usize,
    pub features_written: usize,
    pub auxiliaries_written: usize,
    /// Objets ignorés sur erreur d'attribut
    pub features_skipped: usize,
    /// Objets sans géométrie exploitable
    pub features_dropped: usize,

    /// Occurrences des codes de classe sans règle
    pub unknown_codes: BTreeMap<i64, usize>,

    pub by_layer: HashMap<String, LayerStats>,
    pub skipped_layers: Vec<String>,
    pub errors: Vec<TranslationError>,
}

impl Default for TranslationReport {
    fn default() -> Self {
        Self {
            source: String::new(),
            duration_secs: 0.0,
            status: TranslationStatus::Success,
            layers_processed: 0,
            layers_skipped: 0,
            layers_failed: 0,
            features_read: 0,
            features_written: 0,
            auxiliaries_written: 0,
            features_skipped: 0,
            features_dropped: 0,
            unknown_codes: BTreeMap::new(),
            by_layer: HashMap::new(),
            skipped_layers: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl TranslationReport {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            ..Default::default()
        }
    }

    /// Enregistre un objet lu
    pub fn record_read(&mut self, layer: &str) {
        self.features_read += 1;
        self.by_layer.entry(layer.to_string()).or_default().read += 1;
    }

    /// Enregistre un objet traduit et ses points auxiliaires
    pub fn record_written(&mut self, layer: &str, auxiliaries: usize) {
        self.features_written += 1;
        self.auxiliaries_written += auxiliaries;
        let stats = self.by_layer.entry(layer.to_string()).or_default();
        stats.written += 1;
        stats.auxiliaries += auxiliaries;
    }

    /// Enregistre des objets sans géométrie
    pub fn record_dropped(&mut self, layer: &str, count: usize) {
        self.features_dropped += count;
        self.by_layer.entry(layer.to_string()).or_default().dropped += count;
    }

    /// Enregistre un code de classe sans règle
    pub fn record_unknown_code(&mut self, code: i64) {
        *self.unknown_codes.entry(code).or_default() += 1;
    }

    /// Enregistre une erreur sur un objet (objet ignoré)
    pub fn record_error(&mut self, error: TranslationError) {
        if error.level == ErrorLevel::Error {
            self.features_skipped += 1;
        }
        if let Some(ref layer) = error.layer {
            self.by_layer.entry(layer.clone()).or_default().errors += 1;
        }
        self.errors.push(error);
    }

    /// Enregistre une couche écartée par le filtre
    pub fn record_layer_skipped(&mut self, layer: &str) {
        self.layers_skipped += 1;
        self.skipped_layers.push(layer.to_string());
    }

    /// Enregistre une couche traduite
    pub fn record_layer_success(&mut self) {
        self.layers_processed += 1;
    }

    /// Enregistre une couche en échec
    pub fn record_layer_failure(&mut self, layer: &str, message: &str) {
        self.layers_processed += 1;
        self.layers_failed += 1;
        self.errors.push(TranslationError {
            level: ErrorLevel::Fatal,
            layer: Some(layer.to_string()),
            feature_id: None,
            message: message.to_string(),
        });
    }

    /// Fusionne le rapport d'une autre couche
    pub fn merge(&mut self, other: TranslationReport) {
        self.layers_processed += other.layers_processed;
        self.layers_skipped += other.layers_skipped;
        self.layers_failed += other.layers_failed;
        self.features_read += other.features_read;
        self.features_written += other.features_written;
        self.auxiliaries_written += other.auxiliaries_written;
        self.features_skipped += other.features_skipped;
        self.features_dropped += other.features_dropped;

        for (code, count) in other.unknown_codes {
            *self.unknown_codes.entry(code).or_default() += count;
        }
        for (layer, stats) in other.by_layer {
            let entry = self.by_layer.entry(layer).or_default();
            entry.read += stats.read;
            entry.written += stats.written;
            entry.auxiliaries += stats.auxiliaries;
            entry.dropped += stats.dropped;
            entry.errors += stats.errors;
        }
        self.skipped_layers.extend(other.skipped_layers);
        self.errors.extend(other.errors);
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_secs = duration.as_secs_f64();
    }

    /// Détermine le statut final basé sur les erreurs
    pub fn finalize(&mut self) {
        let has_errors = !self.errors.is_empty();
        let has_success = self.features_written > 0;

        self.status = if has_errors && has_success {
            TranslationStatus::PartialSuccess
        } else if has_errors {
            TranslationStatus::Failed
        } else {
            TranslationStatus::Success
        };
        self.skipped_layers.sort();
    }

    /// Nombre total d'objets produits, auxiliaires compris
    pub fn total_output(&self) -> usize {
        self.features_written + self.auxiliaries_written
    }

    /// Affiche le rapport sur la console
    pub fn display(&self) {
        println!("\n{}", "=".repeat(60));
        println!("TRANSLATION REPORT - source={}", self.source);
        println!("{}", "=".repeat(60));

        println!("\nStatus: {:?}", self.status);
        println!("Duration: {:.2}s", self.duration_secs);

        println!("\n--- SUMMARY ---");
        println!(
            "Layers: {} processed, {} skipped, {} failed",
            self.layers_processed, self.layers_skipped, self.layers_failed
        );
        println!(
            "Features: {} read, {} written (+{} address points), {} skipped, {} dropped",
            self.features_read,
            self.features_written,
            self.auxiliaries_written,
            self.features_skipped,
            self.features_dropped
        );

        if !self.by_layer.is_empty() {
            println!("\n--- BY LAYER ---");
            let mut layers: Vec<_> = self.by_layer.iter().collect();
            layers.sort_by_key(|(k, _)| k.as_str());
            for (name, stats) in layers {
                println!(
                    "  {}: {} read, {} written, {} address points, {} errors",
                    name, stats.read, stats.written, stats.auxiliaries, stats.errors
                );
            }
        }

        if !self.unknown_codes.is_empty() {
            println!("\n--- UNKNOWN CLASS CODES ({}) ---", self.unknown_codes.len());
            for (code, count) in self.unknown_codes.iter().take(20) {
                println!("  {}: {} features", code, count);
            }
            if self.unknown_codes.len() > 20 {
                println!("  ... and {} more", self.unknown_codes.len() - 20);
            }
        }

        if !self.errors.is_empty() {
            println!("\n--- ERRORS ({}) ---", self.errors.len());
            for e in self.errors.iter().take(20) {
                let location = match (&e.layer, &e.feature_id) {
                    (Some(l), Some(id)) => format!("[{}:{}]", l, id),
                    (Some(l), None) => format!("[{}]", l),
                    (None, Some(id)) => format!("[{}]", id),
                    _ => String::new(),
                };
                println!("  {:?} {} {}", e.level, location, e.message);
            }
            if self.errors.len() > 20 {
                println!("  ... and {} more", self.errors.len() - 20);
            }
        }

        println!("\n{}", "=".repeat(60));
    }

    /// Sauvegarde le rapport en JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Affichage compact pour le résumé
    pub fn summary(&self) -> String {
        format!(
            "{}: {} layers, {} written, {} address points, {} unknown codes, {} errors",
            self.source,
            self.layers_processed,
            self.features_written,
            self.auxiliaries_written,
            self.unknown_codes.len(),
            self.errors.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature_error(layer: &str) -> TranslationError {
        TranslationError {
            level: ErrorLevel::Error,
            layer: Some(layer.to_string()),
            feature_id: Some("Tieviiva_3".to_string()),
            message: "Invalid value for field 'paallyste': abc".to_string(),
        }
    }

    #[test]
    fn test_report_default() {
        let report = TranslationReport::default();
        assert_eq!(report.status, TranslationStatus::Success);
        assert_eq!(report.layers_processed, 0);
        assert!(report.unknown_codes.is_empty());
    }

    #[test]
    fn test_record_written() {
        let mut report = TranslationReport::new("MTK_2013");
        report.record_written("Tieviiva", 2);
        report.record_written("Tieviiva", 0);
        report.record_written("Rautatie", 0);

        assert_eq!(report.features_written, 3);
        assert_eq!(report.auxiliaries_written, 2);
        assert_eq!(report.total_output(), 5);
        let roads = report.by_layer.get("Tieviiva").unwrap();
        assert_eq!(roads.written, 2);
        assert_eq!(roads.total_output(), 4);
    }

    #[test]
    fn test_record_error() {
        let mut report = TranslationReport::new("MTK_2013");
        report.record_error(feature_error("Tieviiva"));

        assert_eq!(report.features_skipped, 1);
        assert_eq!(report.by_layer.get("Tieviiva").unwrap().errors, 1);
    }

    #[test]
    fn test_merge() {
        let mut total = TranslationReport::new("MTK_2013");
        let mut a = TranslationReport::new("MTK_2013");
        a.record_read("Tieviiva");
        a.record_written("Tieviiva", 2);
        a.record_unknown_code(99999);
        a.record_layer_success();

        let mut b = TranslationReport::new("MTK_2013");
        b.record_unknown_code(99999);
        b.record_unknown_code(12345);
        b.record_unknown_code(-5);
        b.record_layer_skipped("Korkeuskayrankorkeusarvo");

        total.merge(a);
        total.merge(b);

        assert_eq!(total.layers_processed, 1);
        assert_eq!(total.layers_skipped, 1);
        assert_eq!(total.features_read, 1);
        assert_eq!(total.auxiliaries_written, 2);
        assert_eq!(total.unknown_codes.get(&99999), Some(&2));
        assert_eq!(total.unknown_codes.get(&12345), Some(&1));
        assert_eq!(total.unknown_codes.get(&-5), Some(&1));
        assert_eq!(total.skipped_layers, vec!["Korkeuskayrankorkeusarvo"]);
    }

    #[test]
    fn test_finalize_partial_success() {
        let mut report = TranslationReport::new("MTK_2013");
        report.record_written("Tieviiva", 0);
        report.record_error(feature_error("Tieviiva"));
        report.finalize();
        assert_eq!(report.status, TranslationStatus::PartialSuccess);
    }

    #[test]
    fn test_finalize_failed() {
        let mut report = TranslationReport::new("MTK_2013");
        report.record_layer_failure("Tieviiva", "Invalid GeoJSON");
        report.finalize();
        assert_eq!(report.status, TranslationStatus::Failed);
        assert_eq!(report.layers_failed, 1);
    }

    #[test]
    fn test_unknown_codes_do_not_degrade_status() {
        let mut report = TranslationReport::new("MTK_2013");
        report.record_written("Tieviiva", 0);
        report.record_unknown_code(99999);
        report.finalize();
        assert_eq!(report.status, TranslationStatus::Success);
    }

    #[test]
    fn test_summary() {
        let mut report = TranslationReport::new("MTK_2024");
        report.features_written = 100;
        let summary = report.summary();
        assert!(summary.contains("MTK_2024"));
        assert!(summary.contains("100 written"));
    }
}
