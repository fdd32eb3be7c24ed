//! Traduction de couches GeoJSON: lecture, filtre, règles, écriture

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use mtk::record::class_code;
use mtk::{LayerFilter, OutputFeature, Translator};

use crate::config::Config;
use crate::export::geojson::export_to_geojson;
use crate::reader::{layer_name, read_layer, Layer};
use crate::report::{ErrorLevel, TranslationError, TranslationReport};

/// Paramètres d'une traduction, partagés entre les couches
pub struct Pipeline {
    translator: Translator,
    filter: LayerFilter,
    encoding: &'static Encoding,
    epsg: u32,
    keep_going: bool,
}

impl Pipeline {
    pub fn new(translator: Translator, filter: LayerFilter, encoding: &'static Encoding) -> Self {
        Self {
            translator,
            filter,
            encoding,
            epsg: 3067,
            keep_going: false,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            config.translator(),
            config.layer_filter(),
            config.input_encoding()?,
        )
        .with_epsg(config.epsg)
        .keep_going(config.keep_going))
    }

    pub fn with_epsg(mut self, epsg: u32) -> Self {
        self.epsg = epsg;
        self
    }

    /// Ignorer les objets aux attributs illisibles au lieu d'abandonner
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Traduit un fichier ou un dossier de couches vers `output`
    ///
    /// Les couches d'un dossier sont traitées en parallèle (`jobs` threads,
    /// défaut rayon). Les sous-dossiers (feuilles de carte) sont reproduits
    /// sous `output`, deux feuilles ayant chacune leur `Savupiippu.geojson`.
    pub fn run(
        &self,
        input: &Path,
        output: &Path,
        jobs: Option<usize>,
    ) -> Result<TranslationReport> {
        let start = Instant::now();
        std::fs::create_dir_all(output)
            .with_context(|| format!("Cannot create output directory {}", output.display()))?;

        let layers = collect_layers(input)?;
        if layers.is_empty() {
            anyhow::bail!("No GeoJSON layers (.geojson, .json) found in {}", input.display());
        }
        info!(count = layers.len(), "Found layers to translate");

        let results: Vec<(PathBuf, Result<TranslationReport>)> = match jobs {
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .context("Failed to build thread pool")?;
                pool.install(|| self.translate_all(input, &layers, output))
            }
            None => self.translate_all(input, &layers, output),
        };

        let mut report = TranslationReport::new(self.translator.source());
        for (path, result) in results {
            match result {
                Ok(layer_report) => report.merge(layer_report),
                Err(e) if self.keep_going => {
                    warn!(path = %path.display(), error = %e, "Layer failed");
                    report.record_layer_failure(&layer_name(&path), &format!("{:#}", e));
                }
                Err(e) => return Err(e),
            }
        }

        report.set_duration(start.elapsed());
        report.finalize();
        Ok(report)
    }

    fn translate_all(
        &self,
        input: &Path,
        layers: &[PathBuf],
        output: &Path,
    ) -> Vec<(PathBuf, Result<TranslationReport>)> {
        layers
            .par_iter()
            .map(|path| {
                let target = output_dir_for(input, path, output);
                (path.clone(), self.translate_layer_file(path, &target))
            })
            .collect()
    }

    /// Traduit une couche et l'écrit dans `<output>/<couche>.geojson`
    ///
    /// Une couche refusée par le filtre n'est pas lue et ne produit pas de fichier.
    pub fn translate_layer_file(&self, path: &Path, output: &Path) -> Result<TranslationReport> {
        let mut report = TranslationReport::new(self.translator.source());
        let name = layer_name(path);

        if self.filter.admit(&name).is_none() {
            report.record_layer_skipped(&name);
            return Ok(report);
        }

        let layer = read_layer(path, self.encoding)?;
        let features = self.translate_layer(&layer, &mut report)?;

        std::fs::create_dir_all(output)
            .with_context(|| format!("Cannot create output directory {}", output.display()))?;
        let output_file = output.join(format!("{}.geojson", layer.name));
        export_to_geojson(&features, self.epsg, &output_file)?;
        report.record_layer_success();

        info!(
            layer = %layer.name,
            features = features.len(),
            output = %output_file.display(),
            "Layer translated"
        );
        Ok(report)
    }

    /// Traduit les objets d'une couche déjà lue
    pub fn translate_layer(
        &self,
        layer: &Layer,
        report: &mut TranslationReport,
    ) -> Result<Vec<OutputFeature>> {
        let mut features = Vec::with_capacity(layer.records.len());
        report.record_dropped(&layer.name, layer.dropped);

        for record in &layer.records {
            report.record_read(&layer.name);

            if let Ok(code) = class_code(record) {
                if !self.translator.tables().is_known(code) {
                    report.record_unknown_code(code);
                }
            }

            match self.translator.translate(record, &record.geometry) {
                Ok(translation) => {
                    let auxiliaries = translation.auxiliaries.len();
                    features.extend(OutputFeature::from_translation(
                        &record.id,
                        &record.geometry,
                        translation,
                    ));
                    report.record_written(&layer.name, auxiliaries);
                }
                Err(e) if self.keep_going => {
                    debug!(layer = %layer.name, id = %record.id, error = %e, "Feature skipped");
                    report.record_error(TranslationError {
                        level: ErrorLevel::Error,
                        layer: Some(layer.name.clone()),
                        feature_id: Some(record.id.clone()),
                        message: e.to_string(),
                    });
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("Failed to translate {} in layer {}", record.id, layer.name)
                    })
                }
            }
        }

        Ok(features)
    }
}

/// Dossier de sortie d'une couche: même chemin relatif que sous `input`
fn output_dir_for(input: &Path, layer: &Path, output: &Path) -> PathBuf {
    match layer.parent().and_then(|dir| dir.strip_prefix(input).ok()) {
        Some(relative) if !relative.as_os_str().is_empty() => output.join(relative),
        _ => output.to_path_buf(),
    }
}

/// Collecte récursivement les couches GeoJSON, triées par chemin
pub fn collect_layers(path: &Path) -> Result<Vec<PathBuf>> {
    let mut layers = Vec::new();

    if path.is_file() {
        if is_layer_file(path) {
            layers.push(path.to_path_buf());
        }
        return Ok(layers);
    }

    let entries = std::fs::read_dir(path)
        .with_context(|| format!("Cannot read directory {}", path.display()))?;
    for entry in entries {
        let entry_path = entry?.path();

        if entry_path.is_dir() {
            layers.extend(collect_layers(&entry_path)?);
        } else if is_layer_file(&entry_path) {
            layers.push(entry_path);
        }
    }

    layers.sort();
    Ok(layers)
}

fn is_layer_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            ext.eq_ignore_ascii_case("geojson") || ext.eq_ignore_ascii_case("json")
        })
}
