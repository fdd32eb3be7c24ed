//! Définition et implémentation des commandes CLI
//!
//! - `translate`: couches MTK GeoJSON -> GeoJSON tagué OSM
//! - `rules`: inspection des tables de règles
//! - `layers`: couches écartées par le filtre d'admission

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use mtk::rules::{Rule, Selected};
use mtk::RuleTables;
use mtk2osm::{Config, Pipeline, TranslationReport, TranslationStatus};

#[derive(Subcommand)]
pub enum Commands {
    /// Translate MTK GeoJSON layers to OSM-tagged GeoJSON
    Translate {
        /// GeoJSON layer file or directory of layers
        #[arg(short, long, alias = "path")]
        input: PathBuf,

        /// Output directory (one <layer>.geojson per admitted layer)
        #[arg(short, long)]
        output: PathBuf,

        /// Value of the `source` tag (default: config, then MTK_2013)
        #[arg(long)]
        source: Option<String>,

        /// Config preset name (default/strict) or path to a JSON config
        #[arg(long)]
        config: Option<String>,

        /// Input encoding label (utf-8, latin1, windows-1252, ...)
        #[arg(long)]
        encoding: Option<String>,

        /// Skip features with unreadable attributes instead of aborting
        #[arg(long)]
        keep_going: bool,

        /// Write the translation report as JSON
        #[arg(long)]
        report: Option<PathBuf>,

        /// Maximum number of layers translated concurrently
        #[arg(long, alias = "threads")]
        jobs: Option<usize>,
    },

    /// List the translation rules (code and rule kind)
    Rules {
        /// Show a single feature class code
        #[arg(long)]
        code: Option<u32>,
    },

    /// List the layers skipped by the admission filter
    Layers {
        /// Config preset name or path (adds its extra denied layers)
        #[arg(long)]
        config: Option<String>,
    },
}

/// Exécute la commande translate
#[allow(clippy::too_many_arguments)]
pub fn cmd_translate(
    input: &Path,
    output: &Path,
    source: Option<String>,
    config_spec: Option<&str>,
    encoding: Option<String>,
    keep_going: bool,
    report_path: Option<&Path>,
    jobs: Option<usize>,
) -> Result<()> {
    let mut config = Config::resolve(config_spec)?;
    if let Some(source) = source {
        config.source = source;
    }
    if let Some(encoding) = encoding {
        config.encoding = encoding;
    }
    config.keep_going |= keep_going;

    println!("=== Translate {} ===", input.display());
    println!("Output: {}", output.display());
    println!("Source: {}", config.source);
    println!("Encoding: {}", config.encoding);
    println!("Keep going: {}", config.keep_going);
    if let Some(jobs) = jobs {
        println!("Jobs: {}", jobs);
    }

    let pipeline = Pipeline::from_config(&config)?;
    let report = pipeline.run(input, output, jobs)?;

    report.display();
    if let Some(path) = report_path {
        report
            .save_to_file(path)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        info!(path = %path.display(), "Report saved");
    }
    println!("{}", report.summary());

    ensure_not_failed(&report)
}

/// Un run dont aucune couche n'a abouti se termine en erreur
fn ensure_not_failed(report: &TranslationReport) -> Result<()> {
    if report.status == TranslationStatus::Failed {
        anyhow::bail!(
            "Translation failed: {} errors, {} layers failed",
            report.errors.len(),
            report.layers_failed
        );
    }
    Ok(())
}

/// Exécute la commande rules
pub fn cmd_rules(code: Option<u32>) -> Result<()> {
    let tables = RuleTables::shared();

    match code {
        Some(code) => {
            let line = describe_rule(tables, code)
                .with_context(|| format!("No rule for feature class code {}", code))?;
            println!("{}", line);
        }
        None => {
            for (code, _) in tables.codes() {
                if let Some(line) = describe_rule(tables, code) {
                    println!("{}", line);
                }
            }
            println!(
                "{} codes ({} road rules override general entries)",
                tables.len(),
                tables.overridden_codes().len()
            );
        }
    }

    Ok(())
}

/// Exécute la commande layers
pub fn cmd_layers(config_spec: Option<&str>) -> Result<()> {
    let config = Config::resolve(config_spec)?;
    let filter = config.layer_filter();
    let denied = filter.denied();

    for layer in &denied {
        println!("{}", layer);
    }
    println!("{} denied layers", denied.len());

    Ok(())
}

/// Ligne descriptive d'une règle: code, type, tags fixes le cas échéant
fn describe_rule(tables: &RuleTables, code: u32) -> Option<String> {
    let kind = tables.kind(code)?;
    let line = match tables.select(code)? {
        Selected::General(Rule::Tags(pairs)) if pairs.is_empty() => {
            format!("{}\t{}\t(no tags)", code, kind)
        }
        Selected::General(Rule::Tags(pairs)) => {
            let tags: Vec<String> = pairs.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            format!("{}\t{}\t{}", code, kind, tags.join(" "))
        }
        _ => format!("{}\t{}", code, kind),
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_fixed_tags() {
        let line = describe_rule(RuleTables::shared(), 45300).unwrap();
        assert_eq!(line, "45300\ttags\tman_made=chimney");
    }

    #[test]
    fn test_describe_road_rule() {
        let line = describe_rule(RuleTables::shared(), 12141).unwrap();
        assert_eq!(line, "12141\troad");
    }

    #[test]
    fn test_failed_run_is_an_error() {
        let mut report = TranslationReport::new("MTK_2013");
        report.record_layer_failure("Tieviiva", "Invalid GeoJSON");
        report.finalize();
        assert!(ensure_not_failed(&report).is_err());

        let mut partial = TranslationReport::new("MTK_2013");
        partial.record_written("Tieviiva", 0);
        partial.record_layer_failure("Rautatie", "Invalid GeoJSON");
        partial.finalize();
        assert!(ensure_not_failed(&partial).is_ok());
    }

    #[test]
    fn test_describe_unknown_code() {
        assert!(describe_rule(RuleTables::shared(), 99999).is_none());
        assert!(cmd_rules(Some(99999)).is_err());
    }
}
