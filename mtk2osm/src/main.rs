//! Point d'entrée CLI pour mtk2osm

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

// Charger .env au démarrage
fn load_env() {
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

mod cli;

use cli::Commands;

/// Traduire le Maastotietokanta (GeoJSON) en GeoJSON tagué OpenStreetMap
#[derive(Parser)]
#[command(name = "mtk2osm")]
#[command(author, version)]
#[command(about = "Traduire les couches Maastotietokanta (GeoJSON) en tags OpenStreetMap")]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    // Charger .env avant tout
    load_env();

    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Translate {
            input,
            output,
            source,
            config,
            encoding,
            keep_going,
            report,
            jobs,
        } => {
            info!(input = %input.display(), output = %output.display(), "Translate to OSM tags");
            cli::cmd_translate(
                &input,
                &output,
                source,
                config.as_deref(),
                encoding,
                keep_going,
                report.as_deref(),
                jobs,
            )?;
        }
        Commands::Rules { code } => cli::cmd_rules(code)?,
        Commands::Layers { config } => cli::cmd_layers(config.as_deref())?,
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
