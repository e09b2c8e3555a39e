//! Point d'entrée CLI pour mgrs-convert

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, EnvFilter};

use mgrs_convert::cli::{self, Commands};
use mgrs_convert::Config;

// Charger .env au démarrage
fn load_env() {
    // Chercher .env dans le répertoire courant ou parent
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

/// Convertir des coordonnées WGS84 vers et depuis MGRS
#[derive(Parser)]
#[command(name = "mgrs-convert")]
#[command(author, version)]
#[command(about = "Convert WGS84 latitude/longitude to and from MGRS references")]
#[command(long_about = "Convert WGS84 latitude/longitude to and from MGRS (Military Grid Reference System).\n\nCovers latitudes -80..84 (bands C to X). Norway/Svalbard zone exceptions and polar UPS are not supported.")]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    /// JSON configuration file (defaults, then MGRS_* env vars, then flags)
    #[arg(long, global = true, env = "MGRS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    // Charger .env avant tout
    load_env();

    let cli = Cli::parse();

    // Configurer le logging
    init_logging(cli.verbose, cli.quiet);

    let config = Config::resolve(cli.config.as_deref())?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::ToMgrs {
            lat,
            lon,
            precision,
            explain,
            json,
        } => cli::cmd_to_mgrs(&config, lat, lon, precision, explain, json)?,
        Commands::ToLatlon {
            mgrs,
            explain,
            json,
        } => cli::cmd_to_latlon(&config, &mgrs, explain, json)?,
        Commands::Batch {
            input,
            output,
            direction,
            precision,
            format,
            report,
        } => cli::cmd_batch(
            &config,
            &input,
            output.as_deref(),
            direction,
            precision,
            format,
            report.as_deref(),
        )?,
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
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
