//! Définition et implémentation des commandes CLI
//!
//! - `to-mgrs` : lat/lon → MGRS
//! - `to-latlon` : MGRS → lat/lon
//! - `batch` : conversion d'un fichier ligne par ligne

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use crate::batch::{run_batch, Direction};
use crate::config::{Config, OutputFormat};
use crate::export::write_records;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a WGS84 latitude/longitude to an MGRS reference
    ToMgrs {
        /// Latitude in decimal degrees (-80..84)
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Digits per axis: 1 (10 km) to 5 (1 m). Default from config (5)
        #[arg(short, long)]
        precision: Option<u8>,

        /// Print the intermediate values (zone, band, UTM, square)
        #[arg(long)]
        explain: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert an MGRS reference to a WGS84 latitude/longitude
    ToLatlon {
        /// MGRS reference, with or without spaces (e.g. "56H LH 34368 50948")
        mgrs: String,

        /// Print the intermediate values (zone, band, UTM, square)
        #[arg(long)]
        explain: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert every line of a file
    Batch {
        /// Input file: one "lat,lon" or MGRS reference per line
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Conversion direction
        #[arg(short, long, value_enum)]
        direction: Direction,

        /// Digits per axis for to-mgrs. Default from config (5)
        #[arg(short, long)]
        precision: Option<u8>,

        /// Output format. Default from config (text)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Save the batch report as JSON
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

/// Rendu de la commande to-mgrs
pub fn render_to_mgrs(
    config: &Config,
    lat: f64,
    lon: f64,
    precision: Option<u8>,
    explain: bool,
    json: bool,
) -> Result<String> {
    let precision = config.precision(precision);
    let explain = explain || config.explain;

    if explain || json {
        let breakdown = mgrs::explain_forward(lat, lon, precision)
            .with_context(|| format!("Cannot convert ({}, {}) to MGRS", lat, lon))?;
        if json {
            return Ok(serde_json::to_string_pretty(&breakdown)?);
        }
        return Ok(breakdown.to_string());
    }

    mgrs::lat_lon_to_mgrs(lat, lon, precision)
        .with_context(|| format!("Cannot convert ({}, {}) to MGRS", lat, lon))
}

/// Rendu de la commande to-latlon
pub fn render_to_latlon(config: &Config, input: &str, explain: bool, json: bool) -> Result<String> {
    let explain = explain || config.explain;

    if explain || json {
        let breakdown = mgrs::explain_inverse(input)
            .with_context(|| format!("Cannot convert '{}' to latitude/longitude", input))?;
        if json {
            return Ok(serde_json::to_string_pretty(&breakdown)?);
        }
        return Ok(breakdown.to_string());
    }

    let (lat, lon) = mgrs::mgrs_to_lat_lon(input)
        .with_context(|| format!("Cannot convert '{}' to latitude/longitude", input))?;
    let d = config.coordinate_decimals;
    Ok(format!("{:.*}, {:.*}", d, lat, d, lon))
}

/// Exécute la commande to-mgrs
pub fn cmd_to_mgrs(
    config: &Config,
    lat: f64,
    lon: f64,
    precision: Option<u8>,
    explain: bool,
    json: bool,
) -> Result<()> {
    println!("{}", render_to_mgrs(config, lat, lon, precision, explain, json)?);
    Ok(())
}

/// Exécute la commande to-latlon
pub fn cmd_to_latlon(config: &Config, input: &str, explain: bool, json: bool) -> Result<()> {
    println!("{}", render_to_latlon(config, input, explain, json)?);
    Ok(())
}

/// Exécute la commande batch
pub fn cmd_batch(
    config: &Config,
    input: &Path,
    output: Option<&Path>,
    direction: Direction,
    precision: Option<u8>,
    format: Option<OutputFormat>,
    report_path: Option<&Path>,
) -> Result<()> {
    let precision = config.precision(precision);
    let format = format.unwrap_or(config.output_format);

    let (records, report) = run_batch(input, direction, precision)?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .context(format!("Failed to create file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_records(&mut writer, &records, format, direction, config.coordinate_decimals)?;
            info!(output = %path.display(), records = records.len(), "Results written");
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_records(&mut writer, &records, format, direction, config.coordinate_decimals)?;
            writer.flush()?;
        }
    }

    report.display();

    if let Some(path) = report_path {
        report
            .save_to_file(path)
            .context(format!("Failed to save report: {}", path.display()))?;
        info!(report = %path.display(), "Report saved");
    }

    if report.converted == 0 && report.failed > 0 {
        anyhow::bail!("No line could be converted ({} failed)", report.failed);
    }

    Ok(())
}
