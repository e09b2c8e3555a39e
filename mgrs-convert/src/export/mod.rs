//! Écriture des résultats (texte, JSON, GeoJSON)

pub mod geojson;

use std::io::Write;

use anyhow::Result;

use crate::batch::{BatchRecord, Direction};
use crate::config::OutputFormat;

/// Écrit les résultats d'un lot dans le format demandé
pub fn write_records<W: Write>(
    writer: &mut W,
    records: &[BatchRecord],
    format: OutputFormat,
    direction: Direction,
    decimals: usize,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for record in records {
                match direction {
                    Direction::ToMgrs => writeln!(writer, "{}", record.mgrs)?,
                    Direction::ToLatlon => writeln!(
                        writer,
                        "{:.*}, {:.*}",
                        decimals, record.latitude, decimals, record.longitude
                    )?,
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, records)?;
            writeln!(writer)?;
        }
        OutputFormat::Geojson => geojson::write_feature_collection(writer, records)?,
    }
    writer.flush()?;
    Ok(())
}
