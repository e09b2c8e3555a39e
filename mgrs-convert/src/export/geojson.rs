//! Export GeoJSON des résultats avec geozero

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use geo::Geometry;
use geozero::geojson::GeoJsonWriter;
use geozero::GeozeroGeometry;

use crate::batch::BatchRecord;
use mgrs::GeodeticPoint;

/// Écrit une FeatureCollection de points (EPSG:4326)
pub fn write_feature_collection<W: Write>(writer: &mut W, records: &[BatchRecord]) -> Result<()> {
    write!(
        writer,
        r#"{{"type":"FeatureCollection","crs":{{"type":"name","properties":{{"name":"urn:ogc:def:crs:EPSG::4326"}}}},"features":["#
    )?;

    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            write!(writer, ",")?;
        }
        write_feature(writer, record)?;
    }

    write!(writer, "]}}")?;
    Ok(())
}

/// Exporte les résultats dans un fichier GeoJSON
pub fn export_to_geojson(records: &[BatchRecord], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    write_feature_collection(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Écrit une feature Point
fn write_feature<W: Write>(writer: &mut W, record: &BatchRecord) -> Result<()> {
    write!(writer, r#"{{"type":"Feature","id":{},"#, record.line)?;

    write!(writer, r#""geometry":"#)?;
    let point: geo::Point<f64> = GeodeticPoint::new(record.latitude, record.longitude).into();
    let mut geom_buf = Vec::new();
    let mut geom_writer = GeoJsonWriter::new(&mut geom_buf);
    Geometry::Point(point).process_geom(&mut geom_writer)?;
    writer.write_all(&geom_buf)?;

    write!(
        writer,
        r#","properties":{{"line":{},"mgrs":"{}","input":"{}"}}}}"#,
        record.line,
        escape_json(&record.mgrs),
        escape_json(&record.input)
    )?;

    Ok(())
}

/// Échappe une chaîne pour JSON
fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result
}
