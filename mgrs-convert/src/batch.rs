//! Conversion par lot d'un fichier de coordonnées
//!
//! Une entrée par ligne ; lignes vides et commentaires `#` ignorés. Les
//! lignes sont converties en parallèle (rayon), l'ordre d'entrée est
//! conservé en sortie.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use mgrs::MgrsError;

/// Sens de conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Direction {
    /// `lat,lon` → MGRS
    ToMgrs,
    /// MGRS → `lat, lon`
    ToLatlon,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::ToMgrs => "to-mgrs",
            Direction::ToLatlon => "to-latlon",
        }
    }
}

/// Erreur sur une ligne du lot
#[derive(Debug, Error)]
pub enum LineError {
    /// Ligne illisible comme couple de coordonnées
    #[error("expected 'lat,lon' or 'lat lon', got '{0}'")]
    BadCoordinates(String),

    /// Échec de conversion
    #[error(transparent)]
    Conversion(#[from] MgrsError),
}

/// Résultat d'une ligne convertie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRecord {
    /// Numéro de ligne dans le fichier (à partir de 1)
    pub line: usize,
    /// Contenu original de la ligne
    pub input: String,
    /// Référence MGRS (normalisée)
    pub mgrs: String,
    /// Latitude : entrée, ou coin sud-ouest de la cellule pour to-latlon
    pub latitude: f64,
    /// Longitude : entrée, ou coin sud-ouest de la cellule pour to-latlon
    pub longitude: f64,
}

/// Parse `lat,lon`, `lat;lon` ou `lat lon`
pub fn parse_lat_lon(line: &str) -> Result<(f64, f64), LineError> {
    let mut parts = line
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|s| !s.is_empty());

    let bad = || LineError::BadCoordinates(line.to_string());

    let lat = parts.next().ok_or_else(bad)?;
    let lon = parts.next().ok_or_else(bad)?;
    if parts.next().is_some() {
        return Err(bad());
    }

    let lat: f64 = fast_float::parse(lat).map_err(|_| bad())?;
    let lon: f64 = fast_float::parse(lon).map_err(|_| bad())?;
    Ok((lat, lon))
}

/// Convertit une ligne
pub fn convert_line(
    line: usize,
    input: &str,
    direction: Direction,
    precision: u8,
) -> Result<BatchRecord, LineError> {
    match direction {
        Direction::ToMgrs => {
            let (latitude, longitude) = parse_lat_lon(input)?;
            let mgrs = mgrs::lat_lon_to_mgrs(latitude, longitude, precision)?;
            Ok(BatchRecord {
                line,
                input: input.to_string(),
                mgrs,
                latitude,
                longitude,
            })
        }
        Direction::ToLatlon => {
            let coordinate = mgrs::parse_mgrs(input)?;
            let point = coordinate.to_geodetic()?;
            Ok(BatchRecord {
                line,
                input: input.to_string(),
                mgrs: coordinate.to_string(),
                latitude: point.latitude,
                longitude: point.longitude,
            })
        }
    }
}

/// Lit les lignes utiles d'une source, avec leur numéro
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<(usize, String)>> {
    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.context(format!("Failed to read line {}", i + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push((i + 1, trimmed.to_string()));
    }
    Ok(lines)
}

/// Convertit toutes les lignes en parallèle, dans l'ordre d'entrée
pub fn convert_lines(
    lines: &[(usize, String)],
    direction: Direction,
    precision: u8,
) -> Vec<(usize, String, Result<BatchRecord, LineError>)> {
    lines
        .par_iter()
        .map(|(n, input)| {
            (
                *n,
                input.clone(),
                convert_line(*n, input, direction, precision),
            )
        })
        .collect()
}

/// Convertit un fichier et retourne les résultats et le rapport
pub fn run_batch(
    input: &Path,
    direction: Direction,
    precision: u8,
) -> Result<(Vec<BatchRecord>, crate::report::BatchReport)> {
    mgrs::Precision::try_from(precision).context("Invalid precision")?;

    let start = Instant::now();
    let file = File::open(input).context(format!("Failed to open {}", input.display()))?;
    let lines = read_lines(BufReader::new(file))?;

    info!(
        input = %input.display(),
        lines = lines.len(),
        direction = direction.as_str(),
        "Starting batch"
    );

    let mut report = crate::report::BatchReport::new(direction.as_str());
    let mut records = Vec::with_capacity(lines.len());

    for (n, raw, result) in convert_lines(&lines, direction, precision) {
        match result {
            Ok(record) => {
                report.record_success();
                records.push(record);
            }
            Err(e) => {
                warn!(line = n, input = %raw, "Conversion failed: {}", e);
                report.record_failure(n, &raw, &e.to_string());
            }
        }
    }

    report.set_duration(start.elapsed());
    report.finalize();

    info!("{}", report.summary());

    Ok((records, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_lat_lon_separators() {
        assert_eq!(parse_lat_lon("48.8584,2.2945").unwrap(), (48.8584, 2.2945));
        assert_eq!(parse_lat_lon("48.8584, 2.2945").unwrap(), (48.8584, 2.2945));
        assert_eq!(parse_lat_lon("-33.8688 151.2093").unwrap(), (-33.8688, 151.2093));
        assert_eq!(parse_lat_lon("1e1;2").unwrap(), (10.0, 2.0));
    }

    #[test]
    fn test_parse_lat_lon_invalid() {
        assert!(matches!(parse_lat_lon("48.8"), Err(LineError::BadCoordinates(_))));
        assert!(parse_lat_lon("1,2,3").is_err());
        assert!(parse_lat_lon("abc,2").is_err());
        assert!(parse_lat_lon("1.5x,2").is_err());
    }

    #[test]
    fn test_convert_line_forward() {
        let record = convert_line(1, "-33.8688,151.2093", Direction::ToMgrs, 5).unwrap();
        assert_eq!(record.mgrs, "56H LH 34368 50948");
        assert_eq!(record.latitude, -33.8688);
    }

    #[test]
    fn test_convert_line_inverse() {
        let record = convert_line(4, "56hlh3436850948", Direction::ToLatlon, 5).unwrap();
        assert_eq!(record.mgrs, "56H LH 34368 50948");
        assert!((record.latitude - -33.8688).abs() < 1e-4);
        assert_eq!(record.line, 4);
    }

    #[test]
    fn test_convert_line_errors() {
        assert!(matches!(
            convert_line(1, "85,0", Direction::ToMgrs, 5),
            Err(LineError::Conversion(MgrsError::OutOfBandRange(_)))
        ));
        assert!(matches!(
            convert_line(1, "99ZAB1234512345", Direction::ToLatlon, 5),
            Err(LineError::Conversion(MgrsError::MalformedMgrsString { .. }))
        ));
    }

    #[test]
    fn test_read_lines_skips_comments() {
        let data = "# header\n\n48.8584,2.2945\n   \n# note\n0,0\n";
        let lines = read_lines(Cursor::new(data)).unwrap();
        assert_eq!(
            lines,
            vec![(3, "48.8584,2.2945".to_string()), (6, "0,0".to_string())]
        );
    }

    #[test]
    fn test_convert_lines_keeps_order() {
        let lines: Vec<(usize, String)> = (0..200)
            .map(|i| (i + 1, format!("{},{}", -79.0 + i as f64 * 0.8, 10.0)))
            .collect();
        let results = convert_lines(&lines, Direction::ToMgrs, 3);
        assert_eq!(results.len(), 200);
        for (i, (n, _, result)) in results.iter().enumerate() {
            assert_eq!(*n, i + 1);
            assert_eq!(result.as_ref().unwrap().line, i + 1);
        }
    }
}
