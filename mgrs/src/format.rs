//! Formatage des références MGRS
//!
//! Les résidus dans le carré de 100 km sont tronqués, jamais arrondis : un
//! point juste sous une ligne de grille reste dans sa cellule.

use std::fmt;

use crate::band::LatitudeBand;
use crate::grid::{grid_square_letters, SQUARE_SIZE};
use crate::types::{MgrsCoordinate, Precision, UtmCoordinate};

/// Résidu entier (0..=99 999 m) dans le carré de 100 km
fn square_residual(value: f64) -> u32 {
    (value.rem_euclid(SQUARE_SIZE).floor() as u32).min(99_999)
}

/// Chiffres tronqués à la précision, complétés par des zéros
fn truncated_digits(value: f64, precision: Precision) -> String {
    let truncated = square_residual(value) / precision.resolution_meters();
    format!("{:0width$}", truncated, width = precision.digits())
}

impl MgrsCoordinate {
    /// Construit la référence MGRS d'une position UTM déjà classée en bande
    pub fn from_utm(utm: &UtmCoordinate, band: LatitudeBand, precision: Precision) -> Self {
        let (easting_letter, northing_letter) =
            grid_square_letters(utm.zone, utm.easting, utm.northing);

        Self {
            zone: utm.zone,
            band,
            easting_letter,
            northing_letter,
            easting_digits: truncated_digits(utm.easting, precision),
            northing_digits: truncated_digits(utm.northing, precision),
            precision,
        }
    }
}

/// Formate `"{zone}{bande} {colonne}{ligne} {easting} {northing}"`
pub fn format_mgrs(
    zone: u8,
    band: LatitudeBand,
    easting: f64,
    northing: f64,
    precision: Precision,
) -> String {
    let (easting_letter, northing_letter) = grid_square_letters(zone, easting, northing);
    format!(
        "{}{} {}{} {} {}",
        zone,
        band,
        easting_letter,
        northing_letter,
        truncated_digits(easting, precision),
        truncated_digits(northing, precision)
    )
}

impl fmt::Display for MgrsCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {}{} {} {}",
            self.zone,
            self.band,
            self.easting_letter,
            self.northing_letter,
            self.easting_digits,
            self.northing_digits
        )
    }
}
