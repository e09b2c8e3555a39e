//! Types de données pour le crate mgrs

use std::fmt;

use serde::Serialize;

use crate::band::LatitudeBand;
use crate::MgrsError;

/// Point géodésique WGS84 (degrés décimaux)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeodeticPoint {
    /// Latitude en degrés, dans [-80, 84] pour MGRS
    pub latitude: f64,
    /// Longitude en degrés, dans [-180, 180)
    pub longitude: f64,
}

impl GeodeticPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<GeodeticPoint> for geo::Point<f64> {
    fn from(p: GeodeticPoint) -> Self {
        geo::Point::new(p.longitude, p.latitude)
    }
}

/// Hémisphère UTM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude < 0.0 {
            Self::South
        } else {
            Self::North
        }
    }

    pub fn is_south(self) -> bool {
        self == Self::South
    }
}

/// Coordonnée UTM (mètres)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UtmCoordinate {
    /// Numéro de fuseau (1..=60)
    pub zone: u8,
    pub hemisphere: Hemisphere,
    /// Easting, 500 000 m sur le méridien central
    pub easting: f64,
    /// Northing, avec 10 000 000 m de false northing dans l'hémisphère sud
    pub northing: f64,
}

/// Précision MGRS : nombre de chiffres par axe (1 → 10 km ... 5 → 1 m)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Precision(u8);

impl Precision {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn digits(self) -> usize {
        self.0 as usize
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Taille d'une cellule en mètres (10^(5 - précision))
    pub fn resolution_meters(self) -> u32 {
        10u32.pow(u32::from(Self::MAX - self.0))
    }

    /// Libellé lisible de la résolution
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "10 km",
            2 => "1 km",
            3 => "100 m",
            4 => "10 m",
            _ => "1 m",
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<u8> for Precision {
    type Error = MgrsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MgrsError::InvalidPrecision(value))
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.label())
    }
}

/// Référence MGRS décomposée
///
/// Représentation tronquée : la référence désigne la cellule sud-ouest de
/// la précision indiquée, pas un point exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MgrsCoordinate {
    /// Numéro de fuseau (1..=60)
    pub zone: u8,
    /// Bande de latitude
    pub band: LatitudeBand,
    /// Lettre de colonne du carré de 100 km
    pub easting_letter: char,
    /// Lettre de ligne du carré de 100 km
    pub northing_letter: char,
    /// Chiffres easting (longueur = précision)
    pub easting_digits: String,
    /// Chiffres northing (longueur = précision)
    pub northing_digits: String,
    pub precision: Precision,
}

impl MgrsCoordinate {
    /// Identifiant du carré de 100 km (ex: "LH")
    pub fn square_id(&self) -> String {
        format!("{}{}", self.easting_letter, self.northing_letter)
    }
}
