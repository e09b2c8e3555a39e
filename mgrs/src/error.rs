//! Types d'erreurs pour le crate mgrs

use thiserror::Error;

/// Erreurs pouvant survenir lors d'une conversion MGRS
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MgrsError {
    /// Latitude hors des bandes MGRS (-80° à 84°)
    #[error("Latitude {0} is outside the MGRS band range (-80..84)")]
    OutOfBandRange(f64),

    /// Longitude non finie (NaN ou infinie)
    #[error("Invalid longitude: {0}")]
    InvalidLongitude(f64),

    /// Précision hors de 1..=5
    #[error("Invalid precision {0}: expected 1 (10 km) to 5 (1 m)")]
    InvalidPrecision(u8),

    /// Chaîne MGRS non conforme à la grammaire
    #[error("Malformed MGRS string '{input}': {reason}")]
    MalformedMgrsString { input: String, reason: String },

    /// Carré de 100 km sans correspondance dans ce fuseau
    #[error("Invalid 100 km square {square} for zone {zone}: {reason}")]
    InvalidGridSquareForZone {
        zone: u8,
        square: String,
        reason: String,
    },
}

impl MgrsError {
    /// Crée une erreur de chaîne MGRS mal formée
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedMgrsString {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Crée une erreur de carré de 100 km invalide
    pub fn invalid_square(zone: u8, square: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidGridSquareForZone {
            zone,
            square: square.into(),
            reason: reason.into(),
        }
    }
}
