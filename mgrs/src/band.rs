//! Bandes de latitude MGRS
//!
//! 20 bandes de 8° de C (-80°) à X, sauf X qui s'étend jusqu'à 84°.
//! Les lettres I et O sont exclues.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::MgrsError;

/// Latitude minimale couverte par MGRS
pub const MIN_LATITUDE: f64 = -80.0;

/// Latitude maximale couverte par MGRS (haut de la bande X)
pub const MAX_LATITUDE: f64 = 84.0;

/// Bande de latitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum LatitudeBand {
    C,
    D,
    E,
    F,
    G,
    H,
    J,
    K,
    L,
    M,
    N,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
}

use LatitudeBand::*;

/// Bandes ordonnées du sud au nord
pub const BANDS: [LatitudeBand; 20] = [
    C, D, E, F, G, H, J, K, L, M, N, P, Q, R, S, T, U, V, W, X,
];

/// Latitude minimale de chaque bande, même ordre que `BANDS`
const BAND_MINS: [f64; 20] = [
    -80.0, -72.0, -64.0, -56.0, -48.0, -40.0, -32.0, -24.0, -16.0, -8.0, 0.0, 8.0, 16.0, 24.0,
    32.0, 40.0, 48.0, 56.0, 64.0, 72.0,
];

impl LatitudeBand {
    /// Classe une latitude dans sa bande
    ///
    /// Parcourt les seuils du nord au sud et retourne la première bande dont
    /// le minimum est ≤ `latitude`. En dessous de -80° (ou NaN) retourne C :
    /// ce cas n'est pas atteignable depuis [`LatitudeBand::for_latitude`].
    pub fn from_latitude(latitude: f64) -> Self {
        for (band, min) in BANDS.iter().zip(BAND_MINS.iter()).rev() {
            if latitude >= *min {
                return *band;
            }
        }
        warn!(latitude, "latitude below band C, falling back to C");
        C
    }

    /// Classe une latitude en refusant les valeurs hors de [-80, 84]
    pub fn for_latitude(latitude: f64) -> Result<Self, MgrsError> {
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(MgrsError::OutOfBandRange(latitude));
        }
        Ok(Self::from_latitude(latitude))
    }

    /// Bande correspondant à une lettre (I et O refusées)
    pub fn from_letter(letter: char) -> Option<Self> {
        let letter = letter.to_ascii_uppercase();
        BANDS.iter().copied().find(|b| b.letter() == letter)
    }

    /// Position de la bande du sud au nord (C = 0, X = 19)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        match self {
            C => 'C',
            D => 'D',
            E => 'E',
            F => 'F',
            G => 'G',
            H => 'H',
            J => 'J',
            K => 'K',
            L => 'L',
            M => 'M',
            N => 'N',
            P => 'P',
            Q => 'Q',
            R => 'R',
            S => 'S',
            T => 'T',
            U => 'U',
            V => 'V',
            W => 'W',
            X => 'X',
        }
    }

    pub fn min_latitude(self) -> f64 {
        BAND_MINS[self.index()]
    }

    /// Limite nord (exclusive sauf pour X, qui inclut 84°)
    pub fn max_latitude(self) -> f64 {
        match BAND_MINS.get(self.index() + 1) {
            Some(next) => *next,
            None => MAX_LATITUDE,
        }
    }

    /// Bandes C à M : hémisphère sud
    pub fn is_south(self) -> bool {
        self.min_latitude() < 0.0
    }
}

impl fmt::Display for LatitudeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
