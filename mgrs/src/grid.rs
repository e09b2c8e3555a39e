//! Carrés de 100 km : attribution des lettres et reconstruction inverse
//!
//! La paire de lettres est périodique : 800 km en easting (8 colonnes) et
//! 2 000 km en northing (20 lignes). L'inverse ne retrouve donc qu'un
//! northing candidat, recalé ensuite dans l'emprise de la bande de latitude.

use tracing::{debug, trace};

use crate::band::LatitudeBand;
use crate::types::Hemisphere;
use crate::utm::{central_meridian, project_in_zone};
use crate::MgrsError;

/// Côté d'un carré de la grille
pub const SQUARE_SIZE: f64 = 100_000.0;

/// Période des lettres de ligne (20 lignes de 100 km)
pub const NORTHING_PERIOD: f64 = 2_000_000.0;

/// Marge autour de l'emprise d'une bande pour le recalage du northing
///
/// Couvre l'écart des parallèles en bord de fuseau (quelques km) et la
/// troncature à 10 km.
const BAND_MARGIN: f64 = 100_000.0;

/// Alphabets des colonnes, choisis par `(zone - 1) % 3` (sans I ni O)
const EASTING_SETS: [&[u8; 8]; 3] = [b"ABCDEFGH", b"JKLMNPQR", b"STUVWXYZ"];

/// Alphabet des lignes (sans I ni O)
const NORTHING_SET: &[u8; 20] = b"ABCDEFGHJKLMNPQRSTUV";

fn easting_set(zone: u8) -> &'static [u8; 8] {
    EASTING_SETS[usize::from(zone.saturating_sub(1)) % 3]
}

/// Décalage de l'alphabet des lignes : 5 pour les fuseaux pairs
fn row_offset(zone: u8) -> usize {
    if zone % 2 == 0 {
        5
    } else {
        0
    }
}

/// Lettres (colonne, ligne) du carré de 100 km contenant un point UTM
pub fn grid_square_letters(zone: u8, easting: f64, northing: f64) -> (char, char) {
    let column = (easting / SQUARE_SIZE).floor() as i64;
    let column_index = (column - 1).rem_euclid(8) as usize;

    let row = (northing / SQUARE_SIZE).floor() as i64;
    let row_index = (row + row_offset(zone) as i64).rem_euclid(20) as usize;

    (
        char::from(easting_set(zone)[column_index]),
        char::from(NORTHING_SET[row_index]),
    )
}

/// Coin sud-ouest (easting, northing) d'un carré de 100 km
///
/// Le northing retourné est le plus petit candidat positif ; les autres
/// s'en déduisent par multiples de [`NORTHING_PERIOD`].
pub fn square_base_coordinates(
    zone: u8,
    easting_letter: char,
    northing_letter: char,
) -> Result<(f64, f64), MgrsError> {
    let square = format!("{}{}", easting_letter, northing_letter);

    let column_index = easting_set(zone)
        .iter()
        .position(|&l| char::from(l) == easting_letter)
        .ok_or_else(|| {
            MgrsError::invalid_square(
                zone,
                square.as_str(),
                format!("column letter {} not used in this zone", easting_letter),
            )
        })?;

    let row_index = NORTHING_SET
        .iter()
        .position(|&l| char::from(l) == northing_letter)
        .ok_or_else(|| {
            MgrsError::invalid_square(
                zone,
                square.as_str(),
                format!("row letter {} is not a grid letter", northing_letter),
            )
        })?;

    let base_easting = (column_index as f64 + 1.0) * SQUARE_SIZE;

    let offset = row_offset(zone);
    let k = (0..20usize)
        .find(|k| (k + offset) % 20 == row_index)
        .unwrap_or(0);
    let base_northing = k as f64 * SQUARE_SIZE;

    trace!(zone, %square, base_easting, base_northing, "square base");

    Ok((base_easting, base_northing))
}

/// Emprise en northing d'une bande, mesurée sur le méridien central
pub fn band_northing_range(zone: u8, band: LatitudeBand) -> (f64, f64) {
    let hemisphere = if band.is_south() {
        Hemisphere::South
    } else {
        Hemisphere::North
    };
    let cm = central_meridian(zone);
    let (_, min_northing) = project_in_zone(band.min_latitude(), cm, zone, hemisphere);
    let (_, max_northing) = project_in_zone(band.max_latitude(), cm, zone, hemisphere);
    (min_northing, max_northing)
}

/// Recale un northing candidat dans l'emprise de la bande
///
/// Ajoute 2 000 km tant que le candidat est sous l'emprise, en retire tant
/// qu'il est au-dessus. Les deux boucles sont bornées : chaque pas déplace
/// le candidat d'une période complète. `None` si aucun candidat ne tombe
/// dans la bande.
pub fn resolve_northing(zone: u8, band: LatitudeBand, candidate: f64) -> Option<f64> {
    let (min_northing, max_northing) = band_northing_range(zone, band);
    let lower = min_northing - BAND_MARGIN;
    let upper = max_northing + BAND_MARGIN;

    let mut northing = candidate;
    while northing < lower {
        northing += NORTHING_PERIOD;
    }
    while northing >= upper {
        northing -= NORTHING_PERIOD;
    }

    if northing < lower {
        debug!(zone, %band, candidate, min_northing, max_northing, "no northing inside band");
        return None;
    }

    debug!(zone, %band, candidate, northing, "northing resolved");

    Some(northing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::band::LatitudeBand;

    #[test]
    fn test_letters_paris() {
        assert_eq!(grid_square_letters(31, 448252.0, 5411954.9), ('D', 'Q'));
    }

    #[test]
    fn test_letters_sydney() {
        assert_eq!(grid_square_letters(56, 334368.6, 6250948.3), ('L', 'H'));
    }

    #[test]
    fn test_letter_periodicity() {
        let base = grid_square_letters(17, 250000.0, 3150000.0);
        assert_eq!(grid_square_letters(17, 250000.0, 3150000.0 + NORTHING_PERIOD), base);
        assert_eq!(grid_square_letters(17, 250000.0 + 800000.0, 3150000.0), base);
    }

    #[test]
    fn test_adjacent_zones_use_different_sets() {
        let letters: Vec<char> = (1..=3)
            .map(|zone| grid_square_letters(zone, 150000.0, 0.0).0)
            .collect();
        assert_eq!(letters, ['A', 'J', 'S']);
        // Fuseaux pairs : ligne décalée de 5
        assert_eq!(grid_square_letters(1, 150000.0, 0.0).1, 'A');
        assert_eq!(grid_square_letters(2, 150000.0, 0.0).1, 'F');
    }

    #[test]
    fn test_square_base_inverts_letters() {
        for zone in [1u8, 2, 3, 30, 56, 60] {
            for column in 1..=8 {
                for row in 0..20 {
                    let e = column as f64 * SQUARE_SIZE + 1.0;
                    let n = row as f64 * SQUARE_SIZE + 1.0;
                    let (el, nl) = grid_square_letters(zone, e, n);
                    let (be, bn) = square_base_coordinates(zone, el, nl).unwrap();
                    assert_eq!(be, column as f64 * SQUARE_SIZE, "zone={} {}{}", zone, el, nl);
                    assert_eq!(bn, row as f64 * SQUARE_SIZE, "zone={} {}{}", zone, el, nl);
                }
            }
        }
    }

    #[test]
    fn test_square_base_rejects_foreign_column() {
        // Zone 56 : alphabet JKLMNPQR
        match square_base_coordinates(56, 'A', 'H') {
            Err(MgrsError::InvalidGridSquareForZone { zone, square, .. }) => {
                assert_eq!(zone, 56);
                assert_eq!(square, "AH");
            }
            other => panic!("Expected InvalidGridSquareForZone, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_sydney() {
        let (_, base) = square_base_coordinates(56, 'L', 'H').unwrap();
        let northing = resolve_northing(56, LatitudeBand::H, base + 50948.0).unwrap();
        assert_eq!(northing, 6250948.0);
    }

    #[test]
    fn test_band_m_range_reaches_equator() {
        let (min, max) = band_northing_range(32, LatitudeBand::M);
        assert!(min > 9_000_000.0 && min < 9_200_000.0, "min={}", min);
        assert!((max - 10_000_000.0).abs() < 1e-6, "max={}", max);
    }

    #[test]
    fn test_band_x_spans_twelve_degrees() {
        let (min, max) = band_northing_range(32, LatitudeBand::X);
        assert!(max - min > 1_300_000.0, "height={}", max - min);
    }

    #[test]
    fn test_resolve_just_below_equator() {
        // 32M PE 11280 99889 : -0.001°, 10°
        let (_, base) = square_base_coordinates(32, 'P', 'E').unwrap();
        let northing = resolve_northing(32, LatitudeBand::M, base + 99889.0).unwrap();
        assert_eq!(northing, 9999889.0);
    }
}
