//! Chaînes de conversion complètes
//!
//! - directe : lat/lon → UTM → bande → lettres du carré → chaîne MGRS
//! - inverse : chaîne MGRS → coin du carré → recalage du northing → lat/lon

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::band::LatitudeBand;
use crate::grid::{resolve_northing, square_base_coordinates};
use crate::parser::parse_mgrs;
use crate::types::{GeodeticPoint, Hemisphere, MgrsCoordinate, Precision, UtmCoordinate};
use crate::utm::{central_meridian, lat_lon_to_utm, utm_to_lat_lon};
use crate::MgrsError;

/// Convertit lat/lon (degrés WGS84) en référence MGRS décomposée
pub fn lat_lon_to_mgrs_coordinate(
    lat: f64,
    lon: f64,
    precision: u8,
) -> Result<MgrsCoordinate, MgrsError> {
    let precision = Precision::try_from(precision)?;
    if !lon.is_finite() {
        return Err(MgrsError::InvalidLongitude(lon));
    }
    let band = LatitudeBand::for_latitude(lat)?;
    let utm = lat_lon_to_utm(lat, lon);
    let mgrs = MgrsCoordinate::from_utm(&utm, band, precision);

    debug!(lat, lon, mgrs = %mgrs, "converted to MGRS");

    Ok(mgrs)
}

/// Convertit lat/lon (degrés WGS84) en chaîne MGRS
///
/// ```
/// let mgrs = mgrs::lat_lon_to_mgrs(48.8584, 2.2945, 5).unwrap();
/// assert_eq!(mgrs, "31U DQ 48252 11954");
/// ```
pub fn lat_lon_to_mgrs(lat: f64, lon: f64, precision: u8) -> Result<String, MgrsError> {
    lat_lon_to_mgrs_coordinate(lat, lon, precision).map(|m| m.to_string())
}

fn parse_digits(mgrs: &MgrsCoordinate, digits: &str) -> Result<f64, MgrsError> {
    if digits.len() != mgrs.precision.digits() {
        return Err(MgrsError::malformed(
            mgrs.to_string(),
            format!("expected {} digits per axis", mgrs.precision.digits()),
        ));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MgrsError::malformed(mgrs.to_string(), "non-digit character"));
    }
    digits
        .parse::<u32>()
        .map(f64::from)
        .map_err(|_| MgrsError::malformed(mgrs.to_string(), "invalid digits"))
}

impl MgrsCoordinate {
    /// Reconstruit la position UTM du coin sud-ouest de la cellule
    pub fn to_utm(&self) -> Result<UtmCoordinate, MgrsError> {
        let (base_easting, base_northing) =
            square_base_coordinates(self.zone, self.easting_letter, self.northing_letter)?;

        let scale = f64::from(self.precision.resolution_meters());
        let easting = base_easting + parse_digits(self, &self.easting_digits)? * scale;
        let candidate = base_northing + parse_digits(self, &self.northing_digits)? * scale;
        let northing = resolve_northing(self.zone, self.band, candidate).ok_or_else(|| {
            MgrsError::invalid_square(
                self.zone,
                self.square_id(),
                format!("row letter {} never falls in band {}", self.northing_letter, self.band),
            )
        })?;

        let hemisphere = if self.band.is_south() {
            Hemisphere::South
        } else {
            Hemisphere::North
        };

        Ok(UtmCoordinate {
            zone: self.zone,
            hemisphere,
            easting,
            northing,
        })
    }

    /// Coordonnées géographiques du coin sud-ouest de la cellule
    pub fn to_geodetic(&self) -> Result<GeodeticPoint, MgrsError> {
        Ok(utm_to_lat_lon(&self.to_utm()?))
    }
}

/// Reconstruit la position UTM d'une chaîne MGRS
pub fn mgrs_to_utm(input: &str) -> Result<UtmCoordinate, MgrsError> {
    parse_mgrs(input)?.to_utm()
}

/// Convertit une chaîne MGRS en (latitude, longitude) WGS84
///
/// ```
/// let (lat, lon) = mgrs::mgrs_to_lat_lon("31U DQ 48252 11954").unwrap();
/// assert!((lat - 48.8584).abs() < 1e-4);
/// assert!((lon - 2.2945).abs() < 1e-4);
/// ```
pub fn mgrs_to_lat_lon(input: &str) -> Result<(f64, f64), MgrsError> {
    let point = parse_mgrs(input)?.to_geodetic()?;
    debug!(input, lat = point.latitude, lon = point.longitude, "converted from MGRS");
    Ok((point.latitude, point.longitude))
}

/// Détail des valeurs intermédiaires d'une conversion
#[derive(Debug, Clone, Serialize)]
pub struct Breakdown {
    pub mgrs: String,
    pub latitude: f64,
    pub longitude: f64,
    pub zone: u8,
    pub central_meridian: f64,
    pub band: LatitudeBand,
    pub hemisphere: Hemisphere,
    pub easting: f64,
    pub northing: f64,
    pub square: String,
    pub precision: Precision,
}

impl Breakdown {
    fn new(point: GeodeticPoint, utm: &UtmCoordinate, mgrs: &MgrsCoordinate) -> Self {
        Self {
            mgrs: mgrs.to_string(),
            latitude: point.latitude,
            longitude: point.longitude,
            zone: utm.zone,
            central_meridian: central_meridian(utm.zone),
            band: mgrs.band,
            hemisphere: utm.hemisphere,
            easting: utm.easting,
            northing: utm.northing,
            square: mgrs.square_id(),
            precision: mgrs.precision,
        }
    }
}

/// Détaille une conversion lat/lon → MGRS
pub fn explain_forward(lat: f64, lon: f64, precision: u8) -> Result<Breakdown, MgrsError> {
    let mgrs = lat_lon_to_mgrs_coordinate(lat, lon, precision)?;
    let utm = lat_lon_to_utm(lat, lon);
    Ok(Breakdown::new(GeodeticPoint::new(lat, lon), &utm, &mgrs))
}

/// Détaille une conversion MGRS → lat/lon
pub fn explain_inverse(input: &str) -> Result<Breakdown, MgrsError> {
    let mgrs = parse_mgrs(input)?;
    let utm = mgrs.to_utm()?;
    let point = utm_to_lat_lon(&utm);
    Ok(Breakdown::new(point, &utm, &mgrs))
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MGRS: {}", self.mgrs)?;
        writeln!(
            f,
            "Zone: {} (central meridian {}°)",
            self.zone, self.central_meridian
        )?;
        writeln!(f, "Band: {} ({:?} hemisphere)", self.band, self.hemisphere)?;
        writeln!(f, "Latitude/Longitude: {:.6}°, {:.6}°", self.latitude, self.longitude)?;
        writeln!(f, "UTM easting: {:.3} m", self.easting)?;
        if self.hemisphere.is_south() {
            writeln!(
                f,
                "UTM northing: {:.3} m (includes 10,000,000 m false northing)",
                self.northing
            )?;
        } else {
            writeln!(f, "UTM northing: {:.3} m", self.northing)?;
        }
        writeln!(f, "100 km square: {}", self.square)?;
        write!(f, "Precision: {}", self.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_sydney() {
        let mgrs = lat_lon_to_mgrs(-33.8688, 151.2093, 5).unwrap();
        assert!(mgrs.starts_with("56H"), "mgrs={}", mgrs);
        assert_eq!(mgrs, "56H LH 34368 50948");
    }

    #[test]
    fn test_forward_rejects() {
        assert_eq!(
            lat_lon_to_mgrs(85.0, 0.0, 5),
            Err(MgrsError::OutOfBandRange(85.0))
        );
        assert_eq!(
            lat_lon_to_mgrs(-81.0, 10.0, 5),
            Err(MgrsError::OutOfBandRange(-81.0))
        );
        assert_eq!(lat_lon_to_mgrs(10.0, 10.0, 0), Err(MgrsError::InvalidPrecision(0)));
        assert_eq!(lat_lon_to_mgrs(10.0, 10.0, 6), Err(MgrsError::InvalidPrecision(6)));
        assert!(matches!(
            lat_lon_to_mgrs(10.0, f64::NAN, 5),
            Err(MgrsError::InvalidLongitude(_))
        ));
        assert!(matches!(
            lat_lon_to_mgrs(f64::NAN, 10.0, 5),
            Err(MgrsError::OutOfBandRange(_))
        ));
    }

    #[test]
    fn test_inverse_returns_cell_corner() {
        let utm = mgrs_to_utm("56H LH 34368 50948").unwrap();
        assert_eq!(utm.zone, 56);
        assert_eq!(utm.hemisphere, Hemisphere::South);
        assert_eq!(utm.easting, 334368.0);
        assert_eq!(utm.northing, 6250948.0);

        let utm = mgrs_to_utm("56HLH3450").unwrap();
        assert_eq!(utm.easting, 334000.0);
        assert_eq!(utm.northing, 6250000.0);
    }

    #[test]
    fn test_inverse_rejects_foreign_square() {
        // Zone 56 utilise les colonnes JKLMNPQR
        assert!(matches!(
            mgrs_to_lat_lon("56HAH3436850948"),
            Err(MgrsError::InvalidGridSquareForZone { .. })
        ));
    }

    #[test]
    fn test_manual_coordinate_with_bad_digits() {
        let mut mgrs = parse_mgrs("31UDQ4825211954").unwrap();
        mgrs.easting_digits = "48x52".to_string();
        assert!(matches!(
            mgrs.to_utm(),
            Err(MgrsError::MalformedMgrsString { .. })
        ));
        mgrs.easting_digits = "482".to_string();
        assert!(mgrs.to_utm().is_err());
    }

    #[test]
    fn test_explain_forward() {
        let b = explain_forward(-33.8688, 151.2093, 3).unwrap();
        assert_eq!(b.zone, 56);
        assert_eq!(b.central_meridian, 153.0);
        assert_eq!(b.band, LatitudeBand::H);
        assert_eq!(b.square, "LH");
        assert_eq!(b.mgrs, "56H LH 343 509");
        let text = b.to_string();
        assert!(text.contains("Zone: 56 (central meridian 153°)"));
        assert!(text.contains("false northing"));
        assert!(text.contains("Precision: 3 (100 m)"));
    }

    #[test]
    fn test_explain_inverse() {
        let b = explain_inverse("31U DQ 48252 11954").unwrap();
        assert_eq!(b.hemisphere, Hemisphere::North);
        assert_eq!(b.easting, 448252.0);
        assert!((b.latitude - 48.8584).abs() < 1e-4);
        assert!(!b.to_string().contains("false northing"));
    }
}
