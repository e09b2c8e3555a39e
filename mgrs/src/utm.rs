//! Projection UTM (Universal Transverse Mercator) sur WGS84
//!
//! Séries de Snyder (USGS Professional Paper 1395, 1987) dans les deux sens :
//! arc méridien à l'ordre e⁶, termes en A⁵/A⁶ pour la projection directe,
//! latitude du pied de la perpendiculaire (coefficients J1..J4) pour
//! l'inverse.

use tracing::trace;

use super::ellipsoid::{Utm, WGS84};
use crate::types::{GeodeticPoint, Hemisphere, UtmCoordinate};

/// Nombre de fuseaux UTM
pub const ZONE_COUNT: u8 = 60;

/// Ramène une longitude dans [-180, 180)
pub fn normalize_longitude(lon: f64) -> f64 {
    if (-180.0..180.0).contains(&lon) {
        lon
    } else {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// Fuseau UTM d'une longitude (1..=60)
pub fn zone_from_longitude(lon: f64) -> u8 {
    let lon = normalize_longitude(lon);
    let zone = ((lon + 180.0) / Utm::ZONE_WIDTH).floor() as u8 + 1;
    zone.min(ZONE_COUNT)
}

/// Méridien central d'un fuseau, en degrés
pub fn central_meridian(zone: u8) -> f64 {
    -183.0 + Utm::ZONE_WIDTH * f64::from(zone)
}

/// Arc méridien de l'équateur à `phi` (radians)
fn meridional_arc(phi: f64) -> f64 {
    let (e2, e4, e6) = (WGS84::E2, WGS84::E4, WGS84::E6);
    WGS84::A
        * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
            - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
            + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
            - (35.0 * e6 / 3072.0) * (6.0 * phi).sin())
}

/// Projette dans un fuseau et un hémisphère imposés
///
/// Sert aussi à calculer les northings limites d'une bande sur le méridien
/// central, où le fuseau ne se déduit pas de la longitude seule.
pub(crate) fn project_in_zone(lat: f64, lon: f64, zone: u8, hemisphere: Hemisphere) -> (f64, f64) {
    let ep2 = WGS84::EP2;
    let k0 = Utm::K0;

    let phi = lat.to_radians();
    let lam = normalize_longitude(lon).to_radians();
    let lam0 = central_meridian(zone).to_radians();

    let sin_phi = phi.sin();
    let cos_phi = phi.cos();
    let tan_phi = phi.tan();

    let n = WGS84::A / (1.0 - WGS84::E2 * sin_phi.powi(2)).sqrt();
    let t = tan_phi.powi(2);
    let c = ep2 * cos_phi.powi(2);
    let a = (lam - lam0) * cos_phi;
    let m = meridional_arc(phi);

    let easting = k0
        * n
        * (a + (1.0 - t + c) * a.powi(3) / 6.0
            + (5.0 - 18.0 * t + t.powi(2) + 72.0 * c - 58.0 * ep2) * a.powi(5) / 120.0)
        + Utm::FALSE_EASTING;

    let mut northing = k0
        * (m + n
            * tan_phi
            * (a.powi(2) / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c.powi(2)) * a.powi(4) / 24.0
                + (61.0 - 58.0 * t + t.powi(2) + 600.0 * c - 330.0 * ep2) * a.powi(6) / 720.0));

    if hemisphere.is_south() {
        northing += Utm::FALSE_NORTHING_SOUTH;
    }

    (easting, northing)
}

/// Convertit des coordonnées géographiques WGS84 (degrés) en UTM
///
/// Ne valide pas la latitude : le contrôle de la plage MGRS est fait par
/// l'appelant.
pub fn lat_lon_to_utm(lat: f64, lon: f64) -> UtmCoordinate {
    let zone = zone_from_longitude(lon);
    let hemisphere = Hemisphere::from_latitude(lat);
    let (easting, northing) = project_in_zone(lat, lon, zone, hemisphere);

    trace!(lat, lon, zone, easting, northing, "projected to UTM");

    UtmCoordinate {
        zone,
        hemisphere,
        easting,
        northing,
    }
}

/// Convertit une coordonnée UTM en coordonnées géographiques WGS84 (degrés)
pub fn utm_to_lat_lon(utm: &UtmCoordinate) -> GeodeticPoint {
    let (e2, e4, e6) = (WGS84::E2, WGS84::E4, WGS84::E6);
    let ep2 = WGS84::EP2;
    let a = WGS84::A;
    let k0 = Utm::K0;

    let lon0 = central_meridian(utm.zone).to_radians();

    let x = utm.easting - Utm::FALSE_EASTING;
    let y = if utm.hemisphere.is_south() {
        utm.northing - Utm::FALSE_NORTHING_SOUTH
    } else {
        utm.northing
    };

    // Latitude du pied de la perpendiculaire
    let m = y / k0;
    let mu = m / (a * (1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0));

    let e1 = (1.0 - (1.0 - e2).sqrt()) / (1.0 + (1.0 - e2).sqrt());
    let j1 = 3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0;
    let j2 = 21.0 * e1.powi(2) / 16.0 - 55.0 * e1.powi(4) / 32.0;
    let j3 = 151.0 * e1.powi(3) / 96.0;
    let j4 = 1097.0 * e1.powi(4) / 512.0;

    let phi1 = mu
        + j1 * (2.0 * mu).sin()
        + j2 * (4.0 * mu).sin()
        + j3 * (6.0 * mu).sin()
        + j4 * (8.0 * mu).sin();

    let sin_phi1 = phi1.sin();
    let cos_phi1 = phi1.cos();
    let tan_phi1 = phi1.tan();

    let c1 = ep2 * cos_phi1.powi(2);
    let t1 = tan_phi1.powi(2);
    let n1 = a / (1.0 - e2 * sin_phi1.powi(2)).sqrt();
    let r1 = n1 * (1.0 - e2) / (1.0 - e2 * sin_phi1.powi(2));
    let d = x / (n1 * k0);

    let lat = phi1
        - (n1 * tan_phi1 / r1)
            * (d.powi(2) / 2.0
                - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1.powi(2) - 9.0 * ep2) * d.powi(4) / 24.0
                + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1.powi(2)
                    - 252.0 * ep2
                    - 3.0 * c1.powi(2))
                    * d.powi(6)
                    / 720.0);

    let lon = lon0
        + (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
            + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1.powi(2) + 8.0 * ep2 + 24.0 * t1.powi(2))
                * d.powi(5)
                / 120.0)
            / cos_phi1;

    GeodeticPoint::new(lat.to_degrees(), lon.to_degrees())
}
