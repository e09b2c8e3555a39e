//! Constantes de l'ellipsoïde WGS84 et paramètres UTM

/// Ellipsoïde WGS84
pub struct WGS84;

impl WGS84 {
    /// Demi-grand axe (rayon équatorial) en mètres
    pub const A: f64 = 6378137.0;

    /// Aplatissement
    pub const F: f64 = 1.0 / 298.257223563;

    /// Première excentricité au carré
    pub const E2: f64 = Self::F * (2.0 - Self::F);

    /// e⁴, utilisé par les séries de Snyder
    pub const E4: f64 = Self::E2 * Self::E2;

    /// e⁶
    pub const E6: f64 = Self::E4 * Self::E2;

    /// Deuxième excentricité au carré
    pub const EP2: f64 = Self::E2 / (1.0 - Self::E2);
}

/// Paramètres de la projection UTM
pub struct Utm;

impl Utm {
    /// Facteur d'échelle sur le méridien central
    pub const K0: f64 = 0.9996;

    /// False easting (origine à 500 km à l'ouest du méridien central)
    pub const FALSE_EASTING: f64 = 500_000.0;

    /// False northing appliqué dans l'hémisphère sud
    pub const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

    /// Largeur d'un fuseau en degrés
    pub const ZONE_WIDTH: f64 = 6.0;
}
