//! # mgrs
//!
//! Conversion entre coordonnées géographiques WGS84 et références MGRS
//! (Military Grid Reference System).
//!
//! ## Features
//!
//! - Projection UTM directe et inverse (séries de Snyder)
//! - Bandes de latitude C à X (-80° à 84°)
//! - Carrés de 100 km, précision de 1 (10 km) à 5 (1 m)
//! - Recalage du northing dans la bande pour la conversion inverse
//! - Fonctions pures, sans état : utilisables depuis plusieurs threads
//!
//! Hors périmètre : exceptions de fuseaux Norvège/Svalbard, zones polaires
//! UPS, datums autres que WGS84.
//!
//! ## Usage
//!
//! ```rust
//! let mgrs = mgrs::lat_lon_to_mgrs(-33.8688, 151.2093, 5)?;
//! assert_eq!(mgrs, "56H LH 34368 50948");
//!
//! let (lat, lon) = mgrs::mgrs_to_lat_lon(&mgrs)?;
//! assert!((lat - -33.8688).abs() < 1e-4);
//! assert!((lon - 151.2093).abs() < 1e-4);
//! # Ok::<(), mgrs::MgrsError>(())
//! ```

pub mod band;
pub mod convert;
pub mod ellipsoid;
pub mod error;
pub mod format;
pub mod grid;
pub mod parser;
pub mod types;
pub mod utm;

pub use band::LatitudeBand;
pub use convert::{
    explain_forward, explain_inverse, lat_lon_to_mgrs, lat_lon_to_mgrs_coordinate,
    mgrs_to_lat_lon, mgrs_to_utm, Breakdown,
};
pub use error::MgrsError;
pub use parser::parse_mgrs;
pub use types::{GeodeticPoint, Hemisphere, MgrsCoordinate, Precision, UtmCoordinate};
