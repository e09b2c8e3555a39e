//! # mgrs-convert
//!
//! Conversion WGS84 ↔ MGRS en ligne de commande, point par point ou par lot.
//!
//! ## Features
//!
//! - Conversion d'un point dans les deux sens, avec détail des calculs
//! - Conversion par lot en parallèle avec rapport d'erreurs
//! - Sortie texte, JSON ou GeoJSON
//! - Configuration par fichier JSON et variables d'environnement
//!
//! ## Usage CLI
//!
//! ```bash
//! mgrs-convert to-mgrs --lat -33.8688 --lon 151.2093 --precision 5
//! mgrs-convert to-latlon "56H LH 34368 50948" --explain
//! mgrs-convert batch --input points.csv --direction to-mgrs --format geojson --output points.geojson
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod export;
pub mod report;

pub use batch::{run_batch, BatchRecord, Direction};
pub use config::{Config, OutputFormat};
pub use report::{BatchReport, BatchStatus};
