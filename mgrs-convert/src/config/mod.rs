//! Configuration de l'outil
//!
//! Priorité croissante : valeurs par défaut, fichier JSON (`--config`),
//! variables d'environnement (`MGRS_*`), options de la ligne de commande.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Format de sortie
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Une ligne par résultat (défaut)
    #[default]
    Text,
    /// Tableau JSON des résultats
    Json,
    /// FeatureCollection GeoJSON (EPSG:4326)
    Geojson,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "geojson" => Ok(OutputFormat::Geojson),
            _ => Err(format!("Invalid output format: {}. Use: text, json, geojson", s)),
        }
    }
}

/// Configuration principale
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Précision MGRS par défaut (1 = 10 km ... 5 = 1 m)
    pub default_precision: u8,

    /// Format de sortie par défaut
    pub output_format: OutputFormat,

    /// Nombre de décimales pour les latitudes/longitudes affichées
    pub coordinate_decimals: usize,

    /// Afficher le détail des calculs
    pub explain: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_precision: 5,
            output_format: OutputFormat::Text,
            coordinate_decimals: 6,
            explain: false,
        }
    }
}

impl Config {
    /// Charge une configuration depuis un fichier JSON
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse config JSON")
    }

    /// Résout la configuration complète : fichier optionnel puis environnement
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        let config = config.with_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Applique les variables `MGRS_PRECISION`, `MGRS_OUTPUT_FORMAT`, `MGRS_DECIMALS`
    ///
    /// Les valeurs illisibles sont ignorées.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(p) = lookup("MGRS_PRECISION").and_then(|s| s.trim().parse().ok()) {
            self.default_precision = p;
        }
        if let Some(f) = lookup("MGRS_OUTPUT_FORMAT").and_then(|s| s.parse().ok()) {
            self.output_format = f;
        }
        if let Some(d) = lookup("MGRS_DECIMALS").and_then(|s| s.trim().parse().ok()) {
            self.coordinate_decimals = d;
        }
        self
    }

    /// Vérifie la cohérence des valeurs
    pub fn validate(&self) -> Result<()> {
        mgrs::Precision::try_from(self.default_precision)
            .context("Invalid default_precision in configuration")?;
        if self.coordinate_decimals > 15 {
            anyhow::bail!(
                "coordinate_decimals must be at most 15, got {}",
                self.coordinate_decimals
            );
        }
        Ok(())
    }

    /// Précision effective : option CLI sinon valeur par défaut
    pub fn precision(&self, cli_value: Option<u8>) -> u8 {
        cli_value.unwrap_or(self.default_precision)
    }
}
