//! Rapport de conversion par lot
//!
//! Les lignes en erreur n'interrompent pas le lot : elles sont collectées
//! ici avec leur numéro et le message d'erreur.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

/// Statut global du lot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BatchStatus {
    /// Toutes les lignes converties
    Success,
    /// Certaines lignes en erreur
    PartialSuccess,
    /// Aucune ligne convertie
    Failed,
}

/// Ligne en échec
#[derive(Debug, Clone, Serialize)]
pub struct LineFailure {
    /// Numéro de ligne (à partir de 1)
    pub line: usize,
    /// Contenu de la ligne
    pub input: String,
    /// Message d'erreur
    pub message: String,
}

/// Rapport complet d'un lot
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Sens de conversion
    pub direction: String,
    /// Durée du lot
    pub duration_secs: f64,
    /// Statut global
    pub status: BatchStatus,
    /// Lignes lues (hors lignes vides et commentaires)
    pub lines_read: usize,
    /// Lignes converties
    pub converted: usize,
    /// Lignes en échec
    pub failed: usize,
    /// Détail des échecs
    pub errors: Vec<LineFailure>,
}

impl BatchReport {
    /// Crée un rapport vide pour un sens de conversion
    pub fn new(direction: &str) -> Self {
        Self {
            direction: direction.to_string(),
            duration_secs: 0.0,
            status: BatchStatus::Success,
            lines_read: 0,
            converted: 0,
            failed: 0,
            errors: Vec::new(),
        }
    }

    /// Enregistre une ligne convertie
    pub fn record_success(&mut self) {
        self.lines_read += 1;
        self.converted += 1;
    }

    /// Enregistre une ligne en échec
    pub fn record_failure(&mut self, line: usize, input: &str, message: &str) {
        self.lines_read += 1;
        self.failed += 1;
        self.errors.push(LineFailure {
            line,
            input: input.to_string(),
            message: message.to_string(),
        });
    }

    /// Définit la durée du lot
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_secs = duration.as_secs_f64();
    }

    /// Détermine le statut final
    pub fn finalize(&mut self) {
        self.status = if self.failed == 0 {
            BatchStatus::Success
        } else if self.converted > 0 {
            BatchStatus::PartialSuccess
        } else {
            BatchStatus::Failed
        };
    }

    /// Affiche le rapport sur la sortie d'erreur
    ///
    /// La sortie standard reste réservée aux résultats.
    pub fn display(&self) {
        eprintln!("\n{}", "=".repeat(60));
        eprintln!("BATCH REPORT - {}", self.direction);
        eprintln!("{}", "=".repeat(60));

        eprintln!("\nStatus: {:?}", self.status);
        eprintln!("Duration: {:.2}s", self.duration_secs);
        eprintln!(
            "Lines: {} read, {} converted, {} failed",
            self.lines_read, self.converted, self.failed
        );

        if !self.errors.is_empty() {
            eprintln!("\n--- ERRORS ({}) ---", self.errors.len());
            for e in self.errors.iter().take(20) {
                eprintln!("  [line {}] {}: {}", e.line, e.input, e.message);
            }
            if self.errors.len() > 20 {
                eprintln!("  ... and {} more", self.errors.len() - 20);
            }
        }

        eprintln!("\n{}", "=".repeat(60));
    }

    /// Sauvegarde le rapport en JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Résumé sur une ligne
    pub fn summary(&self) -> String {
        format!(
            "{}: {} converted, {} failed",
            self.direction, self.converted, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report() {
        let report = BatchReport::new("to-mgrs");
        assert_eq!(report.status, BatchStatus::Success);
        assert_eq!(report.lines_read, 0);
    }

    #[test]
    fn test_finalize_success() {
        let mut report = BatchReport::new("to-mgrs");
        report.record_success();
        report.finalize();
        assert_eq!(report.status, BatchStatus::Success);
    }

    #[test]
    fn test_finalize_partial_success() {
        let mut report = BatchReport::new("to-mgrs");
        report.record_success();
        report.record_failure(2, "95,0", "out of range");
        report.finalize();

        assert_eq!(report.status, BatchStatus::PartialSuccess);
        assert_eq!(report.lines_read, 2);
        assert_eq!(report.errors[0].line, 2);
    }

    #[test]
    fn test_finalize_failed() {
        let mut report = BatchReport::new("to-latlon");
        report.record_failure(1, "garbage", "malformed");
        report.finalize();
        assert_eq!(report.status, BatchStatus::Failed);
    }

    #[test]
    fn test_summary() {
        let mut report = BatchReport::new("to-latlon");
        report.record_success();
        report.record_success();
        assert_eq!(report.summary(), "to-latlon: 2 converted, 0 failed");
    }

    #[test]
    fn test_save_to_file() {
        let mut report = BatchReport::new("to-mgrs");
        report.record_failure(3, "x", "bad");
        report.finalize();

        let path = std::env::temp_dir().join("mgrs_convert_report_test.json");
        report.save_to_file(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains(r#""status": "Failed""#));
        assert!(content.contains(r#""line": 3"#));

        std::fs::remove_file(path).ok();
    }
}
