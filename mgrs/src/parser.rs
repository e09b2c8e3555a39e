//! Parser de références MGRS
//!
//! Grammaire (espaces ignorés, casse indifférente) :
//! `{fuseau 1-2 chiffres}{bande}{2 lettres de carré}{2 à 10 chiffres}`,
//! lettres sans I ni O, nombre de chiffres pair.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::band::LatitudeBand;
use crate::types::{MgrsCoordinate, Precision};
use crate::MgrsError;

fn mgrs_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]{1,2})([C-HJ-NP-X])([A-HJ-NP-Z]{2})([0-9]{2,10})$")
            .expect("MGRS pattern is a valid regex")
    })
}

/// Parse une référence MGRS, avec ou sans espaces
///
/// Aucune récupération partielle : toute entrée hors grammaire est refusée.
pub fn parse_mgrs(input: &str) -> Result<MgrsCoordinate, MgrsError> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if compact.is_empty() {
        return Err(MgrsError::malformed(input, "empty reference"));
    }

    let caps = mgrs_pattern().captures(&compact).ok_or_else(|| {
        MgrsError::malformed(
            input,
            "expected zone, band letter, two square letters and 2 to 10 digits",
        )
    })?;

    let zone: u8 = caps[1]
        .parse()
        .map_err(|_| MgrsError::malformed(input, "invalid zone number"))?;
    if !(1..=60).contains(&zone) {
        return Err(MgrsError::malformed(
            input,
            format!("zone {} outside 1..60", zone),
        ));
    }

    let band = caps[2]
        .chars()
        .next()
        .and_then(LatitudeBand::from_letter)
        .ok_or_else(|| MgrsError::malformed(input, "invalid band letter"))?;

    let mut square = caps[3].chars();
    let (easting_letter, northing_letter) = match (square.next(), square.next()) {
        (Some(e), Some(n)) => (e, n),
        _ => return Err(MgrsError::malformed(input, "missing 100 km square letters")),
    };

    let digits = &caps[4];
    if digits.len() % 2 != 0 {
        return Err(MgrsError::malformed(
            input,
            format!("odd number of digits ({})", digits.len()),
        ));
    }
    let half = digits.len() / 2;
    let precision = Precision::try_from(half as u8)?;

    Ok(MgrsCoordinate {
        zone,
        band,
        easting_letter,
        northing_letter,
        easting_digits: digits[..half].to_string(),
        northing_digits: digits[half..].to_string(),
        precision,
    })
}

impl FromStr for MgrsCoordinate {
    type Err = MgrsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mgrs(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_malformed(input: &str) {
        match parse_mgrs(input) {
            Err(MgrsError::MalformedMgrsString { .. }) => {}
            other => panic!("Expected MalformedMgrsString for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn test_parse_compact() {
        let mgrs = parse_mgrs("56HLH3436850948").unwrap();
        assert_eq!(mgrs.zone, 56);
        assert_eq!(mgrs.band, LatitudeBand::H);
        assert_eq!(mgrs.square_id(), "LH");
        assert_eq!(mgrs.easting_digits, "34368");
        assert_eq!(mgrs.northing_digits, "50948");
        assert_eq!(mgrs.precision.value(), 5);
    }

    #[test]
    fn test_parse_spaced_lowercase() {
        let mgrs = parse_mgrs("  4q fj 1 2 ").unwrap();
        assert_eq!(mgrs.zone, 4);
        assert_eq!(mgrs.band, LatitudeBand::Q);
        assert_eq!(mgrs.square_id(), "FJ");
        assert_eq!(mgrs.easting_digits, "1");
        assert_eq!(mgrs.northing_digits, "2");
        assert_eq!(mgrs.to_string(), "4Q FJ 1 2");
    }

    #[test]
    fn test_from_str() {
        let mgrs: MgrsCoordinate = "31U DQ 48252 11954".parse().unwrap();
        assert_eq!(mgrs.to_string(), "31U DQ 48252 11954");
    }

    #[test]
    fn test_rejects_bad_zone() {
        assert_malformed("99ZAB1234512345");
        assert_malformed("61NAA1234");
        assert_malformed("0NAA1234");
        assert_malformed("123NAA1234");
    }

    #[test]
    fn test_rejects_excluded_letters() {
        assert_malformed("31IAA1234");
        assert_malformed("31OAA1234");
        assert_malformed("31NIA1234");
        assert_malformed("31NAO1234");
        assert_malformed("31AAA1234");
    }

    #[test]
    fn test_rejects_digit_counts() {
        assert_malformed("31NAA");
        assert_malformed("31NAA1");
        assert_malformed("31NAA12345");
        assert_malformed("31NAA123456789012");
    }

    #[test]
    fn test_rejects_garbage() {
        assert_malformed("");
        assert_malformed("   ");
        assert_malformed("31NAA12a4");
        assert_malformed("31N-AA-1234");
        assert_malformed("hello world");
    }
}
