//! Accumulating validation of [`NewVisit`] bundles.
//!
//! Every check runs; the form gets all problems in one pass instead of the
//! first one only.

use super::input::NewVisit;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationIssue {
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    #[error("'{imo}' is not a valid IMO number")]
    InvalidImo { imo: String },

    #[error("Gross tonnage must be greater than zero")]
    ZeroTonnage,

    #[error("Tracking link '{url}' must be an http(s) URL")]
    InvalidTrackingUrl { url: String },
}

pub type VisitValidation = Validation<(), NonEmptyVec<ValidationIssue>>;

/// Whether `imo` is a seven-digit IMO number with a correct check digit.
///
/// The check digit is the last digit of the sum of the first six digits
/// weighted 7 down to 2.
///
/// ```rust
/// use berthguard::visit::is_valid_imo;
///
/// assert!(is_valid_imo("9074729"));
/// assert!(is_valid_imo("IMO 9074729"));
/// assert!(!is_valid_imo("9074728"));
/// ```
pub fn is_valid_imo(imo: &str) -> bool {
    let digits = imo.trim().trim_start_matches("IMO").trim();
    if digits.len() != 7 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let values: Vec<u32> = digits.bytes().map(|b| u32::from(b - b'0')).collect();
    let weighted: u32 = values[..6]
        .iter()
        .zip((2..=7).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();
    weighted % 10 == values[6]
}

fn require(field: &'static str, value: &str) -> VisitValidation {
    if value.trim().is_empty() {
        Validation::fail(ValidationIssue::EmptyField { field })
    } else {
        Validation::success(())
    }
}

fn check(ok: bool, issue: impl FnOnce() -> ValidationIssue) -> VisitValidation {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(issue())
    }
}

impl NewVisit {
    /// Run every check, accumulating all issues.
    pub fn validate(&self) -> VisitValidation {
        let ship = &self.ship;
        let mut checks = vec![
            require("ship.name", &ship.name),
            require("visit.port", &self.visit.port),
            check(is_valid_imo(&ship.imo), || ValidationIssue::InvalidImo {
                imo: ship.imo.clone(),
            }),
            check(ship.gross_tonnage != Some(0), || ValidationIssue::ZeroTonnage),
        ];

        if let Some(url) = &ship.tracking_url {
            let is_http = url.starts_with("https://") || url.starts_with("http://");
            checks.push(check(is_http, || ValidationIssue::InvalidTrackingUrl {
                url: url.clone(),
            }));
        }

        if let Some(pilot) = &self.pilot {
            checks.push(require("pilot.name", &pilot.name));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) as a plain list of issues.
    pub fn issues(&self) -> Vec<ValidationIssue> {
        match self.validate() {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visit::{PilotInput, ShipInput, VisitInput};
    use chrono::Utc;

    fn valid() -> NewVisit {
        NewVisit {
            ship: ShipInput {
                name: "Nordic Star".to_string(),
                imo: "9074729".to_string(),
                gross_tonnage: Some(23_500),
                tracking_url: Some("https://www.marinetraffic.com/en/ais/details/ships/imo:9074729".to_string()),
                notes: None,
            },
            visit: VisitInput {
                eta: Utc::now(),
                port: "Rotterdam".to_string(),
                notes: Some("Berth 12".to_string()),
                source: Some("agent".to_string()),
            },
            pilot: Some(PilotInput {
                name: "J. de Vries".to_string(),
                boarding_at: None,
            }),
        }
    }

    #[test]
    fn valid_bundle_passes() {
        assert!(valid().validate().is_success());
        assert!(valid().issues().is_empty());
    }

    #[test]
    fn imo_check_digit() {
        assert!(is_valid_imo("9176187"));
        assert!(!is_valid_imo("9176188"));
        assert!(!is_valid_imo("917618"));
        assert!(!is_valid_imo("91761a7"));
        assert!(!is_valid_imo(""));
    }

    #[test]
    fn all_issues_are_reported_together() {
        let mut visit = valid();
        visit.ship.name = "  ".to_string();
        visit.ship.imo = "1234568".to_string();
        visit.ship.gross_tonnage = Some(0);
        visit.ship.tracking_url = Some("ftp://tracker".to_string());
        visit.visit.port = String::new();
        visit.pilot = Some(PilotInput {
            name: String::new(),
            boarding_at: None,
        });

        let issues = visit.issues();
        assert_eq!(issues.len(), 6);
        assert!(issues.contains(&ValidationIssue::EmptyField { field: "ship.name" }));
        assert!(issues.contains(&ValidationIssue::EmptyField { field: "visit.port" }));
        assert!(issues.contains(&ValidationIssue::EmptyField { field: "pilot.name" }));
        assert!(issues.contains(&ValidationIssue::ZeroTonnage));
        assert!(issues
            .iter()
            .any(|i| matches!(i, ValidationIssue::InvalidImo { .. })));
        assert!(issues
            .iter()
            .any(|i| matches!(i, ValidationIssue::InvalidTrackingUrl { .. })));
    }

    #[test]
    fn optional_parts_are_optional() {
        let mut visit = valid();
        visit.ship.tracking_url = None;
        visit.ship.gross_tonnage = None;
        visit.pilot = None;

        assert!(visit.validate().is_success());
    }
}
