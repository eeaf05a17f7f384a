//! Visit creation boundary.
//!
//! Creating the ship, visit and inbound trip documents belongs to the
//! document store behind [`VisitCreator`]. This module only defines the
//! input bundle, validates it, and names the contract.

mod input;
mod validation;

pub use input::{NewVisit, PilotInput, ShipInput, VisitInput};
pub use validation::{is_valid_imo, ValidationIssue, VisitValidation};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum VisitError {
    #[error("Visit input has {} validation issue(s)", .0.len())]
    Invalid(Vec<ValidationIssue>),

    #[error("Visit store failed: {0}")]
    Store(String),
}

/// Identifiers of the records a successful creation produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatedVisit {
    pub ship_id: Uuid,
    pub visit_id: Uuid,
    /// Present when an inbound trip was created alongside the visit.
    pub trip_id: Option<Uuid>,
}

/// Persists a validated [`NewVisit`] as ship, visit and inbound-trip records.
#[async_trait]
pub trait VisitCreator: Send + Sync {
    async fn create(&self, visit: NewVisit) -> Result<CreatedVisit, VisitError>;
}

impl NewVisit {
    /// Validate, then hand the bundle to `creator`.
    pub async fn submit<C>(self, creator: &C) -> Result<CreatedVisit, VisitError>
    where
        C: VisitCreator + ?Sized,
    {
        let issues = self.issues();
        if !issues.is_empty() {
            tracing::debug!(issues = issues.len(), "Rejected visit input");
            return Err(VisitError::Invalid(issues));
        }
        let created = creator.create(self).await?;
        tracing::info!(
            ship_id = %created.ship_id,
            visit_id = %created.visit_id,
            with_trip = created.trip_id.is_some(),
            "Visit created"
        );
        Ok(created)
    }
}
