//! A single navigation attempt and its phase trail.

use crate::core::{DeactivationPhase, FormQueryError, PhaseError, StateHistory, StateTransition};
use crate::dialog::DialogOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One attempt to leave a form screen.
///
/// Created in [`DeactivationPhase::Idle`] when navigation is attempted and
/// discarded once it reaches `Allowed` or `Denied`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeactivationRequest {
    id: Uuid,
    target: String,
    created_at: DateTime<Utc>,
    phase: DeactivationPhase,
    trail: StateHistory<DeactivationPhase>,
    form_error: Option<FormFailure>,
    outcome: Option<DialogOutcome>,
}

/// Why the form could not answer, kept for diagnostics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormFailure {
    pub reason: String,
}

impl DeactivationRequest {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            target: target.into(),
            created_at: Utc::now(),
            phase: DeactivationPhase::Idle,
            trail: StateHistory::new(),
            form_error: None,
            outcome: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Route navigation proceeds to if allowed.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn phase(&self) -> DeactivationPhase {
        self.phase
    }

    pub fn trail(&self) -> &StateHistory<DeactivationPhase> {
        &self.trail
    }

    pub fn form_error(&self) -> Option<&FormFailure> {
        self.form_error.as_ref()
    }

    /// How the prompt closed, if one was shown or joined.
    pub fn outcome(&self) -> Option<DialogOutcome> {
        self.outcome
    }

    pub fn is_resolved(&self) -> bool {
        matches!(
            self.phase,
            DeactivationPhase::Allowed | DeactivationPhase::Denied
        )
    }

    pub fn is_allowed(&self) -> bool {
        self.phase == DeactivationPhase::Allowed
    }

    /// Move to `next`, recording the change in the trail.
    pub fn advance(&mut self, next: DeactivationPhase) -> Result<(), PhaseError> {
        if !self.phase.can_advance_to(next) {
            return Err(PhaseError {
                from: self.phase,
                to: next,
            });
        }
        self.trail = self.trail.record(StateTransition::now(self.phase, next));
        self.phase = next;
        Ok(())
    }

    /// Advance along an edge the guard knows to be legal.
    pub(crate) fn enter(&mut self, next: DeactivationPhase) {
        if let Err(err) = self.advance(next) {
            tracing::error!(request_id = %self.id, %err, "Deactivation request left inconsistent");
        }
    }

    pub(crate) fn record_form_error(&mut self, err: &FormQueryError) {
        self.form_error = Some(FormFailure {
            reason: err.to_string(),
        });
    }

    pub(crate) fn record_outcome(&mut self, outcome: DialogOutcome) {
        self.outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_is_idle() {
        let request = DeactivationRequest::new("/visits");

        assert_eq!(request.phase(), DeactivationPhase::Idle);
        assert_eq!(request.target(), "/visits");
        assert!(request.trail().is_empty());
        assert!(!request.is_resolved());
        assert!(request.outcome().is_none());
    }

    #[test]
    fn advance_records_trail() {
        let mut request = DeactivationRequest::new("/trips");
        request.advance(DeactivationPhase::Queried).unwrap();
        request.advance(DeactivationPhase::Allowed).unwrap();

        assert!(request.is_allowed());
        assert_eq!(
            request.trail().get_path(),
            vec![
                &DeactivationPhase::Idle,
                &DeactivationPhase::Queried,
                &DeactivationPhase::Allowed,
            ]
        );
    }

    #[test]
    fn illegal_advance_is_rejected_and_ignored() {
        let mut request = DeactivationRequest::new("/pilots");

        let err = request.advance(DeactivationPhase::Denied).unwrap_err();
        assert_eq!(err.from, DeactivationPhase::Idle);
        assert_eq!(err.to, DeactivationPhase::Denied);
        assert_eq!(request.phase(), DeactivationPhase::Idle);
        assert!(request.trail().is_empty());
    }

    #[test]
    fn resolved_request_cannot_move_again() {
        let mut request = DeactivationRequest::new("/");
        request.advance(DeactivationPhase::Queried).unwrap();
        request
            .advance(DeactivationPhase::AwaitingConfirmation)
            .unwrap();
        request.advance(DeactivationPhase::Denied).unwrap();

        assert!(request.is_resolved());
        assert!(!request.is_allowed());
        assert!(request.advance(DeactivationPhase::Allowed).is_err());
    }

    #[test]
    fn requests_have_distinct_ids() {
        let a = DeactivationRequest::new("/a");
        let b = DeactivationRequest::new("/a");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn form_error_is_kept_as_text() {
        let mut request = DeactivationRequest::new("/calc");
        request.record_form_error(&FormQueryError::Unavailable);
        assert_eq!(
            request.form_error().map(|f| f.reason.as_str()),
            Some("No form is mounted for this route")
        );
    }
}
