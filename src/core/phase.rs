//! Phases of a single deactivation request.

use thiserror::Error;

crate::state_enum! {
    /// Where a deactivation request currently stands.
    ///
    /// `Idle → Queried → {Allowed | AwaitingConfirmation} → {Allowed | Denied}`
    #[derive(Copy, Eq, Hash)]
    pub enum DeactivationPhase {
        /// Created, form not yet asked.
        Idle,
        /// The form has been asked whether it may be left.
        Queried,
        /// A confirmation prompt is open (or joined) and unresolved.
        AwaitingConfirmation,
        /// Navigation may proceed.
        Allowed,
        /// Navigation must not happen.
        Denied,
    }
    final: [Allowed, Denied]
}

/// An attempt to move a request to a phase its current phase cannot reach.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Illegal phase change from '{from:?}' to '{to:?}'")]
pub struct PhaseError {
    pub from: DeactivationPhase,
    pub to: DeactivationPhase,
}

impl DeactivationPhase {
    /// Whether `next` is a legal successor of `self`.
    pub fn can_advance_to(self, next: DeactivationPhase) -> bool {
        use DeactivationPhase::*;

        matches!(
            (self, next),
            (Idle, Queried)
                | (Queried, Allowed)
                | (Queried, AwaitingConfirmation)
                | (AwaitingConfirmation, Allowed)
                | (AwaitingConfirmation, Denied)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn terminal_phases_are_final() {
        assert!(DeactivationPhase::Allowed.is_final());
        assert!(DeactivationPhase::Denied.is_final());
        assert!(!DeactivationPhase::AwaitingConfirmation.is_final());
    }

    #[test]
    fn staying_on_page_is_not_an_error() {
        assert!(DeactivationPhase::ALL.iter().all(|phase| !phase.is_error()));
    }

    #[test]
    fn only_documented_edges_are_legal() {
        use DeactivationPhase::*;

        let legal = [
            (Idle, Queried),
            (Queried, Allowed),
            (Queried, AwaitingConfirmation),
            (AwaitingConfirmation, Allowed),
            (AwaitingConfirmation, Denied),
        ];

        for &from in DeactivationPhase::ALL {
            for &to in DeactivationPhase::ALL {
                assert_eq!(
                    from.can_advance_to(to),
                    legal.contains(&(from, to)),
                    "{from:?} -> {to:?}"
                );
            }
        }
    }

    #[test]
    fn queried_cannot_be_denied_directly() {
        assert!(!DeactivationPhase::Queried.can_advance_to(DeactivationPhase::Denied));
    }

    #[test]
    fn final_phases_have_no_successors() {
        for &phase in DeactivationPhase::ALL {
            if phase.is_final() {
                assert!(DeactivationPhase::ALL
                    .iter()
                    .all(|&next| !phase.can_advance_to(next)));
            }
        }
    }
}
