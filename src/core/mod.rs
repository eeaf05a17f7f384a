//! Pure building blocks of the deactivation guard.
//!
//! - The form capability (`CanDeactivate`) and its failure modes
//! - Request phases and their legal successors
//! - Immutable history trails
//!
//! Nothing in this module opens UI or awaits anything.

mod guard;
mod history;
mod phase;
mod state;

pub use guard::{query_form, CanDeactivate, FormGuard, FormQueryError};
pub use history::{StateHistory, StateTransition};
pub use phase::{DeactivationPhase, PhaseError};
pub use state::State;
