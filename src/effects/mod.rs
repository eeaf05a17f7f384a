//! The guard's imperative shell: opening prompts and awaiting them.
//!
//! - **Guard**: runs one deactivation request per navigation attempt
//! - **Request**: the attempt itself and its phase trail
//! - **Navigator**: a route holder that only moves when the guard allows
//!
//! The only suspension point is the prompt. Nothing here holds a lock across
//! an `.await`.

mod guard;
mod navigator;
mod request;

pub use guard::{DeactivationGuard, GuardDecision, PendingConfirmation};
pub use navigator::{NavigationOutcome, Navigator, Route};
pub use request::{DeactivationRequest, FormFailure};
