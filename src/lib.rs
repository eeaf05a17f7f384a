//! Berthguard: unsaved-changes navigation guard for a vessel port-visit client
//!
//! The guard sits between the router and any screen holding a form. Before
//! navigation leaves the screen it asks the form whether it can be discarded;
//! if not, it opens one modal prompt and waits for the user's choice. Every
//! ambiguous outcome keeps the user on the page.
//!
//! # Modules
//!
//! - **core**: the form capability, request phases and history trails (pure)
//! - **dialog**: prompt configuration and one-shot prompt results
//! - **effects**: the guard, its requests, and a guarded navigator
//! - **builder**: guard builder and the `state_enum!` macro
//! - **history**: bounded, newest-first log of distance/ETA calculations
//! - **geo**: coordinate formatting, great-circle distance and ETA
//! - **visit**: the new-visit input bundle and its validation
//!
//! # Example
//!
//! ```rust
//! use berthguard::core::FormGuard;
//! use berthguard::dialog::ScriptedDialog;
//! use berthguard::effects::{DeactivationGuard, Navigator};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let dialog = ScriptedDialog::answering([Some(false)]);
//! let mut navigator = Navigator::new(DeactivationGuard::new(dialog), "/visits/new");
//!
//! let unsaved = FormGuard::new(|| false);
//! let outcome = navigator.navigate("/ships", Some(&unsaved)).await;
//!
//! assert!(!outcome.moved());
//! assert_eq!(navigator.current().as_str(), "/visits/new");
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod dialog;
pub mod effects;
pub mod geo;
pub mod history;
pub mod visit;

// Re-export commonly used types
pub use crate::core::{
    CanDeactivate, DeactivationPhase, FormGuard, State, StateHistory, StateTransition,
};
pub use crate::dialog::{ConfirmDialog, DialogHandle, GuardConfig};
pub use crate::effects::{DeactivationGuard, DeactivationRequest, GuardDecision, Navigator};
