//! Builders and macros for assembling guards.

pub mod error;
pub mod guard;
pub mod macros;

pub use error::BuildError;
pub use guard::DeactivationGuardBuilder;
