//! The form capability consulted before leaving a screen.
//!
//! Any screen that holds editable state implements [`CanDeactivate`]. The
//! predicate is pure and synchronous: it answers "can this form be discarded
//! right now?" and never opens UI itself.

use std::panic::{catch_unwind, AssertUnwindSafe};
use thiserror::Error;

/// Why a form could not answer the "may I leave?" question.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormQueryError {
    #[error("No form is mounted for this route")]
    Unavailable,

    #[error("Form predicate failed: {0}")]
    Failed(String),

    #[error("Form predicate panicked")]
    Panicked,
}

/// Capability exposed by every form-bearing screen.
///
/// # Example
///
/// ```rust
/// use berthguard::core::{CanDeactivate, FormQueryError};
///
/// struct ArrivalForm {
///     dirty: bool,
/// }
///
/// impl CanDeactivate for ArrivalForm {
///     fn can_deactivate(&self) -> Result<bool, FormQueryError> {
///         Ok(!self.dirty)
///     }
/// }
///
/// assert_eq!(ArrivalForm { dirty: false }.can_deactivate(), Ok(true));
/// ```
pub trait CanDeactivate: Send + Sync {
    /// `Ok(true)` when there are no unsaved changes.
    fn can_deactivate(&self) -> Result<bool, FormQueryError>;

    /// Stable identity of this form instance, used to share one open prompt
    /// between overlapping navigation attempts. `None` opts out.
    fn form_key(&self) -> Option<&str> {
        None
    }
}

/// Adapts a plain predicate closure into a [`CanDeactivate`] form.
///
/// ```rust
/// use berthguard::core::{CanDeactivate, FormGuard};
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let dirty = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&dirty);
/// let form = FormGuard::new(move || !flag.load(Ordering::SeqCst));
///
/// assert_eq!(form.can_deactivate(), Ok(true));
/// dirty.store(true, Ordering::SeqCst);
/// assert_eq!(form.can_deactivate(), Ok(false));
/// ```
pub struct FormGuard {
    predicate: Box<dyn Fn() -> bool + Send + Sync>,
    key: Option<String>,
}

impl FormGuard {
    /// Create a form from a pure predicate (`true` = safe to leave).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        FormGuard {
            predicate: Box::new(predicate),
            key: None,
        }
    }

    /// Attach an instance key so overlapping requests share a prompt.
    pub fn keyed(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

impl CanDeactivate for FormGuard {
    fn can_deactivate(&self) -> Result<bool, FormQueryError> {
        Ok((self.predicate)())
    }

    fn form_key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

/// Ask a form whether it may be left, turning every failure mode into an error.
///
/// A missing form yields [`FormQueryError::Unavailable`]; a predicate that
/// panics yields [`FormQueryError::Panicked`].
pub fn query_form(form: Option<&dyn CanDeactivate>) -> Result<bool, FormQueryError> {
    let form = form.ok_or(FormQueryError::Unavailable)?;
    catch_unwind(AssertUnwindSafe(|| form.can_deactivate()))
        .unwrap_or(Err(FormQueryError::Panicked))
}
