//! Confirmation prompts.
//!
//! The guard never talks to a UI toolkit directly. It is handed a
//! [`ConfirmDialog`] and receives a [`DialogHandle`] that resolves once.

mod config;
mod handle;
mod scripted;

pub use config::{ConfigError, DialogConfig, GuardConfig};
pub use handle::{normalize, ConfirmationChoice, DialogHandle, DialogOutcome, DialogResolver};
pub use scripted::ScriptedDialog;

use std::sync::Arc;

/// Opens modal confirmation prompts.
pub trait ConfirmDialog: Send + Sync {
    /// Show a prompt configured by `config` and return its pending result.
    fn open(&self, config: DialogConfig) -> DialogHandle;
}

impl<D: ConfirmDialog + ?Sized> ConfirmDialog for Arc<D> {
    fn open(&self, config: DialogConfig) -> DialogHandle {
        (**self).open(config)
    }
}

impl<D: ConfirmDialog + ?Sized> ConfirmDialog for &D {
    fn open(&self, config: DialogConfig) -> DialogHandle {
        (**self).open(config)
    }
}
