//! Builder for [`DeactivationGuard`].

use crate::builder::error::BuildError;
use crate::dialog::{ConfirmDialog, GuardConfig};
use crate::effects::DeactivationGuard;

/// Fluent construction of a guard with an explicit dialog collaborator.
///
/// ```rust
/// use berthguard::builder::DeactivationGuardBuilder;
/// use berthguard::dialog::ScriptedDialog;
///
/// let guard = DeactivationGuardBuilder::new()
///     .dialog(ScriptedDialog::default())
///     .title("Discard visit?")
///     .build()
///     .unwrap();
///
/// assert_eq!(guard.config().title, "Discard visit?");
/// ```
pub struct DeactivationGuardBuilder<D> {
    dialog: Option<D>,
    config: GuardConfig,
}

impl<D: ConfirmDialog> DeactivationGuardBuilder<D> {
    pub fn new() -> Self {
        Self {
            dialog: None,
            config: GuardConfig::default(),
        }
    }

    /// Set the dialog that opens prompts (required).
    pub fn dialog(mut self, dialog: D) -> Self {
        self.dialog = Some(dialog);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GuardConfig) -> Self {
        self.config = config;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.config.message = message.into();
        self
    }

    pub fn dedupe_prompts(mut self, enabled: bool) -> Self {
        self.config.dedupe_prompts = enabled;
        self
    }

    pub fn build(self) -> Result<DeactivationGuard<D>, BuildError> {
        let dialog = self.dialog.ok_or(BuildError::MissingDialog)?;
        Ok(DeactivationGuard::with_config(dialog, self.config)?)
    }
}

impl<D: ConfirmDialog> Default for DeactivationGuardBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}
