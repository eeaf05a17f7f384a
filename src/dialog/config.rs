//! Prompt texts and guard configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a [`GuardConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed guard configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Guard configuration field '{0}' must not be empty")]
    EmptyField(&'static str),
}

/// Options handed to a [`ConfirmDialog`](super::ConfirmDialog) when it opens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DialogConfig {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    /// Blocks interaction with the page underneath.
    pub modal: bool,
    /// Backdrop clicks and escape do not close the prompt.
    pub disable_close: bool,
}

/// Guard configuration.
///
/// Every field has a default, so a partial JSON document only overrides
/// what it names.
///
/// ```rust
/// use berthguard::dialog::GuardConfig;
///
/// let config = GuardConfig::from_json(r#"{ "confirm_text": "Discard" }"#).unwrap();
/// assert_eq!(config.confirm_text, "Discard");
/// assert_eq!(config.title, "Unsaved Changes");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    /// Share one open prompt between overlapping requests for a keyed form.
    pub dedupe_prompts: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            title: "Unsaved Changes".to_string(),
            message: "You have unsaved changes. Are you sure you want to leave this page?"
                .to_string(),
            confirm_text: "Leave Anyway".to_string(),
            cancel_text: "Stay on Page".to_string(),
            dedupe_prompts: true,
        }
    }
}

impl GuardConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GuardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would render an unusable prompt.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("title", &self.title),
            ("message", &self.message),
            ("confirm_text", &self.confirm_text),
            ("cancel_text", &self.cancel_text),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(ConfigError::EmptyField(*name)),
            None => Ok(()),
        }
    }

    /// The prompt the guard opens on the unsaved-changes path.
    pub fn dialog(&self) -> DialogConfig {
        DialogConfig {
            title: self.title.clone(),
            message: self.message.clone(),
            confirm_text: self.confirm_text.clone(),
            cancel_text: self.cancel_text.clone(),
            modal: true,
            disable_close: true,
        }
    }
}
