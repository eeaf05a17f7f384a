//! Guard builder errors.

use crate::dialog::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Confirmation dialog not specified. Call .dialog(dialog) before .build()")]
    MissingDialog,

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
