//! The `State` trait shared by request phases and navigation routes.
//!
//! Anything that can appear in a [`StateHistory`](super::StateHistory) trail
//! implements this trait: the phases a deactivation request moves through,
//! and the routes the navigator visits.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A value that can be recorded in a history trail.
///
/// All methods are pure. `Serialize` + `Deserialize` are required so trails
/// can be logged and snapshotted as JSON.
///
/// # Example
///
/// ```rust
/// use berthguard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum EditorState {
///     Clean,
///     Dirty,
///     Closed,
/// }
///
/// impl State for EditorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Clean => "Clean",
///             Self::Dirty => "Dirty",
///             Self::Closed => "Closed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Closed)
///     }
/// }
///
/// assert!(EditorState::Closed.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and trails.
    fn name(&self) -> &str;

    /// Terminal states accept no further transitions.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether this state represents a refusal or failure.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
