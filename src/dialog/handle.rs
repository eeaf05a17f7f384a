//! One-shot prompt results and their normalization.
//!
//! A prompt closes exactly once. Its raw result is an optional boolean:
//! `Some(true)` for the confirm action, `Some(false)` for the cancel action,
//! and `None` when it closed without an explicit choice. The guard only ever
//! treats `Some(true)` as permission to leave.

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

/// How a prompt closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogOutcome {
    Confirmed,
    Cancelled,
    /// Closed without an explicit choice.
    Dismissed,
}

/// The user's decision for one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmationChoice {
    /// Discard changes and navigate.
    Leave,
    Stay,
}

impl DialogOutcome {
    pub fn from_result(result: Option<bool>) -> Self {
        match result {
            Some(true) => Self::Confirmed,
            Some(false) => Self::Cancelled,
            None => Self::Dismissed,
        }
    }

    pub fn is_conclusive(self) -> bool {
        !matches!(self, Self::Dismissed)
    }

    /// Anything but an explicit confirm means stay.
    pub fn choice(self) -> ConfirmationChoice {
        match self {
            Self::Confirmed => ConfirmationChoice::Leave,
            Self::Cancelled | Self::Dismissed => ConfirmationChoice::Stay,
        }
    }
}

impl ConfirmationChoice {
    pub fn is_leave(self) -> bool {
        matches!(self, Self::Leave)
    }
}

impl From<ConfirmationChoice> for bool {
    fn from(choice: ConfirmationChoice) -> bool {
        choice.is_leave()
    }
}

/// Collapse a raw prompt result to the navigation decision.
///
/// ```rust
/// use berthguard::dialog::normalize;
///
/// assert!(normalize(Some(true)));
/// assert!(!normalize(Some(false)));
/// assert!(!normalize(None));
/// ```
pub fn normalize(result: Option<bool>) -> bool {
    DialogOutcome::from_result(result).choice().is_leave()
}

/// Receiving end of an open prompt.
///
/// Awaiting [`closed`](Self::closed) yields the prompt's result once. If the
/// resolving side is dropped without answering, the result is `None`.
#[derive(Debug)]
pub struct DialogHandle {
    rx: oneshot::Receiver<Option<bool>>,
}

/// Resolving end of an open prompt, held by the dialog implementation.
#[derive(Debug)]
pub struct DialogResolver {
    tx: oneshot::Sender<Option<bool>>,
}

impl DialogHandle {
    /// A connected resolver/handle pair.
    pub fn channel() -> (DialogResolver, DialogHandle) {
        let (tx, rx) = oneshot::channel();
        (DialogResolver { tx }, DialogHandle { rx })
    }

    /// A handle that is already closed with `result`.
    pub fn resolved(result: Option<bool>) -> Self {
        let (resolver, handle) = Self::channel();
        resolver.resolve(result);
        handle
    }

    /// Wait for the prompt to close.
    pub async fn closed(self) -> Option<bool> {
        self.rx.await.ok().flatten()
    }
}

impl DialogResolver {
    pub fn confirm(self) {
        self.resolve(Some(true));
    }

    pub fn cancel(self) {
        self.resolve(Some(false));
    }

    /// Close without an explicit choice.
    pub fn dismiss(self) {
        self.resolve(None);
    }

    pub fn resolve(self, result: Option<bool>) {
        if self.tx.send(result).is_err() {
            tracing::debug!(?result, "Prompt result discarded, nobody is waiting");
        }
    }

    /// Whether the waiting side has gone away.
    pub fn is_abandoned(&self) -> bool {
        self.tx.is_closed()
    }
}
