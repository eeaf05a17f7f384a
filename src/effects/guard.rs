//! The unsaved-changes deactivation guard.

use crate::core::{query_form, CanDeactivate, DeactivationPhase};
use crate::dialog::{ConfigError, ConfirmDialog, DialogHandle, DialogOutcome, GuardConfig};
use crate::effects::request::DeactivationRequest;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;

/// Open prompts by form key; `None` until the owning request resolves.
type PromptTable = HashMap<String, watch::Receiver<Option<DialogOutcome>>>;
type Outstanding = Arc<Mutex<PromptTable>>;

fn lock(outstanding: &Outstanding) -> MutexGuard<'_, PromptTable> {
    outstanding
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Decides whether navigation may leave the active form.
///
/// A form that reports no unsaved changes is let through immediately and no
/// prompt is shown. Any other answer, including a failing, panicking or
/// missing form, opens one modal prompt and waits for it.
///
/// # Example
///
/// ```rust
/// use berthguard::core::FormGuard;
/// use berthguard::dialog::ScriptedDialog;
/// use berthguard::effects::DeactivationGuard;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let guard = DeactivationGuard::new(ScriptedDialog::answering([Some(true)]));
///
/// let clean = FormGuard::new(|| true);
/// assert!(guard.can_deactivate(Some(&clean), "/visits").await);
///
/// let dirty = FormGuard::new(|| false);
/// assert!(guard.can_deactivate(Some(&dirty), "/visits").await);
/// # }
/// ```
pub struct DeactivationGuard<D> {
    dialog: D,
    config: GuardConfig,
    outstanding: Outstanding,
}

impl<D: ConfirmDialog> DeactivationGuard<D> {
    pub fn new(dialog: D) -> Self {
        Self::from_parts(dialog, GuardConfig::default())
    }

    /// Guard with a custom configuration. Blank prompt texts are rejected.
    pub fn with_config(dialog: D, config: GuardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(dialog, config))
    }

    fn from_parts(dialog: D, config: GuardConfig) -> Self {
        Self {
            dialog,
            config,
            outstanding: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    /// Number of keyed prompts currently open.
    pub fn open_prompts(&self) -> usize {
        lock(&self.outstanding).len()
    }

    /// Start a deactivation request for navigating to `target`.
    ///
    /// Never blocks. A deferred decision must be awaited before navigation
    /// proceeds or is abandoned.
    pub fn check(&self, form: Option<&dyn CanDeactivate>, target: &str) -> GuardDecision {
        let mut request = DeactivationRequest::new(target);
        request.enter(DeactivationPhase::Queried);
        let key = form.and_then(|f| f.form_key()).map(str::to_owned);

        match query_form(form) {
            Ok(true) => {
                request.enter(DeactivationPhase::Allowed);
                tracing::debug!(
                    request_id = %request.id(),
                    route = target,
                    "Form clean, leaving"
                );
                GuardDecision::Immediate(request)
            }
            Ok(false) => self.confirm(request, key),
            Err(err) => {
                tracing::warn!(
                    request_id = %request.id(),
                    route = target,
                    %err,
                    "Form could not be queried, asking for confirmation"
                );
                request.record_form_error(&err);
                self.confirm(request, key)
            }
        }
    }

    /// Run a full request and return whether navigation may proceed.
    pub async fn can_deactivate(&self, form: Option<&dyn CanDeactivate>, target: &str) -> bool {
        self.check(form, target).resolve().await
    }

    fn confirm(&self, mut request: DeactivationRequest, key: Option<String>) -> GuardDecision {
        request.enter(DeactivationPhase::AwaitingConfirmation);

        let key = key.filter(|_| self.config.dedupe_prompts);
        let Some(key) = key else {
            let handle = self.open(&request);
            return GuardDecision::Deferred(PendingConfirmation {
                request,
                source: Source::Prompt {
                    handle,
                    publisher: None,
                },
            });
        };

        let publisher = {
            let mut outstanding = lock(&self.outstanding);
            if let Some(existing) = outstanding.get(&key) {
                tracing::debug!(
                    request_id = %request.id(),
                    form = %key,
                    "Joining prompt already open for this form"
                );
                return GuardDecision::Deferred(PendingConfirmation {
                    request,
                    source: Source::Joined(existing.clone()),
                });
            }
            let (tx, rx) = watch::channel(None);
            outstanding.insert(key.clone(), rx);
            Publisher {
                key,
                tx,
                outstanding: Arc::clone(&self.outstanding),
            }
        };

        let handle = self.open(&request);
        GuardDecision::Deferred(PendingConfirmation {
            request,
            source: Source::Prompt {
                handle,
                publisher: Some(publisher),
            },
        })
    }

    fn open(&self, request: &DeactivationRequest) -> DialogHandle {
        tracing::info!(
            request_id = %request.id(),
            route = request.target(),
            "Unsaved changes, opening confirmation prompt"
        );
        self.dialog.open(self.config.dialog())
    }
}

/// Result of [`DeactivationGuard::check`].
#[derive(Debug)]
pub enum GuardDecision {
    /// Resolved without UI; always allowed.
    Immediate(DeactivationRequest),
    /// Waiting on a prompt.
    Deferred(PendingConfirmation),
}

impl GuardDecision {
    pub fn is_immediate(&self) -> bool {
        matches!(self, Self::Immediate(_))
    }

    pub fn request(&self) -> &DeactivationRequest {
        match self {
            Self::Immediate(request) => request,
            Self::Deferred(pending) => &pending.request,
        }
    }

    /// Wait for the decision and return the finished request.
    pub async fn settle(self) -> DeactivationRequest {
        match self {
            Self::Immediate(request) => request,
            Self::Deferred(pending) => pending.settle().await,
        }
    }

    pub async fn resolve(self) -> bool {
        self.settle().await.is_allowed()
    }
}

/// A request waiting on a confirmation prompt.
#[derive(Debug)]
pub struct PendingConfirmation {
    request: DeactivationRequest,
    source: Source,
}

#[derive(Debug)]
enum Source {
    /// This request opened the prompt.
    Prompt {
        handle: DialogHandle,
        publisher: Option<Publisher>,
    },
    /// Another request for the same form opened it.
    Joined(watch::Receiver<Option<DialogOutcome>>),
}

/// Shares a prompt's outcome with joined requests and clears the form's
/// entry once the owning request finishes or is dropped.
#[derive(Debug)]
struct Publisher {
    key: String,
    tx: watch::Sender<Option<DialogOutcome>>,
    outstanding: Outstanding,
}

impl Publisher {
    fn announce(&self, outcome: DialogOutcome) {
        self.tx.send_replace(Some(outcome));
    }
}

impl Drop for Publisher {
    fn drop(&mut self) {
        lock(&self.outstanding).remove(&self.key);
    }
}

impl PendingConfirmation {
    pub fn request(&self) -> &DeactivationRequest {
        &self.request
    }

    /// Whether this request shares a prompt opened by an earlier one.
    pub fn is_joined(&self) -> bool {
        matches!(self.source, Source::Joined(_))
    }

    pub async fn settle(self) -> DeactivationRequest {
        let Self {
            mut request,
            source,
        } = self;

        let outcome = match source {
            Source::Prompt { handle, publisher } => {
                let outcome = DialogOutcome::from_result(handle.closed().await);
                if let Some(publisher) = publisher {
                    publisher.announce(outcome);
                }
                outcome
            }
            Source::Joined(mut rx) => rx
                .wait_for(Option::is_some)
                .await
                .map(|value| (*value).unwrap_or(DialogOutcome::Dismissed))
                .unwrap_or(DialogOutcome::Dismissed),
        };

        request.record_outcome(outcome);
        let next = if outcome.choice().is_leave() {
            DeactivationPhase::Allowed
        } else {
            DeactivationPhase::Denied
        };
        request.enter(next);

        tracing::info!(
            request_id = %request.id(),
            route = request.target(),
            ?outcome,
            allowed = request.is_allowed(),
            "Deactivation request resolved"
        );
        request
    }
}
