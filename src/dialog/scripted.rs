//! A dialog driven by a script instead of a person.

use super::{ConfirmDialog, DialogConfig, DialogHandle, DialogResolver};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Script {
    answers: VecDeque<Option<bool>>,
    manual: bool,
    opened: Vec<DialogConfig>,
    pending: VecDeque<DialogResolver>,
}

/// [`ConfirmDialog`] that answers from a queue, or holds prompts open until
/// the caller resolves them.
///
/// Every opened prompt's configuration is recorded. An exhausted answer
/// queue dismisses the prompt.
///
/// ```rust
/// use berthguard::dialog::{ConfirmDialog, GuardConfig, ScriptedDialog};
///
/// let dialog = ScriptedDialog::answering([Some(true)]);
/// let _handle = dialog.open(GuardConfig::default().dialog());
///
/// assert_eq!(dialog.open_count(), 1);
/// assert_eq!(dialog.opened()[0].confirm_text, "Leave Anyway");
/// ```
#[derive(Default)]
pub struct ScriptedDialog {
    script: Mutex<Script>,
}

impl ScriptedDialog {
    /// Answer each prompt with the next queued result.
    pub fn answering(answers: impl IntoIterator<Item = Option<bool>>) -> Self {
        let script = Script {
            answers: answers.into_iter().collect(),
            ..Script::default()
        };
        Self {
            script: Mutex::new(script),
        }
    }

    /// Keep every prompt open until resolved through [`next_pending`](Self::next_pending).
    pub fn manual() -> Self {
        let script = Script {
            manual: true,
            ..Script::default()
        };
        Self {
            script: Mutex::new(script),
        }
    }

    /// Resolver of the oldest prompt still open.
    pub fn next_pending(&self) -> Option<DialogResolver> {
        self.lock().pending.pop_front()
    }

    pub fn opened(&self) -> Vec<DialogConfig> {
        self.lock().opened.clone()
    }

    pub fn open_count(&self) -> usize {
        self.lock().opened.len()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ConfirmDialog for ScriptedDialog {
    fn open(&self, config: DialogConfig) -> DialogHandle {
        let mut script = self.lock();
        script.opened.push(config);

        let (resolver, handle) = DialogHandle::channel();
        if script.manual {
            script.pending.push_back(resolver);
        } else {
            let answer = script.answers.pop_front().flatten();
            resolver.resolve(answer);
        }
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::GuardConfig;

    #[tokio::test]
    async fn answers_in_order_then_dismisses() {
        let dialog = ScriptedDialog::answering([Some(false), Some(true)]);
        let config = GuardConfig::default().dialog();

        assert_eq!(dialog.open(config.clone()).closed().await, Some(false));
        assert_eq!(dialog.open(config.clone()).closed().await, Some(true));
        assert_eq!(dialog.open(config).closed().await, None);
        assert_eq!(dialog.open_count(), 3);
    }

    #[tokio::test]
    async fn manual_prompts_wait_for_resolution() {
        let dialog = ScriptedDialog::manual();
        let handle = dialog.open(GuardConfig::default().dialog());

        let resolver = dialog.next_pending().expect("prompt should be pending");
        assert!(dialog.next_pending().is_none());
        resolver.confirm();

        assert_eq!(handle.closed().await, Some(true));
    }

    #[test]
    fn records_prompt_configuration() {
        let dialog = ScriptedDialog::default();
        let _ = dialog.open(GuardConfig::default().dialog());

        let opened = dialog.opened();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].title, "Unsaved Changes");
    }
}
