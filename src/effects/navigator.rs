//! Route holder that consults the guard before every move.

use crate::core::{CanDeactivate, State, StateHistory, StateTransition};
use crate::dialog::ConfirmDialog;
use crate::effects::guard::DeactivationGuard;
use crate::effects::request::DeactivationRequest;
use serde::{Deserialize, Serialize};

/// A client-side route such as `/visits/42`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Route(String);

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Route {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Route {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl State for Route {
    fn name(&self) -> &str {
        &self.0
    }
}

/// What happened to a navigation attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum NavigationOutcome {
    Moved { from: Route, to: Route },
    /// The guard denied the move; the current route is unchanged.
    Blocked { at: Route, target: Route },
}

impl NavigationOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Keeps the current route and only changes it when the guard allows.
pub struct Navigator<D> {
    guard: DeactivationGuard<D>,
    current: Route,
    history: StateHistory<Route>,
    last_request: Option<DeactivationRequest>,
}

impl<D: ConfirmDialog> Navigator<D> {
    pub fn new(guard: DeactivationGuard<D>, start: impl Into<Route>) -> Self {
        Self {
            guard,
            current: start.into(),
            history: StateHistory::new(),
            last_request: None,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Routes visited so far.
    pub fn history(&self) -> &StateHistory<Route> {
        &self.history
    }

    pub fn guard(&self) -> &DeactivationGuard<D> {
        &self.guard
    }

    /// The request behind the most recent navigation attempt.
    pub fn last_request(&self) -> Option<&DeactivationRequest> {
        self.last_request.as_ref()
    }

    /// Try to leave the current screen, whose form is `form`, for `target`.
    pub async fn navigate(
        &mut self,
        target: impl Into<Route>,
        form: Option<&dyn CanDeactivate>,
    ) -> NavigationOutcome {
        let target = target.into();
        let request = self.guard.check(form, target.as_str()).settle().await;
        let allowed = request.is_allowed();
        self.last_request = Some(request);

        if !allowed {
            tracing::debug!(
                from = self.current.as_str(),
                to = target.as_str(),
                "Navigation blocked"
            );
            return NavigationOutcome::Blocked {
                at: self.current.clone(),
                target,
            };
        }

        let from = std::mem::replace(&mut self.current, target.clone());
        self.history = self
            .history
            .record(StateTransition::now(from.clone(), target.clone()));
        tracing::debug!(from = from.as_str(), to = target.as_str(), "Navigated");
        NavigationOutcome::Moved { from, to: target }
    }
}
