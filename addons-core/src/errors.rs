//! Error handler slice
//!
//! Components that start a request register an [`ErrorHandlerId`]; failures
//! of that request are stored here under the same id so the component can
//! render them.

use std::collections::HashMap;
use std::sync::Arc;

use crate::action::Action;

/// Identifies the component-level error handler a request reports to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorHandlerId(String);

impl ErrorHandlerId {
    /// Wrap a handler name
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The handler name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ErrorHandlerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ErrorHandlerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ErrorHandlerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Latest error message per handler
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorsState {
    by_handler: HashMap<ErrorHandlerId, String>,
}

impl ErrorsState {
    /// Message recorded for `id`, if any
    pub fn get(&self, id: &ErrorHandlerId) -> Option<&str> {
        self.by_handler.get(id).map(String::as_str)
    }

    /// Whether no handler has a pending error
    pub fn is_empty(&self) -> bool {
        self.by_handler.is_empty()
    }
}

/// Apply `SetError` / `ClearError`
pub fn reducer(state: &Arc<ErrorsState>, action: &Action) -> Arc<ErrorsState> {
    match action {
        Action::SetError { id, message } => {
            let mut next = (**state).clone();
            next.by_handler.insert(id.clone(), message.clone());
            Arc::new(next)
        }
        Action::ClearError { id } if state.by_handler.contains_key(id) => {
            let mut next = (**state).clone();
            next.by_handler.remove(id);
            Arc::new(next)
        }
        _ => Arc::clone(state),
    }
}
