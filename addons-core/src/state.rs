use std::sync::Arc;

use crate::action::Action;
use crate::api::{self, ApiState};
use crate::errors::{self, ErrorsState};
use crate::users::{self, UsersState};

/// Root state tree; each slice is owned by one reducer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub api: Arc<ApiState>,
    pub errors: Arc<ErrorsState>,
    pub users: Arc<UsersState>,
}

impl AppState {
    pub fn users(&self) -> &UsersState {
        &self.users
    }
}

/// Apply `action` to every slice
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    AppState {
        api: api::reducer(&state.api, action),
        errors: errors::reducer(&state.errors, action),
        users: users::reducer(&state.users, action),
    }
}
