use std::sync::Arc;

use log::info;

use crate::action::Action;
use crate::users::state::{UsersState, add_user_to_state};

/// Apply `action` to the users slice.
///
/// Returns the same `Arc` for actions this slice does not handle.
pub fn reducer(state: &Arc<UsersState>, action: &Action) -> Arc<UsersState> {
    match action {
        Action::LoadUserAccount { user } => {
            Arc::new(add_user_to_state(state, user))
        }
        Action::LoadCurrentUserAccount { user } => {
            info!("Signed in as {} ({})", user.username, user.id);
            Arc::new(UsersState {
                current_user_id: Some(user.id),
                ..add_user_to_state(state, user)
            })
        }
        Action::LogOutUser => {
            if let Some(id) = state.current_user_id {
                info!("Signing out user {}", id);
            }
            Arc::new(UsersState {
                current_user_id: None,
                ..(**state).clone()
            })
        }
        _ => Arc::clone(state),
    }
}
