//! Read-only queries over the users slice.
//!
//! Selectors that need the signed-in account go through [`get_current_user`]
//! and therefore share its failure mode: a current-user pointer with no
//! cached record is a state-composition bug and is returned as
//! [`UsersError::CurrentUserMissing`] instead of being read as "signed out".

use std::sync::Arc;

use addons_model::{UserAccount, UserId};
use log::error;

use crate::state::AppState;
use crate::users::error::{UsersError, UsersResult};
use crate::users::permissions::PermissionChecker;
use crate::users::state::UsersState;

/// The signed-in account, `None` when signed out
pub fn get_current_user(
    users: &UsersState,
) -> UsersResult<Option<&Arc<UserAccount>>> {
    let Some(current_user_id) = users.current_user_id else {
        return Ok(None);
    };

    match users.by_id.get(&current_user_id) {
        Some(user) => Ok(Some(user)),
        None => {
            error!(
                "currentUserID {} has no cached account; users state is inconsistent",
                current_user_id
            );
            Err(UsersError::CurrentUserMissing { current_user_id })
        }
    }
}

/// Cached account with the given id
pub fn get_user_by_id(users: &UsersState, id: UserId) -> Option<&Arc<UserAccount>> {
    users.by_id.get(&id)
}

/// Cached account with the given username
pub fn get_user_by_username<'a>(
    users: &'a UsersState,
    username: &str,
) -> Option<&'a Arc<UserAccount>> {
    users.by_username.get(username)
}

/// Whether the signed-in account holds `permission`
pub fn has_permission(state: &AppState, permission: &str) -> UsersResult<bool> {
    let user = get_current_user(&state.users)?;
    Ok(PermissionChecker::new(user.map(|u| &**u)).has_permission(permission))
}

/// Whether the signed-in account holds any reviewer permission
pub fn has_any_reviewer_related_permission(state: &AppState) -> UsersResult<bool> {
    let user = get_current_user(&state.users)?;
    Ok(PermissionChecker::new(user.map(|u| &**u)).is_reviewer())
}

/// Name to show for `user`: the display name when set, otherwise the username.
///
/// Takes a loaded record; callers holding an optional user resolve the
/// signed-out case before asking for a name.
pub fn get_display_name(user: &UserAccount) -> &str {
    match user.display_name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => &user.username,
    }
}
