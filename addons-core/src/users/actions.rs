//! Action creators for the users slice
//!
//! Parameters arrive as plain structs whose required fields are optional so
//! callers assembling them from loosely typed sources get a
//! [`UsersError::MissingField`] instead of a half-built action.

use std::sync::Arc;

use addons_model::UserAccount;

use crate::action::Action;
use crate::errors::ErrorHandlerId;
use crate::users::error::{UsersError, UsersResult};

/// Arguments of [`fetch_user_account`]
#[derive(Debug, Clone, Default)]
pub struct FetchUserAccountParams {
    pub error_handler_id: Option<ErrorHandlerId>,
    pub username: Option<String>,
}

impl FetchUserAccountParams {
    /// Params with both required fields set
    pub fn new(
        error_handler_id: impl Into<ErrorHandlerId>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            error_handler_id: Some(error_handler_id.into()),
            username: Some(username.into()),
        }
    }
}

/// Arguments of [`load_user_account`] and [`load_current_user_account`]
#[derive(Debug, Clone, Default)]
pub struct LoadUserAccountParams {
    pub user: Option<UserAccount>,
}

impl LoadUserAccountParams {
    /// Params carrying `user`
    pub fn new(user: UserAccount) -> Self {
        Self { user: Some(user) }
    }
}

/// Ask for the account named `username` to be fetched
pub fn fetch_user_account(params: FetchUserAccountParams) -> UsersResult<Action> {
    let error_handler_id = params
        .error_handler_id
        .ok_or(UsersError::MissingField("errorHandlerId"))?;
    let username = params
        .username
        .ok_or(UsersError::MissingField("username"))?;

    Ok(Action::FetchUserAccount {
        error_handler_id,
        username,
    })
}

/// Cache an account without changing who is signed in
pub fn load_user_account(params: LoadUserAccountParams) -> UsersResult<Action> {
    let user = params.user.ok_or(UsersError::MissingField("user"))?;
    Ok(Action::LoadUserAccount {
        user: Arc::new(user),
    })
}

/// Cache an account and mark it as the signed-in user
pub fn load_current_user_account(
    params: LoadUserAccountParams,
) -> UsersResult<Action> {
    let user = params.user.ok_or(UsersError::MissingField("user"))?;
    Ok(Action::LoadCurrentUserAccount {
        user: Arc::new(user),
    })
}

/// Sign out; cached accounts are kept
pub fn log_out_user() -> Action {
    Action::LogOutUser
}
