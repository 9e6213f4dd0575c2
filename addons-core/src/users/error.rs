use addons_model::UserId;
use thiserror::Error;

/// Errors raised by user action creators and selectors.
///
/// Both variants point at a bug in the calling code rather than a runtime
/// condition to recover from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsersError {
    /// A required action parameter was not supplied
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The current-user pointer references an account that is not cached
    #[error(
        "currentUserID is defined but no matching user found (currentUserID: {current_user_id})"
    )]
    CurrentUserMissing { current_user_id: UserId },
}

/// Result alias for users slice operations
pub type UsersResult<T> = Result<T, UsersError>;
