use std::sync::Arc;

use addons_model::UserAccount;

use crate::errors::ErrorHandlerId;

/// Every state transition the client knows about.
///
/// Slice reducers match the variants they own and hand the state back
/// untouched for the rest.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // Request metadata
    SetAuthToken { token: String },
    SetLang { lang: String },
    SetClientApp { client_app: String },
    SetUserAgent { user_agent: String },

    // Error handlers
    SetError {
        id: ErrorHandlerId,
        message: String,
    },
    ClearError { id: ErrorHandlerId },

    // Users
    FetchUserAccount {
        error_handler_id: ErrorHandlerId,
        username: String,
    },
    LoadUserAccount { user: Arc<UserAccount> },
    LoadCurrentUserAccount { user: Arc<UserAccount> },
    LogOutUser,
}

impl Action {
    /// Returns a display string that hides the auth token
    pub fn sanitized_display(&self) -> String {
        match self {
            Self::SetAuthToken { .. } => "SetAuthToken(***)".to_string(),
            _ => format!("{:?}", self),
        }
    }

    /// Stable `Slice::Variant` tag, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetAuthToken { .. } => "Api::SetAuthToken",
            Self::SetLang { .. } => "Api::SetLang",
            Self::SetClientApp { .. } => "Api::SetClientApp",
            Self::SetUserAgent { .. } => "Api::SetUserAgent",

            Self::SetError { .. } => "Errors::SetError",
            Self::ClearError { .. } => "Errors::ClearError",

            Self::FetchUserAccount { .. } => "Users::FetchUserAccount",
            Self::LoadUserAccount { .. } => "Users::LoadUserAccount",
            Self::LoadCurrentUserAccount { .. } => {
                "Users::LoadCurrentUserAccount"
            }
            Self::LogOutUser => "Users::LogOutUser",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_display_hides_token() {
        let action = Action::SetAuthToken {
            token: "secret-session-token".to_string(),
        };

        let shown = action.sanitized_display();
        assert!(!shown.contains("secret-session-token"));
        assert_eq!(shown, "SetAuthToken(***)");
    }

    #[test]
    fn sanitized_display_keeps_other_actions() {
        let action = Action::SetLang {
            lang: "fr".to_string(),
        };
        assert!(action.sanitized_display().contains("fr"));
    }

    #[test]
    fn names_are_namespaced_by_slice() {
        assert_eq!(Action::LogOutUser.name(), "Users::LogOutUser");
        assert_eq!(
            Action::ClearError {
                id: ErrorHandlerId::from("x")
            }
            .name(),
            "Errors::ClearError"
        );
    }
}
