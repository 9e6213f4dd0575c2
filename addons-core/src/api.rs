//! Request metadata slice
//!
//! Holds what every API call needs to carry: the session token, the active
//! locale, the client application and the browser user agent.

use std::sync::Arc;

use log::debug;

use crate::action::Action;

/// Metadata attached to outgoing API requests
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiState {
    /// Session token; never shown by `Debug`
    pub token: Option<String>,
    pub lang: Option<String>,
    pub client_app: Option<String>,
    pub user_agent: Option<String>,
}

impl ApiState {
    /// Whether a session token is held
    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }
}

impl std::fmt::Debug for ApiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiState")
            .field("has_token", &self.token.as_ref().map(|_| true))
            .field("lang", &self.lang)
            .field("client_app", &self.client_app)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Apply the metadata setters; log out drops the token
pub fn reducer(state: &Arc<ApiState>, action: &Action) -> Arc<ApiState> {
    match action {
        Action::SetAuthToken { token } => Arc::new(ApiState {
            token: Some(token.clone()),
            ..(**state).clone()
        }),
        Action::SetLang { lang } => Arc::new(ApiState {
            lang: Some(lang.clone()),
            ..(**state).clone()
        }),
        Action::SetClientApp { client_app } => Arc::new(ApiState {
            client_app: Some(client_app.clone()),
            ..(**state).clone()
        }),
        Action::SetUserAgent { user_agent } => Arc::new(ApiState {
            user_agent: Some(user_agent.clone()),
            ..(**state).clone()
        }),
        Action::LogOutUser => {
            debug!("Clearing auth token");
            Arc::new(ApiState {
                token: None,
                ..(**state).clone()
            })
        }
        _ => Arc::clone(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_and_clears_token() {
        let state = Arc::new(ApiState::default());
        let state = reducer(
            &state,
            &Action::SetAuthToken {
                token: "abc".to_string(),
            },
        );
        assert!(state.is_signed_in());

        let state = reducer(&state, &Action::LogOutUser);
        assert_eq!(state.token, None);
    }

    #[test]
    fn log_out_keeps_client_metadata() {
        let state = Arc::new(ApiState {
            token: Some("abc".to_string()),
            lang: Some("en-US".to_string()),
            client_app: Some("firefox".to_string()),
            user_agent: None,
        });

        let state = reducer(&state, &Action::LogOutUser);
        assert_eq!(state.lang.as_deref(), Some("en-US"));
        assert_eq!(state.client_app.as_deref(), Some("firefox"));
    }

    #[test]
    fn debug_output_hides_token() {
        let state = ApiState {
            token: Some("secret-session-token".to_string()),
            ..ApiState::default()
        };
        let shown = format!("{:?}", state);
        assert!(!shown.contains("secret-session-token"));
    }

    #[test]
    fn ignores_user_actions() {
        let state = Arc::new(ApiState::default());
        let next = reducer(
            &state,
            &Action::FetchUserAccount {
                error_handler_id: "handler".into(),
                username: "babar".to_string(),
            },
        );
        assert!(Arc::ptr_eq(&state, &next));
    }
}
