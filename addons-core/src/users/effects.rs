//! Side effects triggered by user actions
//!
//! The HTTP client lives outside this crate. It plugs in through
//! [`UserAccountApi`]; this module only prepares the request from the
//! current config and request metadata and turns the outcome into the next
//! action to dispatch.

use std::sync::Arc;

use addons_model::UserAccount;
use async_trait::async_trait;
use log::{debug, warn};
use url::Url;

use crate::action::Action;
use crate::api::ApiState;
use crate::config::{Config, ConfigError};

/// Everything the HTTP client needs to fetch one account
#[derive(Clone, PartialEq, Eq)]
pub struct UserAccountRequest {
    pub url: Url,
    pub token: Option<String>,
    pub lang: Option<String>,
}

impl UserAccountRequest {
    pub fn new(
        config: &Config,
        api: &ApiState,
        username: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            url: config.account_url(username)?,
            token: api.token.clone(),
            lang: api.lang.clone(),
        })
    }
}

impl std::fmt::Debug for UserAccountRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserAccountRequest")
            .field("url", &self.url.as_str())
            .field("has_token", &self.token.as_ref().map(|_| true))
            .field("lang", &self.lang)
            .finish()
    }
}

#[async_trait]
pub trait UserAccountApi: Send + Sync {
    async fn user_account(
        &self,
        request: &UserAccountRequest,
    ) -> anyhow::Result<UserAccount>;
}

/// Run the fetch described by `action`.
///
/// Returns `None` for anything but [`Action::FetchUserAccount`]. Failures are
/// reported to the requesting error handler as [`Action::SetError`].
pub async fn handle_fetch_user_account<A>(
    api: &A,
    config: &Config,
    api_state: &ApiState,
    action: &Action,
) -> Option<Action>
where
    A: UserAccountApi + ?Sized,
{
    let Action::FetchUserAccount {
        error_handler_id,
        username,
    } = action
    else {
        return None;
    };

    let request = match UserAccountRequest::new(config, api_state, username) {
        Ok(request) => request,
        Err(err) => {
            warn!("Cannot build account request for {}: {}", username, err);
            return Some(Action::SetError {
                id: error_handler_id.clone(),
                message: err.to_string(),
            });
        }
    };

    debug!("Fetching user account: {:?}", request);

    match api.user_account(&request).await {
        Ok(user) => Some(Action::LoadUserAccount {
            user: Arc::new(user),
        }),
        Err(err) => {
            warn!("Failed to fetch user account {}: {:#}", username, err);
            Some(Action::SetError {
                id: error_handler_id.clone(),
                message: format!("{:#}", err),
            })
        }
    }
}
