//! Shared fixtures for the integration tests
#![allow(dead_code)]

use std::sync::Mutex;

use addons_core::prelude::*;
use addons_model::UserAccountBuilder;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Account payload shaped like an accounts API response
pub fn user_account_response(id: u64, username: &str) -> UserAccountBuilder {
    UserAccount::builder(id, username)
        .biography("I love making add-ons!")
        .homepage("https://example.org/")
        .location("Earth")
        .occupation("Add-on developer")
        .picture_url(format!("https://addons.cdn.test/user/{id}.png"))
        .average_addon_rating(4.3)
        .addon_developer(2)
        .created(Utc.with_ymd_and_hms(2017, 8, 15, 12, 1, 13).unwrap())
}

fn client_metadata_actions() -> Vec<Action> {
    vec![
        Action::SetLang {
            lang: "en-US".to_string(),
        },
        Action::SetClientApp {
            client_app: "firefox".to_string(),
        },
        Action::SetUserAgent {
            user_agent: "Mozilla/5.0 (X11; Linux x86_64; rv:57.0) Gecko/20100101 Firefox/57.0"
                .to_string(),
        },
    ]
}

/// Store with client metadata set and nobody signed in
pub fn client_metadata_store() -> Store {
    let mut store = Store::new(Config::default());
    for action in client_metadata_actions() {
        store.dispatch(action);
    }
    store
}

/// Store with a signed-in user; `customize` adjusts the default account
pub fn sign_in_store(
    customize: impl FnOnce(UserAccountBuilder) -> UserAccountBuilder,
) -> Store {
    let mut store = client_metadata_store();
    store.dispatch(Action::SetAuthToken {
        token: "fake-session-token".to_string(),
    });
    let user = customize(user_account_response(123, "user-1234")).build();
    let action = load_current_user_account(LoadUserAccountParams::new(user))
        .expect("user is present");
    store.dispatch(action);
    store
}

pub fn sign_in_state(
    customize: impl FnOnce(UserAccountBuilder) -> UserAccountBuilder,
) -> AppState {
    sign_in_store(customize).state().clone()
}

pub fn client_metadata_state() -> AppState {
    client_metadata_store().state().clone()
}

pub fn with_permissions(
    permissions: &[&str],
) -> impl FnOnce(UserAccountBuilder) -> UserAccountBuilder {
    let permissions: Vec<String> =
        permissions.iter().map(|p| p.to_string()).collect();
    move |builder| builder.permissions(permissions)
}

/// In-memory stand-in for the accounts HTTP client
#[derive(Debug, Default)]
pub struct StubUserAccountApi {
    accounts: Vec<UserAccount>,
    failure: Option<String>,
    requests: Mutex<Vec<UserAccountRequest>>,
}

impl StubUserAccountApi {
    pub fn with_accounts(accounts: Vec<UserAccount>) -> Self {
        Self {
            accounts,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<UserAccountRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserAccountApi for StubUserAccountApi {
    async fn user_account(
        &self,
        request: &UserAccountRequest,
    ) -> anyhow::Result<UserAccount> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(message) = &self.failure {
            anyhow::bail!("{}", message);
        }

        let segments: Vec<&str> = request
            .url
            .path_segments()
            .map(|s| s.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();
        let username = segments.last().copied().unwrap_or_default();

        self.accounts
            .iter()
            .find(|account| account.username == username)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Not found: {}", username))
    }
}
