use log::{debug, trace};

use crate::action::Action;
use crate::config::Config;
use crate::state::{AppState, reduce};
use crate::users::actions::{FetchUserAccountParams, fetch_user_account};
use crate::users::effects::{UserAccountApi, handle_fetch_user_account};
use crate::users::error::UsersResult;

/// Owns the state tree and applies dispatched actions to it
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: AppState,
    config: Config,
}

impl Store {
    /// Store with an empty state tree
    pub fn new(config: Config) -> Self {
        Self::with_state(config, AppState::default())
    }

    /// Store seeded with `state`
    pub fn with_state(config: Config, state: AppState) -> Self {
        Self { state, config }
    }

    /// Current state tree
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Configuration used by effects
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run `action` through the root reducer and return the new tree
    pub fn dispatch(&mut self, action: Action) -> &AppState {
        debug!("Dispatch: {}", action.name());
        trace!("Dispatch payload: {}", action.sanitized_display());
        self.state = reduce(&self.state, &action);
        &self.state
    }

    /// Fetch an account through `api` and load it into the users slice.
    ///
    /// Only invalid parameters are returned as errors; a failed fetch is
    /// recorded under the request's error handler id.
    pub async fn fetch_user_account<A>(
        &mut self,
        api: &A,
        params: FetchUserAccountParams,
    ) -> UsersResult<()>
    where
        A: UserAccountApi + ?Sized,
    {
        let action = fetch_user_account(params)?;
        if let Action::FetchUserAccount {
            error_handler_id, ..
        } = &action
        {
            self.dispatch(Action::ClearError {
                id: error_handler_id.clone(),
            });
        }
        self.dispatch(action.clone());

        let next =
            handle_fetch_user_account(api, &self.config, &self.state.api, &action)
                .await;
        if let Some(next) = next {
            self.dispatch(next);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_applies_actions_with_trace_logging() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
        let mut store = Store::default();

        store.dispatch(Action::SetAuthToken {
            token: "secret-session-token".to_string(),
        });
        store.dispatch(Action::SetLang {
            lang: "en-US".to_string(),
        });

        assert!(store.state().api.is_signed_in());
        assert_eq!(store.state().api.lang.as_deref(), Some("en-US"));
    }

    #[test]
    fn dispatch_keeps_untouched_slices() {
        let mut store = Store::default();
        let before = store.state().clone();

        store.dispatch(Action::SetClientApp {
            client_app: "android".to_string(),
        });

        assert!(std::sync::Arc::ptr_eq(&before.users, &store.state().users));
        assert!(std::sync::Arc::ptr_eq(&before.errors, &store.state().errors));
    }
}
