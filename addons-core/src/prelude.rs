//! Frequently used items for code that drives the store.

pub use crate::action::Action;
pub use crate::api::ApiState;
pub use crate::config::{Config, ConfigError};
pub use crate::errors::{ErrorHandlerId, ErrorsState};
pub use crate::state::{AppState, reduce};
pub use crate::store::Store;
pub use crate::users::actions::{
    FetchUserAccountParams, LoadUserAccountParams, fetch_user_account,
    load_current_user_account, load_user_account, log_out_user,
};
pub use crate::users::effects::{UserAccountApi, UserAccountRequest};
pub use crate::users::selectors::{
    get_current_user, get_display_name, get_user_by_id, get_user_by_username,
    has_any_reviewer_related_permission, has_permission,
};
pub use crate::users::{UsersError, UsersState};
pub use addons_model::prelude::*;
