//! Client state for the add-ons marketplace.
//!
//! State is an immutable tree of slices ([`state::AppState`]). Every change is
//! described by an [`action::Action`] and applied by pure reducers that return
//! a new tree; slices an action does not touch keep their `Arc` so callers can
//! detect "nothing changed" with [`std::sync::Arc::ptr_eq`]. Selectors read
//! the tree on demand.
//!
//! ## Example
//!
//! ```
//! use addons_core::prelude::*;
//!
//! let mut store = Store::new(Config::default());
//! let user = UserAccount::builder(12345, "babar")
//!     .display_name("King of the Elephants")
//!     .build();
//!
//! store.dispatch(load_current_user_account(LoadUserAccountParams::new(user))?);
//!
//! let current = get_current_user(&store.state().users)?.expect("signed in");
//! assert_eq!(get_display_name(current), "King of the Elephants");
//! # Ok::<(), addons_core::users::UsersError>(())
//! ```

pub mod action;
pub mod api;
pub mod config;
pub mod errors;
pub mod state;
pub mod store;
pub mod users;

pub mod prelude;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use state::AppState;
pub use store::Store;
