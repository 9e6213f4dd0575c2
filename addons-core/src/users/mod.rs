//! Users slice
//!
//! Caches user accounts by id and by username and tracks which account is
//! signed in. Records are shared between the two indexes through one `Arc`
//! and are never evicted: signing out only clears the current-user pointer.

pub mod actions;
pub mod effects;
pub mod error;
pub mod permissions;
pub mod reducer;
pub mod selectors;
pub mod state;

pub use error::UsersError;
pub use reducer::reducer;
pub use state::UsersState;
