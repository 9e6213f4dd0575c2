//! Snapshot of the types surface used by the state crates.
//! Prefer importing from this module instead of individual tree nodes.

pub use super::error::{ModelError, Result as ModelResult};
pub use super::ids::UserId;
pub use super::permissions;
pub use super::user::{UserAccount, UserAccountBuilder};
