//! Core data model definitions shared across the add-ons client crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod permissions;
pub mod prelude;
pub mod user;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use ids::UserId;
pub use user::{UserAccount, UserAccountBuilder};
