//! Well-known permission codes granted to marketplace accounts.
//!
//! Codes follow the `Group:Action` convention used by the accounts API.
//! [`ALL_SUPER_POWERS`] is a sentinel: an account holding it is treated as
//! holding every other code.

pub const ADDONS_POSTREVIEW: &str = "Addons:PostReview";
pub const ADDONS_CONTENTREVIEW: &str = "Addons:ContentReview";
pub const ADDONS_REVIEW: &str = "Addons:Review";
pub const ADMIN_TOOLS_VIEW: &str = "AdminTools:View";
/// Grants every permission
pub const ALL_SUPER_POWERS: &str = "*:*";
pub const COLLECTIONS_EDIT: &str = "Collections:Edit";
pub const STATS_VIEW: &str = "Stats:View";
pub const THEMES_REVIEW: &str = "Personas:Review";

/// Codes that make an account a reviewer of some kind
pub const REVIEWER_RELATED: [&str; 3] =
    [ADDONS_POSTREVIEW, ADDONS_CONTENTREVIEW, ADDONS_REVIEW];

/// Returns true when `code` is one of [`REVIEWER_RELATED`]
pub fn is_reviewer_related(code: &str) -> bool {
    REVIEWER_RELATED.contains(&code)
}
