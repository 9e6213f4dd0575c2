//! Permission helper for the signed-in account
//!
//! Keeps permission logic in one place so selectors and views ask the same
//! questions the same way. A missing account and a null permission list both
//! grant nothing; [`ALL_SUPER_POWERS`] grants everything.

use addons_model::UserAccount;
use addons_model::permissions::{ALL_SUPER_POWERS, REVIEWER_RELATED};

/// Permission checker over one (possibly absent) account
#[derive(Debug, Clone, Copy)]
pub struct PermissionChecker<'a> {
    permissions: Option<&'a [String]>,
}

impl<'a> PermissionChecker<'a> {
    pub fn new(user: Option<&'a UserAccount>) -> Self {
        Self {
            permissions: user.and_then(|u| u.permissions.as_deref()),
        }
    }

    fn holds(&self, code: &str) -> bool {
        self.permissions
            .is_some_and(|granted| granted.iter().any(|p| p == code))
    }

    /// Check if the account holds the all-powers sentinel
    pub fn is_admin(&self) -> bool {
        self.holds(ALL_SUPER_POWERS)
    }

    /// Check if the account holds `code`, either directly or as an admin
    pub fn has_permission(&self, code: &str) -> bool {
        self.is_admin() || self.holds(code)
    }

    /// Check if the account holds at least one of `codes`
    pub fn has_any_permission(&self, codes: &[&str]) -> bool {
        self.is_admin() || codes.iter().any(|code| self.holds(code))
    }

    /// Check if the account can review add-ons in any capacity
    pub fn is_reviewer(&self) -> bool {
        self.has_any_permission(&REVIEWER_RELATED)
    }
}
