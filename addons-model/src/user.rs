//! Marketplace user accounts
//!
//! [`UserAccount`] mirrors the account payload returned by the accounts API.
//! Records are treated as immutable values: the state layer replaces a cached
//! record wholesale when a fresher copy is loaded and never edits one in place.
//!
//! ## Example
//!
//! ```
//! use addons_model::user::UserAccount;
//! use addons_model::permissions::STATS_VIEW;
//!
//! let user = UserAccount::builder(12345, "babar")
//!     .display_name("King of the Elephants")
//!     .permissions(vec![STATS_VIEW.to_string()])
//!     .build();
//!
//! assert_eq!(user.username, "babar");
//! ```

use chrono::{DateTime, Utc};

use crate::ids::UserId;

/// A single user account
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserAccount {
    /// Unique numeric identifier
    pub id: UserId,
    /// Unique username
    pub username: String,
    /// Name chosen by the user; absent, null and empty are all possible
    #[cfg_attr(feature = "serde", serde(default))]
    pub display_name: Option<String>,
    /// Granted permission codes in API order; `None` when the API sent null
    #[cfg_attr(feature = "serde", serde(default))]
    pub permissions: Option<Vec<String>>,
    /// Name computed by the API (display name or a generated fallback)
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub biography: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub homepage: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub occupation: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub picture_url: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub average_addon_rating: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub num_addons_listed: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_addon_developer: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_artist: bool,
    /// When the account was created
    pub created: DateTime<Utc>,
}

impl UserAccount {
    /// Start building an account with the two identifying fields
    pub fn builder(id: u64, username: impl Into<String>) -> UserAccountBuilder {
        UserAccountBuilder::new(UserId(id), username.into())
    }

    /// Permission codes, treating a null list as empty
    pub fn permission_codes(&self) -> &[String] {
        self.permissions.as_deref().unwrap_or(&[])
    }
}

/// Builder for [`UserAccount`] with API-like defaults
#[derive(Debug, Clone)]
pub struct UserAccountBuilder {
    account: UserAccount,
}

impl UserAccountBuilder {
    fn new(id: UserId, username: String) -> Self {
        Self {
            account: UserAccount {
                id,
                name: username.clone(),
                username,
                display_name: None,
                permissions: Some(Vec::new()),
                biography: None,
                homepage: None,
                location: None,
                occupation: None,
                picture_url: None,
                average_addon_rating: None,
                num_addons_listed: 0,
                is_addon_developer: false,
                is_artist: false,
                created: Utc::now(),
            },
        }
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        self.account.name = display_name.clone();
        self.account.display_name = Some(display_name);
        self
    }

    /// Set the display name verbatim, including `None`
    pub fn maybe_display_name(mut self, display_name: Option<String>) -> Self {
        self.account.display_name = display_name;
        self
    }

    pub fn permissions(mut self, permissions: Vec<String>) -> Self {
        self.account.permissions = Some(permissions);
        self
    }

    /// Model an account whose permission list came back as null
    pub fn null_permissions(mut self) -> Self {
        self.account.permissions = None;
        self
    }

    pub fn biography(mut self, biography: impl Into<String>) -> Self {
        self.account.biography = Some(biography.into());
        self
    }

    pub fn homepage(mut self, homepage: impl Into<String>) -> Self {
        self.account.homepage = Some(homepage.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.account.location = Some(location.into());
        self
    }

    pub fn occupation(mut self, occupation: impl Into<String>) -> Self {
        self.account.occupation = Some(occupation.into());
        self
    }

    pub fn picture_url(mut self, picture_url: impl Into<String>) -> Self {
        self.account.picture_url = Some(picture_url.into());
        self
    }

    pub fn addon_developer(mut self, num_addons_listed: u32) -> Self {
        self.account.is_addon_developer = num_addons_listed > 0;
        self.account.num_addons_listed = num_addons_listed;
        self
    }

    pub fn artist(mut self, is_artist: bool) -> Self {
        self.account.is_artist = is_artist;
        self
    }

    pub fn average_addon_rating(mut self, rating: f64) -> Self {
        self.account.average_addon_rating = Some(rating);
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.account.created = created;
        self
    }

    pub fn build(self) -> UserAccount {
        self.account
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_a_fresh_account() {
        let user = UserAccount::builder(1, "john").build();

        assert_eq!(user.id, UserId(1));
        assert_eq!(user.name, "john");
        assert_eq!(user.display_name, None);
        assert_eq!(user.permissions, Some(Vec::new()));
        assert!(!user.is_addon_developer);
    }

    #[test]
    fn null_permissions_read_as_empty() {
        let user = UserAccount::builder(1, "john").null_permissions().build();

        assert!(user.permissions.is_none());
        assert!(user.permission_codes().is_empty());
    }

    #[test]
    fn addon_developer_flag_follows_listed_count() {
        let dev = UserAccount::builder(2, "dev").addon_developer(3).build();
        assert!(dev.is_addon_developer);
        assert_eq!(dev.num_addons_listed, 3);

        let none = UserAccount::builder(3, "nodev").addon_developer(0).build();
        assert!(!none.is_addon_developer);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_api_payload() {
        let json = r#"{
            "id": 12345,
            "username": "babar",
            "display_name": null,
            "permissions": null,
            "name": "Firefox user 12345",
            "picture_url": "https://example.com/babar.png",
            "num_addons_listed": 2,
            "is_addon_developer": true,
            "created": "2017-08-15T12:01:13Z"
        }"#;

        let user: UserAccount =
            serde_json::from_str(json).expect("payload should parse");

        assert_eq!(user.id, UserId(12345));
        assert_eq!(user.username, "babar");
        assert_eq!(user.display_name, None);
        assert_eq!(user.permissions, None);
        assert_eq!(user.biography, None);
        assert_eq!(user.num_addons_listed, 2);
        assert!(user.is_addon_developer);
        assert!(!user.is_artist);
    }
}
