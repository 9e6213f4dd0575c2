use std::str::FromStr;

use crate::error::ModelError;

/// Numeric account id as issued by the accounts API
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UserId(pub u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        UserId(id)
    }

    pub fn from_string(id: &str) -> Result<Self, ModelError> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidUserId(id.to_string()));
        }
        trimmed
            .parse::<u64>()
            .map(UserId)
            .map_err(|_| ModelError::InvalidUserId(id.to_string()))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId(id)
    }
}

impl FromStr for UserId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::from_string(s)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
