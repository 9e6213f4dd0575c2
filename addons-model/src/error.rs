use thiserror::Error;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid user id: {0:?}")]
    InvalidUserId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
