use std::path::PathBuf;
use thiserror::Error;

/// A malformed item id handed to the item store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidId {
    #[error("Expected id to be a string, but got '{0}'.")]
    NotAString(&'static str),

    #[error("id cannot be blank")]
    Blank,

    #[error("The '/' character is not allowed in item ids. Invalid value was '{0}'.")]
    ReservedSeparator(String),
}

/// Failures reading or writing the backing document.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The document is missing, empty or unparsable. The item store heals this
    /// once per operation by writing an empty document.
    #[error("Store is not initialized: {0}")]
    Uninitialized(String),

    #[error("Store document at {0} is not a JSON object")]
    NotAnObject(PathBuf),

    #[error("Store error: {0}")]
    Backend(String),
}

/// An empty string was supplied where a joke id is required.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("JokeId cannot be empty")]
pub struct JokeIdError;

#[derive(Error, Debug)]
pub enum JokeAppError {
    #[error(transparent)]
    InvalidId(#[from] InvalidId),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    JokeId(#[from] JokeIdError),

    #[error("Uuid: {0}")]
    Uuid(String),
}

impl From<std::io::Error> for JokeAppError {
    fn from(err: std::io::Error) -> Self {
        JokeAppError::Storage(StorageError::Io(err))
    }
}

impl From<serde_json::Error> for JokeAppError {
    fn from(err: serde_json::Error) -> Self {
        JokeAppError::Storage(StorageError::Serialization(err))
    }
}

pub type Result<T> = std::result::Result<T, JokeAppError>;
