use std::io;
use std::result::Result as StdResult;

use thiserror::Error;

/// Errors that can occur while loading or normalizing laureate data
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid date '{value}' in field {field}: expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("Invalid address role: {0}")]
    InvalidRole(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = StdResult<T, CoreError>;
