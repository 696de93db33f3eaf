//! Error types for site content loading

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Malformed site content: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ContentResult<T> = Result<T, ContentError>;
