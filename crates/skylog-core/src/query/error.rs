//! Query errors

use thiserror::Error;

/// Errors that can occur when querying a parameter series
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("malformed parameter name '{0}': expected TYPE.FIELD")]
    MalformedName(String),

    #[error("unknown message type: {0}")]
    UnknownMessageType(String),
}
