// File: src/error.rs
// Purpose: Error types for session handling

use thiserror::Error;

use crate::session::Role;

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No session stored under key '{key}'")]
    NotFound { key: String },

    #[error("Stored session '{key}' is not valid JSON: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid session: {reason}")]
    Invalid { reason: String },

    #[error("Role {role} may not access this page")]
    Forbidden { role: Role },

    #[error("Invalid session key '{key}'")]
    InvalidKey { key: String },

    #[error("Session storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SessionError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        SessionError::Invalid {
            reason: reason.into(),
        }
    }
}
