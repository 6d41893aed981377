//! Error types for the session store

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no user is signed in")]
    NotAuthenticated,

    #[error("credential too short (minimum {min} characters)")]
    CredentialTooShort { min: usize },

    #[error("insufficient funds: need {required}, have {available}")]
    InsufficientFunds { required: i64, available: i64 },

    #[error("alert {0} not found")]
    AlertNotFound(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("corrupt user snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
