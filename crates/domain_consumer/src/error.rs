//! Consumer domain errors

use thiserror::Error;

/// Errors that can occur in the consumer domain
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConsumerError {
    /// Username is already taken, including by a deactivated consumer
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    /// No consumer matches the given username
    #[error("Consumer not found: {0}")]
    ConsumerNotFound(String),

    /// Consumer has been deactivated
    #[error("Consumer is inactive: {0}")]
    ConsumerInactive(String),

    /// Username and password do not match an active consumer
    #[error("Invalid credentials for consumer: {0}")]
    InvalidCredentials(String),
}

impl ConsumerError {
    /// Creates a ConsumerNotFound error from any username type
    pub fn not_found(username: impl std::fmt::Display) -> Self {
        ConsumerError::ConsumerNotFound(username.to_string())
    }

    /// Creates a DuplicateUsername error from any username type
    pub fn duplicate(username: impl std::fmt::Display) -> Self {
        ConsumerError::DuplicateUsername(username.to_string())
    }
}
