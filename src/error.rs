//! Error types for the astro-stats roster store

use thiserror::Error;


pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Roster data is not yet available")]
    NotReady,

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Data directory not provided and could not be derived (set {env_var})")]
    MissingDataDir { env_var: String },
}

impl RosterError {
    /// Shorthand for a [`RosterError::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        RosterError::Validation {
            message: message.into(),
        }
    }

    /// True for errors raised while reading or writing durable storage.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            RosterError::Json(_)
                | RosterError::Io(_)
                | RosterError::Sqlite(_)
                | RosterError::Storage { .. }
        )
    }
}
