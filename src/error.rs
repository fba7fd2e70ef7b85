//! Error types for NetworkBook.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// A failure to turn raw user input into a domain value.
///
/// The message is meant to be shown to the user unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    /// Create a parse error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ValidationError> for ParseError {
    fn from(err: ValidationError) -> Self {
        Self::new(err.to_string())
    }
}

/// Errors that can occur while executing a command against the network book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Index does not point at a person in the list
    #[error("The person index provided is invalid")]
    InvalidIndex,

    /// The result would hold two entries for the same person
    #[error("This person already exists in the network book.")]
    DuplicatePerson,

    /// Edit descriptor carries no fields
    #[error("At least one field to edit must be provided.")]
    NotEdited,

    /// Find query carries no criteria
    #[error("At least one search criterion must be provided.")]
    NoSearchCriteria,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
