//! Error types and result aliases for Marquee.
//!
//! Errors are structured for programmatic handling: the API layer maps each
//! variant onto an HTTP status without inspecting message strings.

use std::fmt;

/// The result type used throughout Marquee.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Marquee operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input failed validation at the registry boundary.
    #[error("validation error: {message}")]
    Validation {
        /// Description of what made the input invalid.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource_type} with id {id}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: &'static str,
        /// The identifier that was looked up.
        id: String,
    },

    /// A seed file line could not be parsed.
    #[error("seed parse error at line {line}: {reason}")]
    SeedParse {
        /// 1-based line number within the seed file.
        line: usize,
        /// Description of the parse failure.
        reason: String,
    },

    /// An I/O error occurred while reading the seed file.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// An internal error occurred that should not happen in normal operation.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl Error {
    /// Creates a new validation error with the given message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a new resource not found error.
    #[must_use]
    pub fn resource_not_found(resource_type: &'static str, id: impl fmt::Display) -> Self {
        Self::ResourceNotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a new seed parse error for the given 1-based line.
    #[must_use]
    pub fn seed_parse(line: usize, reason: impl Into<String>) -> Self {
        Self::SeedParse {
            line,
            reason: reason.into(),
        }
    }

    /// Creates a new internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
