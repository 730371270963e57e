//! Error types and result aliases for Sprout.
//!
//! One structured error enum is shared by every component. API rejections
//! keep the backend's human-readable message when one is present; callers
//! supply a per-operation fallback for responses that carry none.

use std::fmt;

/// The result type used throughout Sprout.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Sprout operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backend rejected the request with a non-2xx status.
    #[error("api error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Human-readable message (backend-supplied, or the caller's fallback).
        message: String,
    },

    /// The request never produced a response (connect, timeout, TLS).
    #[error("transport error: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
        /// The underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("decode error: {message}")]
    Decode {
        /// Description of the decode failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource} with id {id}")]
    NotFound {
        /// The type of resource that was not found.
        resource: &'static str,
        /// The identifier that was looked up.
        id: String,
    },

    /// Invalid input was provided by the caller.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The operation requires a bearer credential and none was supplied.
    #[error("missing credentials: a bearer token is required")]
    MissingAuth,
}

impl Error {
    /// Creates an API error from a status code and an optional backend
    /// message, falling back to `fallback` when the backend sent none.
    #[must_use]
    pub fn api(status: u16, message: Option<String>, fallback: &str) -> Self {
        Self::Api {
            status,
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string()),
        }
    }

    /// Creates a transport error with a source cause.
    #[must_use]
    pub fn transport(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a decode error with the given message.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Returns the HTTP status code for API errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
