//! Structured error types for jix-core.
//!
//! Uses `thiserror` for composable library errors; the binary crate wraps
//! these in `anyhow` at the top level. A cancelled selection is not an error
//! (see `selector::Selection`), and a failed browser launch is only a
//! warning (see `dispatch`).

use std::io;

use thiserror::Error;

/// Main error type for jix-core operations
#[derive(Error, Debug)]
pub enum JixError {
    /// Required configuration is missing or unusable
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// The filter expression was empty; never forwarded to the tracker
    #[error("empty query expression")]
    EmptyQuery,

    /// The tracker rejected the query or the request failed in transit
    #[error("query failed: {reason}")]
    Query { reason: String },

    /// The selector subprocess failed to start or exited unexpectedly
    #[error("selector error: {reason}")]
    Selector { reason: String },

    /// Fetching a single issue's detail failed
    #[error("failed to fetch issue {key}: {reason}")]
    Fetch { key: String, reason: String },

    /// Rich-text to markdown conversion failed
    #[error("description conversion failed: {reason}")]
    Convert { reason: String },

    /// I/O failure driving a subprocess pipe
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for jix-core operations
pub type Result<T> = std::result::Result<T, JixError>;

impl JixError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create a query error
    pub fn query(reason: impl Into<String>) -> Self {
        Self::Query {
            reason: reason.into(),
        }
    }

    /// Create a selector error
    pub fn selector(reason: impl Into<String>) -> Self {
        Self::Selector {
            reason: reason.into(),
        }
    }

    /// Create a fetch error for one issue key
    pub fn fetch(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Fetch {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a conversion error
    pub fn convert(reason: impl Into<String>) -> Self {
        Self::Convert {
            reason: reason.into(),
        }
    }
}
