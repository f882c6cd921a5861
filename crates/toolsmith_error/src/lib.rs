//! Error types for the Toolsmith library.
//!
//! This crate provides the error types used throughout the Toolsmith workspace.
//! Each domain error records the source location where it was raised, and
//! [`ToolsmithError`] aggregates all of them for callers that want a single type.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod invocation;
mod json;
mod request;
mod schema;

pub use config::ConfigError;
pub use invocation::{InvocationError, InvocationErrorKind, InvocationResult};
pub use json::JsonError;
pub use request::{RequestError, RequestErrorKind, RequestResult};
pub use schema::{SchemaError, SchemaErrorKind, SchemaResult};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum ToolsmithErrorKind {
    /// Source could not be mapped to a descriptor
    #[display("{_0}")]
    Schema(SchemaError),
    /// Request could not be assembled
    #[display("{_0}")]
    Request(RequestError),
    /// Returned invocation failed a caller-side check
    #[display("{_0}")]
    Invocation(InvocationError),
    /// Configuration error
    #[display("{_0}")]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[display("{_0}")]
    Json(JsonError),
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for ToolsmithErrorKind {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::Json(JsonError::from(err))
    }
}

/// Toolsmith error with kind discrimination.
#[derive(Debug)]
pub struct ToolsmithError(Box<ToolsmithErrorKind>);

impl ToolsmithError {
    /// Create a new error from a kind.
    pub fn new(kind: ToolsmithErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ToolsmithErrorKind {
        &self.0
    }
}

impl std::fmt::Display for ToolsmithError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Toolsmith Error: {}", self.0)
    }
}

impl std::error::Error for ToolsmithError {}

// Generic From implementation for any type that converts to ToolsmithErrorKind
impl<T> From<T> for ToolsmithError
where
    T: Into<ToolsmithErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Toolsmith operations.
pub type ToolsmithResult<T> = std::result::Result<T, ToolsmithError>;
