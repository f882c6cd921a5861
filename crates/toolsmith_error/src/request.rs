//! Request assembly error types.

/// Specific error conditions while assembling a chat-completion request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RequestErrorKind {
    /// More than one offered tool shares a name.
    #[display("Tool name '{name}' is offered {count} times")]
    AmbiguousName {
        /// Repeated name
        name: String,
        /// How many descriptors carry it
        count: usize,
    },
    /// Tool choice names a tool that is not offered.
    #[display("Tool choice names '{_0}', which is not offered")]
    UnknownChoice(String),
    /// Builder failed.
    #[display("Builder error: {_0}")]
    Builder(String),
}

/// Error type for request assembly.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Request Error: {} at line {} in {}", kind, line, file)]
pub struct RequestError {
    kind: RequestErrorKind,
    line: u32,
    file: &'static str,
}

impl RequestError {
    /// Create a new RequestError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RequestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RequestErrorKind {
        &self.kind
    }
}

impl From<RequestErrorKind> for RequestError {
    #[track_caller]
    fn from(kind: RequestErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for request assembly.
pub type RequestResult<T> = std::result::Result<T, RequestError>;
