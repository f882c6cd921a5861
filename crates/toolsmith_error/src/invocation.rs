//! Invocation error types.
//!
//! These cover invocation requests returned by a model. Checking them is the
//! caller's job; the descriptor model never validates arguments on its own.

/// Specific error conditions for returned invocation requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InvocationErrorKind {
    /// The model asked for a tool that was never offered.
    #[display("Tool '{_0}' was not offered in the request")]
    UnknownTool(String),
    /// Argument keys do not satisfy the descriptor.
    #[display(
        "Arguments for '{tool}' do not match its parameters (missing: {missing:?}, unexpected: {unexpected:?})"
    )]
    ArgumentMismatch {
        /// Tool the arguments were meant for
        tool: String,
        /// Required parameters that were not supplied
        missing: Vec<String>,
        /// Supplied keys that are not declared parameters
        unexpected: Vec<String>,
    },
    /// Arguments decoded to something other than a JSON object.
    #[display("Arguments for '{_0}' are not a JSON object")]
    ArgumentsNotObject(String),
    /// Arguments could not be decoded as JSON.
    #[display("Arguments for '{tool}' are not valid JSON: {message}")]
    MalformedArguments {
        /// Tool the arguments were meant for
        tool: String,
        /// Decoder message
        message: String,
    },
    /// Response carried no choices at all.
    #[display("Response contains no choices")]
    NoChoices,
}

/// Error type for invocation checks.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invocation Error: {} at line {} in {}", kind, line, file)]
pub struct InvocationError {
    kind: InvocationErrorKind,
    line: u32,
    file: &'static str,
}

impl InvocationError {
    /// Create a new InvocationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InvocationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &InvocationErrorKind {
        &self.kind
    }
}

impl From<InvocationErrorKind> for InvocationError {
    #[track_caller]
    fn from(kind: InvocationErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for invocation checks.
pub type InvocationResult<T> = std::result::Result<T, InvocationError>;
