//! Schema mapping error types.

/// Specific error conditions raised while normalizing a source into a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SchemaErrorKind {
    /// A declared type has no JSON Schema primitive and no nested schema.
    #[display(
        "Parameter '{parameter}' of '{tool}' has type '{type_name}' with no JSON Schema mapping"
    )]
    UnmappableType {
        /// Descriptor being built
        tool: String,
        /// Dotted path of the offending parameter
        parameter: String,
        /// The declared type as written in the source
        type_name: String,
    },
    /// Two parameters in the same object share a name.
    #[display("Parameter '{parameter}' is declared more than once in '{object}'")]
    DuplicateParameter {
        /// Object (tool or nested schema) holding the parameters
        object: String,
        /// Repeated parameter name
        parameter: String,
    },
    /// A parameter was declared without a name.
    #[display("'{_0}' declares a parameter with an empty name")]
    EmptyParameterName(String),
    /// Descriptor name is empty.
    #[display("Tool name must not be empty")]
    EmptyName,
    /// A schema-object reference could not be found.
    #[display("Schema '{_0}' is not declared")]
    UnresolvedSchema(String),
    /// A schema-object refers back to itself.
    #[display("Schema '{_0}' refers to itself")]
    RecursiveSchema(String),
    /// A Rust type or JSON Schema given as a schema object has no properties.
    #[display("Type '{_0}' does not describe an object")]
    NotAnObject(String),
}

/// Error type for schema mapping failures.
///
/// # Examples
///
/// ```
/// use toolsmith_error::{SchemaError, SchemaErrorKind};
///
/// let err = SchemaError::new(SchemaErrorKind::EmptyName);
/// assert!(format!("{}", err).contains("must not be empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Schema Mapping Error: {} at line {} in {}", kind, line, file)]
pub struct SchemaError {
    kind: SchemaErrorKind,
    line: u32,
    file: &'static str,
}

impl SchemaError {
    /// Create a new SchemaError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SchemaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SchemaErrorKind {
        &self.kind
    }

    /// Line number where the error occurred.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Source file where the error occurred.
    pub fn file(&self) -> &'static str {
        self.file
    }
}

impl From<SchemaErrorKind> for SchemaError {
    #[track_caller]
    fn from(kind: SchemaErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for schema mapping.
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;
