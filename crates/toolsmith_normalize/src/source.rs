//! Source representations of a callable capability.

use crate::TypeRef;
use derive_getters::Getters;
use serde_json::Value;

/// A parameter of a plain function.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct ParamDecl {
    /// Parameter name
    name: String,
    /// Declared type
    type_ref: TypeRef,
    /// Default value, if the function declares one
    default: Option<Value>,
    /// Whether a default exists even when its value is unknown
    has_default: bool,
}

impl ParamDecl {
    /// Creates a parameter with no default.
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            default: None,
            has_default: false,
        }
    }

    /// Declares a default value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self.has_default = true;
        self
    }

    /// Declares that a default exists without recording its value.
    pub fn defaulted(mut self) -> Self {
        self.has_default = true;
        self
    }
}

/// A plain function: identifier, documentation block and typed parameters.
///
/// # Examples
///
/// ```
/// use toolsmith_normalize::{CallableSource, ParamDecl, TypeRef};
///
/// let multiply = CallableSource::new(
///     "multiply",
///     "Multiply two integers together.\n\nArgs:\n    a: First integer\n    b: Second integer",
/// )
/// .with_param(ParamDecl::new("a", TypeRef::Integer))
/// .with_param(ParamDecl::new("b", TypeRef::Integer));
///
/// assert_eq!(multiply.params().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct CallableSource {
    /// Routine identifier
    name: String,
    /// Documentation block
    doc: String,
    /// Parameters in declaration order
    params: Vec<ParamDecl>,
}

impl CallableSource {
    /// Creates a function with no parameters.
    pub fn new(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: doc.into(),
            params: Vec::new(),
        }
    }

    /// Appends a parameter.
    pub fn with_param(mut self, param: ParamDecl) -> Self {
        self.params.push(param);
        self
    }
}

/// A typed field of a schema object.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct FieldDecl {
    /// Field name
    name: String,
    /// Declared type
    type_ref: TypeRef,
    /// Field-level description, which wins over documentation
    description: Option<String>,
    /// Default value, if declared
    default: Option<Value>,
    /// Whether a default exists even when its value is unknown
    has_default: bool,
}

impl FieldDecl {
    /// Creates a field with no description or default.
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            description: None,
            default: None,
            has_default: false,
        }
    }

    /// Attaches a field-level description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declares a default value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self.has_default = true;
        self
    }

    /// Declares that a default exists without recording its value.
    pub fn defaulted(mut self) -> Self {
        self.has_default = true;
        self
    }
}

/// A class-like declaration of named, typed fields.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct SchemaObject {
    /// Class identifier
    name: String,
    /// Class-level documentation
    doc: String,
    /// Fields in declaration order
    fields: Vec<FieldDecl>,
}

impl SchemaObject {
    /// Creates a schema object with no fields.
    pub fn new(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: doc.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }
}

/// A tool object carrying an explicit name and description plus the schema
/// object describing its arguments.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct ToolWrapper {
    /// Name offered to the model, used verbatim
    name: String,
    /// Description offered to the model, used verbatim
    description: String,
    /// Argument schema
    args_schema: SchemaObject,
}

impl ToolWrapper {
    /// Creates a tool wrapper.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        args_schema: SchemaObject,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            args_schema,
        }
    }
}

/// Any of the supported source representations.
#[derive(Debug, Clone, PartialEq, derive_more::From)]
pub enum Source {
    /// Plain function
    Callable(CallableSource),
    /// Schema-object class
    SchemaObject(SchemaObject),
    /// Tool wrapper
    ToolWrapper(ToolWrapper),
}

impl Source {
    /// Name of the underlying declaration.
    pub fn name(&self) -> &str {
        match self {
            Self::Callable(source) => source.name(),
            Self::SchemaObject(source) => source.name(),
            Self::ToolWrapper(source) => source.name(),
        }
    }

    /// Short label for the variant, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Callable(_) => "callable",
            Self::SchemaObject(_) => "schema_object",
            Self::ToolWrapper(_) => "tool_wrapper",
        }
    }
}
