//! Normalized tool descriptor and its serializers.

use crate::{FunctionDefinition, ObjectSchema, ParameterSpec, ToolDefinition};
use derive_getters::Getters;
use serde_json::Value;
use toolsmith_error::{SchemaError, SchemaErrorKind, SchemaResult};
use tracing::instrument;

/// A normalized description of a callable capability.
///
/// Built once per normalization and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use toolsmith_core::{ObjectSchema, ParameterSpec, ToolDescriptor, ValueSchema};
///
/// let parameters = ObjectSchema::try_new(
///     "multiply",
///     vec![
///         ParameterSpec::new("a", ValueSchema::Integer).with_description("First integer"),
///         ParameterSpec::new("b", ValueSchema::Integer).with_description("Second integer"),
///     ],
/// )
/// .unwrap();
/// let descriptor =
///     ToolDescriptor::new("multiply", "Multiply two integers together.", parameters).unwrap();
///
/// let modern = descriptor.serialize(false);
/// assert_eq!(modern["type"], "function");
/// assert_eq!(modern["function"], descriptor.serialize(true));
/// ```
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct ToolDescriptor {
    /// Identifier of the underlying capability
    name: String,
    /// What the capability does, possibly empty
    description: String,
    /// Arguments the capability accepts
    parameters: ObjectSchema,
}

impl ToolDescriptor {
    /// Creates a descriptor, rejecting an empty name.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: ObjectSchema,
    ) -> SchemaResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SchemaError::new(SchemaErrorKind::EmptyName));
        }
        Ok(Self {
            name,
            description: description.into(),
            parameters,
        })
    }

    /// Looks up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.get(name)
    }

    /// JSON Schema of the arguments object.
    pub fn to_json_schema(&self) -> Value {
        self.parameters.to_json_schema()
    }

    /// Typed legacy shape.
    pub fn to_function(&self) -> FunctionDefinition {
        FunctionDefinition::new(
            self.name.clone(),
            self.description.clone(),
            self.to_json_schema(),
        )
    }

    /// Typed modern shape.
    pub fn to_tool(&self) -> ToolDefinition {
        self.to_function().into_tool()
    }

    /// Renders the descriptor as a JSON object in the modern or legacy shape.
    ///
    /// The legacy shape is exactly the `function` member of the modern one.
    /// Both go through [`to_function`](Self::to_function) and
    /// [`to_tool`](Self::to_tool), so the typed and untyped renderings agree.
    #[instrument(skip(self), fields(name = %self.name))]
    pub fn serialize(&self, legacy: bool) -> Value {
        if legacy {
            Value::from(self.to_function())
        } else {
            Value::from(self.to_tool())
        }
    }
}

/// Renders `descriptor` in the modern (`legacy = false`) or legacy shape.
pub fn serialize(descriptor: &ToolDescriptor, legacy: bool) -> Value {
    descriptor.serialize(legacy)
}
