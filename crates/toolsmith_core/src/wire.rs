//! Wire shapes for offering tools to a chat-completion API.
//!
//! The modern shape wraps a [`FunctionDefinition`] in a [`ToolDefinition`]
//! tagged `"type": "function"`. The legacy `functions` list carries the bare
//! [`FunctionDefinition`].

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind tag of a modern tool entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ToolKind {
    /// A callable function
    #[default]
    Function,
}

/// Flat function description used by the legacy `functions` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct FunctionDefinition {
    /// Function name
    name: String,
    /// What the function does
    description: String,
    /// JSON Schema of the arguments object
    parameters: Value,
}

impl FunctionDefinition {
    /// Creates a function definition.
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// Wraps this definition in the modern tool shape.
    pub fn into_tool(self) -> ToolDefinition {
        ToolDefinition {
            kind: ToolKind::Function,
            function: self,
        }
    }
}

/// Modern tool entry: `{"type": "function", "function": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ToolDefinition {
    /// Always `function`
    #[serde(rename = "type")]
    kind: ToolKind,
    /// Wrapped function description
    function: FunctionDefinition,
}

impl ToolDefinition {
    /// Unwraps the legacy payload.
    pub fn into_function(self) -> FunctionDefinition {
        self.function
    }
}

impl From<FunctionDefinition> for Value {
    /// Same object `serde_json::to_value` produces, without the fallible step.
    fn from(function: FunctionDefinition) -> Self {
        let mut object = Map::new();
        object.insert("name".to_string(), Value::String(function.name));
        object.insert("description".to_string(), Value::String(function.description));
        object.insert("parameters".to_string(), function.parameters);
        Value::Object(object)
    }
}

impl From<ToolDefinition> for Value {
    fn from(tool: ToolDefinition) -> Self {
        let mut object = Map::new();
        object.insert("type".to_string(), Value::String(tool.kind.to_string()));
        object.insert("function".to_string(), Value::from(tool.function));
        Value::Object(object)
    }
}
