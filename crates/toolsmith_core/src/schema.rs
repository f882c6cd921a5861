//! Parameter and object schemas.
//!
//! An [`ObjectSchema`] is the ordered set of parameters a tool accepts. It is
//! rendered as the JSON Schema object sent under `parameters`:
//! `{"type": "object", "properties": {...}, "required": [...]}`.

use crate::JsonType;
use derive_getters::Getters;
use serde_json::{Map, Value};
use toolsmith_error::{SchemaError, SchemaErrorKind, SchemaResult};
use tracing::debug;

/// Schema of a single parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSchema {
    /// `{"type": "integer"}`
    Integer,
    /// `{"type": "number"}`
    Number,
    /// `{"type": "string"}`
    String,
    /// `{"type": "boolean"}`
    Boolean,
    /// `{"type": "array"}`, with an `items` schema when the element type is known
    Array(Option<Box<ValueSchema>>),
    /// Free-form mapping, `{"type": "object"}`
    Map,
    /// Nested schema object with its own `properties` and `required`
    Object(ObjectSchema),
}

impl ValueSchema {
    /// Array whose elements follow `items`.
    pub fn array_of(items: ValueSchema) -> Self {
        Self::Array(Some(Box::new(items)))
    }

    /// The JSON Schema type keyword for this value.
    pub fn json_type(&self) -> JsonType {
        match self {
            Self::Integer => JsonType::Integer,
            Self::Number => JsonType::Number,
            Self::String => JsonType::String,
            Self::Boolean => JsonType::Boolean,
            Self::Array(_) => JsonType::Array,
            Self::Map | Self::Object(_) => JsonType::Object,
        }
    }

    /// Renders this value as a JSON Schema fragment.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Object(object) => object.to_json_schema(),
            Self::Array(items) => {
                let mut map = type_map(JsonType::Array);
                if let Some(items) = items {
                    map.insert("items".to_string(), items.to_json());
                }
                Value::Object(map)
            }
            other => Value::Object(type_map(other.json_type())),
        }
    }
}

fn type_map(json_type: JsonType) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("type".to_string(), Value::String(json_type.to_string()));
    map
}

/// A single named parameter of a tool or nested object.
///
/// A parameter is required unless it was given a default or marked optional.
///
/// # Examples
///
/// ```
/// use toolsmith_core::{ParameterSpec, ValueSchema};
///
/// let a = ParameterSpec::new("a", ValueSchema::Integer).with_description("First integer");
/// assert!(*a.required());
///
/// let limit = ParameterSpec::new("limit", ValueSchema::Integer).with_default(10);
/// assert!(!*limit.required());
/// ```
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct ParameterSpec {
    /// Parameter name, unique within its object
    name: String,
    /// Value schema
    schema: ValueSchema,
    /// Human-readable description
    description: Option<String>,
    /// Whether the parameter must be supplied
    required: bool,
    /// Declared default value
    default: Option<Value>,
}

impl ParameterSpec {
    /// Creates a required parameter with no description.
    pub fn new(name: impl Into<String>, schema: ValueSchema) -> Self {
        Self {
            name: name.into(),
            schema,
            description: None,
            required: true,
            default: None,
        }
    }

    /// Attaches a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches an optional description, leaving it unset on `None`.
    pub fn with_description_opt(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Declares a default value, which makes the parameter optional.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self.required = false;
        self
    }

    /// Marks the parameter optional without declaring a default.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// JSON Schema type keyword of this parameter.
    pub fn json_type(&self) -> JsonType {
        self.schema.json_type()
    }

    /// Renders the property entry for this parameter.
    pub fn to_json(&self) -> Value {
        let mut value = self.schema.to_json();
        if let Value::Object(map) = &mut value {
            if let Some(description) = &self.description {
                map.insert(
                    "description".to_string(),
                    Value::String(description.clone()),
                );
            }
            if let Some(default) = &self.default {
                map.insert("default".to_string(), default.clone());
            }
        }
        value
    }
}

/// Ordered collection of uniquely named parameters.
///
/// Iteration order is declaration order, which is also the order of
/// `properties` and `required` in the rendered schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectSchema {
    properties: Vec<ParameterSpec>,
}

impl ObjectSchema {
    /// An object with no parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds an object schema, rejecting empty or repeated parameter names.
    ///
    /// `owner` names the tool or nested schema in error messages.
    pub fn try_new(owner: &str, properties: Vec<ParameterSpec>) -> SchemaResult<Self> {
        for (index, param) in properties.iter().enumerate() {
            if param.name.trim().is_empty() {
                return Err(SchemaError::new(SchemaErrorKind::EmptyParameterName(
                    owner.to_string(),
                )));
            }
            if properties[..index].iter().any(|p| p.name == param.name) {
                return Err(SchemaError::new(SchemaErrorKind::DuplicateParameter {
                    object: owner.to_string(),
                    parameter: param.name.clone(),
                }));
            }
        }
        debug!(owner, count = properties.len(), "Built object schema");
        Ok(Self { properties })
    }

    /// Parameters in declaration order.
    pub fn properties(&self) -> &[ParameterSpec] {
        &self.properties
    }

    /// Looks up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&ParameterSpec> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Names of required parameters, in declaration order.
    pub fn required_names(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True when the object declares no parameters.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Renders `{"type": "object", "properties": {...}, "required": [...]}`.
    ///
    /// `properties` and `required` are always present, even when empty.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &self.properties {
            properties.insert(param.name.clone(), param.to_json());
            if param.required {
                required.push(Value::String(param.name.clone()));
            }
        }

        let mut schema = type_map(JsonType::Object);
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), Value::Array(required));
        Value::Object(schema)
    }
}
