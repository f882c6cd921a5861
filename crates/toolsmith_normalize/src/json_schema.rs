//! Declared types read from JSON Schema, including schemas generated for
//! Rust types deriving [`schemars::JsonSchema`].
//!
//! Subschemas are inlined at generation time, so a nested struct arrives as
//! an object schema in place. A type that refers to itself keeps a `$ref`,
//! which reads back as [`TypeRef::Custom`] and fails at normalization.

use crate::{FieldDecl, SchemaObject, TypeRef};
use schemars::JsonSchema;
use schemars::generate::SchemaSettings;
use serde_json::{Map, Value};
use toolsmith_error::{SchemaError, SchemaErrorKind, SchemaResult};
use tracing::debug;

/// Root JSON Schema for `T`, with every subschema inlined.
pub(crate) fn root_schema_for<T: JsonSchema>() -> Value {
    SchemaSettings::default()
        .with(|settings| {
            settings.inline_subschemas = true;
        })
        .into_generator()
        .into_root_schema_for::<T>()
        .to_value()
}

impl TypeRef {
    /// Reads a declared type back out of a JSON Schema fragment.
    ///
    /// Fragments with no mapping become [`TypeRef::Custom`] carrying their
    /// title, reference target or JSON text.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use toolsmith_normalize::TypeRef;
    ///
    /// assert_eq!(
    ///     TypeRef::from_json_schema(&json!({"type": ["integer", "null"]})),
    ///     TypeRef::optional(TypeRef::Integer)
    /// );
    /// ```
    pub fn from_json_schema(schema: &Value) -> Self {
        let Some(object) = schema.as_object() else {
            return Self::Custom(schema.to_string());
        };

        if let Some(reference) = object.get("$ref").and_then(Value::as_str) {
            let target = reference.rsplit('/').next().unwrap_or(reference);
            return Self::Custom(target.to_string());
        }

        for key in ["anyOf", "oneOf"] {
            if let Some(alternatives) = object.get(key).and_then(Value::as_array) {
                return from_alternatives(object, alternatives);
            }
        }

        match object.get("type") {
            Some(Value::String(name)) => from_type_name(name, object),
            Some(Value::Array(names)) => {
                let present: Vec<&str> = names
                    .iter()
                    .filter_map(Value::as_str)
                    .filter(|name| *name != "null")
                    .collect();
                match present.as_slice() {
                    [single] if present.len() < names.len() => {
                        Self::optional(from_type_name(single, object))
                    }
                    [single] => from_type_name(single, object),
                    _ => Self::Custom(describe(object)),
                }
            }
            _ => Self::Custom(describe(object)),
        }
    }
}

impl SchemaObject {
    /// Schema object for a Rust struct deriving [`schemars::JsonSchema`].
    ///
    /// The struct's doc comment becomes the documentation block and field doc
    /// comments become field descriptions. Fields outside the schema's
    /// `required` list are declared defaulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use schemars::JsonSchema;
    /// use toolsmith_normalize::SchemaObject;
    ///
    /// /// Multiply two integers together.
    /// #[derive(JsonSchema)]
    /// struct Multiply {
    ///     /// First integer
    ///     a: i64,
    ///     /// Second integer
    ///     b: i64,
    /// }
    ///
    /// let object = SchemaObject::of::<Multiply>().unwrap();
    /// assert_eq!(object.name(), "Multiply");
    /// assert_eq!(object.fields().len(), 2);
    /// ```
    pub fn of<T: JsonSchema>() -> SchemaResult<Self> {
        let name = T::schema_name().into_owned();
        let schema = root_schema_for::<T>();

        match schema.as_object() {
            Some(object) if object.contains_key("properties") => {
                let object = schema_object(&name, object);
                debug!(schema = %name, fields = object.fields().len(), "Read schema object from Rust type");
                Ok(object)
            }
            _ => Err(SchemaError::new(SchemaErrorKind::NotAnObject(name))),
        }
    }

    /// Schema object read from a JSON Schema with `properties`.
    pub fn from_json_schema(name: impl Into<String>, schema: &Value) -> SchemaResult<Self> {
        let name = name.into();
        match schema.as_object() {
            Some(object) if object.contains_key("properties") => Ok(schema_object(&name, object)),
            _ => Err(SchemaError::new(SchemaErrorKind::NotAnObject(name))),
        }
    }
}

fn from_type_name(name: &str, object: &Map<String, Value>) -> TypeRef {
    match name {
        "integer" => TypeRef::Integer,
        "number" => TypeRef::Float,
        "string" => TypeRef::Text,
        "boolean" => TypeRef::Boolean,
        "array" => TypeRef::Sequence(
            object
                .get("items")
                .filter(|items| items.is_object())
                .map(|items| Box::new(TypeRef::from_json_schema(items))),
        ),
        "object" if object.contains_key("properties") => {
            let title = object
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or("object");
            TypeRef::schema(schema_object(title, object))
        }
        "object" => TypeRef::Mapping,
        other => TypeRef::Custom(other.to_string()),
    }
}

/// `anyOf`/`oneOf` is only mappable as one schema, optionally with `null`.
fn from_alternatives(object: &Map<String, Value>, alternatives: &[Value]) -> TypeRef {
    let present: Vec<&Value> = alternatives
        .iter()
        .filter(|alternative| alternative.get("type").and_then(Value::as_str) != Some("null"))
        .collect();

    match present.as_slice() {
        [single] if present.len() < alternatives.len() => {
            TypeRef::optional(TypeRef::from_json_schema(single))
        }
        [single] => TypeRef::from_json_schema(single),
        _ => TypeRef::Custom(describe(object)),
    }
}

fn schema_object(name: &str, object: &Map<String, Value>) -> SchemaObject {
    let doc = object
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let required: Vec<&str> = object
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut schema = SchemaObject::new(name, doc);
    let properties = object.get("properties").and_then(Value::as_object);
    for (field, property) in properties.into_iter().flatten() {
        let mut declared = FieldDecl::new(field, TypeRef::from_json_schema(property));
        if let Some(description) = property.get("description").and_then(Value::as_str) {
            declared = declared.with_description(description);
        }
        if let Some(default) = property.get("default") {
            declared = declared.with_default(default.clone());
        } else if !required.contains(&field.as_str()) {
            declared = declared.defaulted();
        }
        schema = schema.with_field(declared);
    }
    schema
}

fn describe(object: &Map<String, Value>) -> String {
    match object.get("title").and_then(Value::as_str) {
        Some(title) => title.to_string(),
        None => Value::Object(object.clone()).to_string(),
    }
}
