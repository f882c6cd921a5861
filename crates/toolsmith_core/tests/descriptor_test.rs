//! Tests for descriptor rendering.

use serde_json::json;
use toolsmith_core::{
    JsonType, ObjectSchema, ParameterSpec, ToolDescriptor, ValueSchema, serialize,
};
use toolsmith_error::SchemaErrorKind;

fn multiply() -> ToolDescriptor {
    let parameters = ObjectSchema::try_new(
        "multiply",
        vec![
            ParameterSpec::new("a", ValueSchema::Integer).with_description("First integer"),
            ParameterSpec::new("b", ValueSchema::Integer).with_description("Second integer"),
        ],
    )
    .expect("Valid parameters");
    ToolDescriptor::new("multiply", "Multiply two integers together.", parameters)
        .expect("Valid descriptor")
}

#[test]
fn test_modern_shape_matches_wire_format() {
    let rendered = serde_json::to_string(&serialize(&multiply(), false)).unwrap();
    assert_eq!(
        rendered,
        r#"{"type":"function","function":{"name":"multiply","description":"Multiply two integers together.","parameters":{"type":"object","properties":{"a":{"type":"integer","description":"First integer"},"b":{"type":"integer","description":"Second integer"}},"required":["a","b"]}}}"#
    );
}

#[test]
fn test_legacy_shape_is_unwrapped_modern_payload() {
    let descriptor = multiply();
    let modern = serialize(&descriptor, false);
    let legacy = serialize(&descriptor, true);
    assert_eq!(legacy, modern["function"]);
    assert!(legacy.get("type").is_none());
}

#[test]
fn test_serialize_is_idempotent() {
    let descriptor = multiply();
    let first = serde_json::to_string(&descriptor.serialize(false)).unwrap();
    let second = serde_json::to_string(&descriptor.serialize(false)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_typed_shapes_match_json_shapes() {
    let address = ObjectSchema::try_new(
        "Address",
        vec![
            ParameterSpec::new("city", ValueSchema::String).with_description("City name"),
            ParameterSpec::new("zip", ValueSchema::String).optional(),
        ],
    )
    .unwrap();
    let ship = ObjectSchema::try_new(
        "ship",
        vec![
            ParameterSpec::new("to", ValueSchema::Object(address)),
            ParameterSpec::new("items", ValueSchema::array_of(ValueSchema::Number)),
            ParameterSpec::new("express", ValueSchema::Boolean).with_default(false),
        ],
    )
    .unwrap();
    let descriptors = vec![
        multiply(),
        ToolDescriptor::new("ping", "", ObjectSchema::empty()).unwrap(),
        ToolDescriptor::new("ship", "Ship items to an address.", ship).unwrap(),
    ];

    for descriptor in &descriptors {
        let tool = serde_json::to_string(&descriptor.to_tool()).unwrap();
        let function = serde_json::to_string(&descriptor.to_function()).unwrap();
        assert_eq!(
            tool,
            serde_json::to_string(&descriptor.serialize(false)).unwrap()
        );
        assert_eq!(
            function,
            serde_json::to_string(&descriptor.serialize(true)).unwrap()
        );
        assert_eq!(descriptor.to_tool().into_function(), descriptor.to_function());
    }
}

#[test]
fn test_default_parameter_is_not_required() {
    let parameters = ObjectSchema::try_new(
        "search",
        vec![
            ParameterSpec::new("query", ValueSchema::String),
            ParameterSpec::new("limit", ValueSchema::Integer).with_default(10),
            ParameterSpec::new("tag", ValueSchema::String).optional(),
        ],
    )
    .unwrap();
    let descriptor = ToolDescriptor::new("search", "", parameters).unwrap();

    let schema = descriptor.to_json_schema();
    assert_eq!(schema["required"], json!(["query"]));
    assert_eq!(schema["properties"]["limit"]["default"], json!(10));
    assert!(schema["properties"]["tag"].get("default").is_none());
}

#[test]
fn test_empty_parameters_render_empty_object() {
    let descriptor = ToolDescriptor::new("ping", "Check liveness.", ObjectSchema::empty()).unwrap();
    let rendered = serde_json::to_string(&descriptor.serialize(true)).unwrap();
    assert_eq!(
        rendered,
        r#"{"name":"ping","description":"Check liveness.","parameters":{"type":"object","properties":{},"required":[]}}"#
    );
}

#[test]
fn test_properties_keep_declaration_order() {
    let parameters = ObjectSchema::try_new(
        "ordered",
        vec![
            ParameterSpec::new("zeta", ValueSchema::String),
            ParameterSpec::new("alpha", ValueSchema::String),
            ParameterSpec::new("mid", ValueSchema::String),
        ],
    )
    .unwrap();
    let schema = parameters.to_json_schema();
    let keys: Vec<&String> = schema["properties"].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    assert_eq!(schema["required"], json!(["zeta", "alpha", "mid"]));
}

#[test]
fn test_nested_and_array_schemas() {
    let address = ObjectSchema::try_new(
        "Address",
        vec![
            ParameterSpec::new("city", ValueSchema::String),
            ParameterSpec::new("zip", ValueSchema::String).optional(),
        ],
    )
    .unwrap();
    let parameters = ObjectSchema::try_new(
        "ship",
        vec![
            ParameterSpec::new("to", ValueSchema::Object(address)).with_description("Destination"),
            ParameterSpec::new("items", ValueSchema::array_of(ValueSchema::Number)),
            ParameterSpec::new("meta", ValueSchema::Map),
            ParameterSpec::new("tags", ValueSchema::Array(None)),
        ],
    )
    .unwrap();

    let schema = parameters.to_json_schema();
    assert_eq!(
        schema["properties"]["to"],
        json!({
            "type": "object",
            "properties": {"city": {"type": "string"}, "zip": {"type": "string"}},
            "required": ["city"],
            "description": "Destination"
        })
    );
    assert_eq!(
        schema["properties"]["items"],
        json!({"type": "array", "items": {"type": "number"}})
    );
    assert_eq!(schema["properties"]["meta"], json!({"type": "object"}));
    assert_eq!(schema["properties"]["tags"], json!({"type": "array"}));
    assert_eq!(parameters.get("to").unwrap().json_type(), JsonType::Object);
}

#[test]
fn test_duplicate_parameter_rejected() {
    let err = ObjectSchema::try_new(
        "dup",
        vec![
            ParameterSpec::new("a", ValueSchema::Integer),
            ParameterSpec::new("a", ValueSchema::String),
        ],
    )
    .unwrap_err();
    assert_eq!(
        err.kind(),
        &SchemaErrorKind::DuplicateParameter {
            object: "dup".to_string(),
            parameter: "a".to_string(),
        }
    );
}

#[test]
fn test_empty_name_rejected() {
    let err = ToolDescriptor::new("  ", "blank", ObjectSchema::empty()).unwrap_err();
    assert_eq!(err.kind(), &SchemaErrorKind::EmptyName);

    let err = ObjectSchema::try_new("t", vec![ParameterSpec::new("", ValueSchema::Boolean)])
        .unwrap_err();
    assert_eq!(err.kind(), &SchemaErrorKind::EmptyParameterName("t".to_string()));
}
