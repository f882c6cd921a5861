//! Tests for normalizing each source variant.

use serde_json::json;
use toolsmith_core::ValueSchema;
use toolsmith_error::SchemaErrorKind;
use toolsmith_normalize::*;

const MULTIPLY_JSON: &str = r#"{"type":"function","function":{"name":"multiply","description":"Multiply two integers together.","parameters":{"type":"object","properties":{"a":{"type":"integer","description":"First integer"},"b":{"type":"integer","description":"Second integer"}},"required":["a","b"]}}}"#;

fn multiply_callable() -> CallableSource {
    CallableSource::new(
        "multiply",
        r#"Multiply two integers together.

        Args:
            a: First integer
            b: Second integer
        "#,
    )
    .with_param(ParamDecl::new("a", TypeRef::Integer))
    .with_param(ParamDecl::new("b", TypeRef::Integer))
}

fn multiply_schema(name: &str) -> SchemaObject {
    SchemaObject::new(name, "Multiply two integers together.")
        .with_field(FieldDecl::new("a", TypeRef::Integer).with_description("First integer"))
        .with_field(FieldDecl::new("b", TypeRef::Integer).with_description("Second integer"))
}

fn render(source: impl Into<Source>) -> String {
    let descriptor = normalize(&source.into()).expect("Source should normalize");
    serde_json::to_string(&descriptor.serialize(false)).unwrap()
}

// ============================================================================
// Variant equivalence
// ============================================================================

#[test]
fn test_callable_matches_wire_format() {
    assert_eq!(render(multiply_callable()), MULTIPLY_JSON);
}

#[test]
fn test_schema_object_matches_wire_format() {
    assert_eq!(render(multiply_schema("multiply")), MULTIPLY_JSON);
}

#[test]
fn test_tool_wrapper_matches_wire_format() {
    let wrapper = ToolWrapper::new(
        "multiply",
        "Multiply two integers together.",
        multiply_schema("MultiplyInput"),
    );
    assert_eq!(render(wrapper), MULTIPLY_JSON);
}

#[test]
fn test_tool_wrapper_uses_explicit_name_and_description() {
    let args = SchemaObject::new("CalculatorInput", "Inputs for the calculator.")
        .with_field(FieldDecl::new("a", TypeRef::Integer));
    let wrapper = ToolWrapper::new("Calculator", "Useful for when you need math", args);

    let descriptor = normalize(&wrapper.into()).unwrap();
    assert_eq!(descriptor.name(), "Calculator");
    assert_eq!(descriptor.description(), "Useful for when you need math");
}

// ============================================================================
// Required and defaults
// ============================================================================

#[test]
fn test_defaulted_parameters_are_not_required() {
    let search = CallableSource::new("search", "Search the index.")
        .with_param(ParamDecl::new("query", TypeRef::Text))
        .with_param(ParamDecl::new("limit", TypeRef::Integer).with_default(10))
        .with_param(ParamDecl::new("fuzzy", TypeRef::Boolean).defaulted())
        .with_param(ParamDecl::new("tag", TypeRef::optional(TypeRef::Text)));

    let descriptor = normalize(&search.into()).unwrap();
    let schema = descriptor.to_json_schema();
    assert_eq!(schema["required"], json!(["query"]));
    assert_eq!(schema["properties"]["limit"]["default"], json!(10));
    assert_eq!(schema["properties"]["tag"]["type"], "string");
}

#[test]
fn test_field_defaults_are_not_required() {
    let object = SchemaObject::new("Query", "A query.")
        .with_field(FieldDecl::new("text", TypeRef::Text))
        .with_field(FieldDecl::new("page", TypeRef::Integer).with_default(1));

    let descriptor = normalize(&object.into()).unwrap();
    let required: Vec<&str> = descriptor.parameters().required_names().collect();
    assert_eq!(required, vec!["text"]);
}

#[test]
fn test_no_parameters() {
    let ping = CallableSource::new("ping", "Check that the service is alive.");
    let descriptor = normalize(&ping.into()).unwrap();
    assert_eq!(
        descriptor.to_json_schema(),
        json!({"type": "object", "properties": {}, "required": []})
    );
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_unmappable_type_fails() {
    let source = CallableSource::new("draw", "Draw a shape.")
        .with_param(ParamDecl::new("size", TypeRef::Integer))
        .with_param(ParamDecl::new("shape", TypeRef::parse("Shape")));

    let err = normalize(&source.into()).unwrap_err();
    assert_eq!(
        err.kind(),
        &SchemaErrorKind::UnmappableType {
            tool: "draw".to_string(),
            parameter: "shape".to_string(),
            type_name: "Shape".to_string(),
        }
    );
}

#[test]
fn test_unmappable_nested_item_reports_path() {
    let inner = SchemaObject::new("Inner", "")
        .with_field(FieldDecl::new("points", TypeRef::sequence_of(TypeRef::parse("Point"))));
    let outer = SchemaObject::new("Outer", "")
        .with_field(FieldDecl::new("inner", TypeRef::schema(inner)));

    let err = normalize(&outer.into()).unwrap_err();
    assert!(matches!(
        err.kind(),
        SchemaErrorKind::UnmappableType { parameter, .. } if parameter == "inner.points[]"
    ));
}

#[test]
fn test_duplicate_field_fails() {
    let object = SchemaObject::new("Dup", "")
        .with_field(FieldDecl::new("a", TypeRef::Integer))
        .with_field(FieldDecl::new("a", TypeRef::Text));
    let err = normalize(&object.into()).unwrap_err();
    assert!(matches!(err.kind(), SchemaErrorKind::DuplicateParameter { .. }));
}

// ============================================================================
// Descriptions
// ============================================================================

#[test]
fn test_field_description_wins_over_docstring() {
    let object = SchemaObject::new(
        "Greeting",
        "Say hello.\n\nAttributes:\n    name: Who to greet\n    loud: Whether to shout",
    )
    .with_field(FieldDecl::new("name", TypeRef::Text).with_description("Person's name"))
    .with_field(FieldDecl::new("loud", TypeRef::Boolean));

    let descriptor = normalize(&object.into()).unwrap();
    assert_eq!(descriptor.description(), "Say hello.");
    let schema = descriptor.to_json_schema();
    assert_eq!(schema["properties"]["name"]["description"], "Person's name");
    assert_eq!(schema["properties"]["loud"]["description"], "Whether to shout");
}

#[test]
fn test_undocumented_parameter_has_no_description() {
    let source = CallableSource::new("echo", "Echo text back.")
        .with_param(ParamDecl::new("text", TypeRef::Text));
    let descriptor = normalize(&source.into()).unwrap();
    assert!(
        descriptor.to_json_schema()["properties"]["text"]
            .get("description")
            .is_none()
    );
}

#[test]
fn test_nested_schema_object_recurses() {
    let address = SchemaObject::new("Address", "A postal address.")
        .with_field(FieldDecl::new("city", TypeRef::Text).with_description("City name"))
        .with_field(FieldDecl::new("zip", TypeRef::optional(TypeRef::Text)));
    let person = SchemaObject::new("Person", "A person.")
        .with_field(FieldDecl::new("name", TypeRef::Text))
        .with_field(FieldDecl::new("home", TypeRef::schema(address)))
        .with_field(FieldDecl::new("tags", TypeRef::parse("list[str]")));

    let descriptor = normalize(&person.into()).unwrap();
    let home = descriptor.parameter("home").unwrap();
    assert!(matches!(home.schema(), ValueSchema::Object(_)));

    let schema = descriptor.to_json_schema();
    assert_eq!(
        schema["properties"]["home"],
        json!({
            "type": "object",
            "properties": {
                "city": {"type": "string", "description": "City name"},
                "zip": {"type": "string"}
            },
            "required": ["city"],
            "description": "A postal address."
        })
    );
    assert_eq!(
        schema["properties"]["tags"],
        json!({"type": "array", "items": {"type": "string"}})
    );
    assert_eq!(schema["required"], json!(["name", "home", "tags"]));
}

// ============================================================================
// Extractors
// ============================================================================

struct FixedDocs;

impl DocExtractor for FixedDocs {
    fn extract(&self, _doc: &str) -> DocSummary {
        let mut params = std::collections::HashMap::new();
        params.insert("a".to_string(), "From a custom extractor".to_string());
        DocSummary::new("Custom summary", params)
    }
}

#[test]
fn test_custom_extractor_is_used() {
    let normalizer = Normalizer::with_extractor(FixedDocs);
    let descriptor = normalizer
        .normalize(&multiply_callable().into())
        .unwrap();
    assert_eq!(descriptor.description(), "Custom summary");
    assert_eq!(
        descriptor.parameter("a").unwrap().description().as_deref(),
        Some("From a custom extractor")
    );
    assert!(descriptor.parameter("b").unwrap().description().is_none());
}

#[test]
fn test_rustdoc_style_normalizer() {
    let source = CallableSource::new(
        "multiply",
        "Multiply two integers together.\n\n# Arguments\n\n* `a` - First integer\n* `b` - Second integer",
    )
    .with_param(ParamDecl::new("a", TypeRef::of::<i64>()))
    .with_param(ParamDecl::new("b", TypeRef::of::<i64>()));

    let descriptor = Normalizer::new(DocStyle::Rustdoc)
        .normalize(&source.into())
        .unwrap();
    assert_eq!(
        serde_json::to_string(&descriptor.serialize(false)).unwrap(),
        MULTIPLY_JSON
    );
}

#[test]
fn test_normalize_all_stops_at_first_failure() {
    let sources = vec![
        Source::from(multiply_callable()),
        Source::from(
            CallableSource::new("bad", "").with_param(ParamDecl::new("x", TypeRef::parse("Blob"))),
        ),
    ];
    let normalizer = Normalizer::default();
    assert!(normalizer.normalize_all(&sources).is_err());
    assert_eq!(normalizer.normalize_all(&sources[..1]).unwrap().len(), 1);
}
