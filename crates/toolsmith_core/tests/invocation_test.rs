//! Tests for checking returned invocation requests.

use serde_json::json;
use toolsmith_core::{InvocationRequest, ObjectSchema, ParameterSpec, ToolDescriptor, ValueSchema};
use toolsmith_error::InvocationErrorKind;

fn offered() -> Vec<ToolDescriptor> {
    let multiply = ToolDescriptor::new(
        "multiply",
        "Multiply two integers together.",
        ObjectSchema::try_new(
            "multiply",
            vec![
                ParameterSpec::new("a", ValueSchema::Integer),
                ParameterSpec::new("b", ValueSchema::Integer),
                ParameterSpec::new("round", ValueSchema::Boolean).with_default(false),
            ],
        )
        .unwrap(),
    )
    .unwrap();
    let ping = ToolDescriptor::new("ping", "", ObjectSchema::empty()).unwrap();
    vec![multiply, ping]
}

#[test]
fn test_decode_encoded_arguments() {
    let request =
        InvocationRequest::from_encoded(Some("call_1".into()), "multiply", r#"{"a": 3, "b": 4}"#)
            .unwrap();
    assert_eq!(request.name(), "multiply");
    assert_eq!(request.id().as_deref(), Some("call_1"));
    assert_eq!(request.arguments()["a"], json!(3));
}

#[test]
fn test_decode_empty_arguments() {
    let request = InvocationRequest::from_encoded(None, "ping", "").unwrap();
    assert!(request.arguments().is_empty());
}

#[test]
fn test_decode_rejects_malformed_and_non_object() {
    let err = InvocationRequest::from_encoded(None, "multiply", "{a: 3").unwrap_err();
    assert!(matches!(
        err.kind(),
        InvocationErrorKind::MalformedArguments { tool, .. } if tool == "multiply"
    ));

    let err = InvocationRequest::from_encoded(None, "multiply", "[1, 2]").unwrap_err();
    assert_eq!(
        err.kind(),
        &InvocationErrorKind::ArgumentsNotObject("multiply".to_string())
    );
}

#[test]
fn test_check_accepts_matching_arguments() {
    let tools = offered();
    let request =
        InvocationRequest::from_encoded(None, "multiply", r#"{"a": 3, "b": 4, "round": true}"#)
            .unwrap();
    let descriptor = request.check_against(&tools).unwrap();
    assert_eq!(descriptor.name(), "multiply");

    let request = InvocationRequest::from_encoded(None, "multiply", r#"{"a": 3, "b": 4}"#).unwrap();
    assert!(request.check_against(&tools).is_ok());
}

#[test]
fn test_check_reports_missing_and_unexpected() {
    let tools = offered();
    let request =
        InvocationRequest::from_encoded(None, "multiply", r#"{"a": 3, "c": 4}"#).unwrap();
    let err = request.check_against(&tools).unwrap_err();
    assert_eq!(
        err.kind(),
        &InvocationErrorKind::ArgumentMismatch {
            tool: "multiply".to_string(),
            missing: vec!["b".to_string()],
            unexpected: vec!["c".to_string()],
        }
    );
}

#[test]
fn test_check_rejects_unknown_tool() {
    let tools = offered();
    let request = InvocationRequest::from_encoded(None, "divide", "{}").unwrap();
    let err = request.check_against(&tools).unwrap_err();
    assert_eq!(
        err.kind(),
        &InvocationErrorKind::UnknownTool("divide".to_string())
    );
}
