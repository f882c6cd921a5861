//! Tests for type annotation parsing.

use std::collections::HashMap;
use toolsmith_normalize::TypeRef;

#[test]
fn test_python_primitives() {
    assert_eq!(TypeRef::parse("int"), TypeRef::Integer);
    assert_eq!(TypeRef::parse("float"), TypeRef::Float);
    assert_eq!(TypeRef::parse("str"), TypeRef::Text);
    assert_eq!(TypeRef::parse("bool"), TypeRef::Boolean);
    assert_eq!(TypeRef::parse("list"), TypeRef::Sequence(None));
    assert_eq!(TypeRef::parse("dict"), TypeRef::Mapping);
}

#[test]
fn test_rust_primitives() {
    assert_eq!(TypeRef::parse("u32"), TypeRef::Integer);
    assert_eq!(TypeRef::parse("f32"), TypeRef::Float);
    assert_eq!(TypeRef::parse("String"), TypeRef::Text);
    assert_eq!(TypeRef::parse(" bool "), TypeRef::Boolean);
}

#[test]
fn test_generics() {
    assert_eq!(
        TypeRef::parse("List[int]"),
        TypeRef::sequence_of(TypeRef::Integer)
    );
    assert_eq!(
        TypeRef::parse("Vec<Vec<String>>"),
        TypeRef::sequence_of(TypeRef::sequence_of(TypeRef::Text))
    );
    assert_eq!(TypeRef::parse("Dict[str, int]"), TypeRef::Mapping);
    assert_eq!(TypeRef::parse("HashMap<String, i64>"), TypeRef::Mapping);
    assert_eq!(TypeRef::parse("tuple[int, str]"), TypeRef::Sequence(None));
}

#[test]
fn test_optionals() {
    assert_eq!(
        TypeRef::parse("Optional[int]"),
        TypeRef::optional(TypeRef::Integer)
    );
    assert_eq!(
        TypeRef::parse("Option<String>"),
        TypeRef::optional(TypeRef::Text)
    );
    assert_eq!(
        TypeRef::parse("float | None"),
        TypeRef::optional(TypeRef::Float)
    );
    assert_eq!(
        TypeRef::parse("Union[str, None]"),
        TypeRef::optional(TypeRef::Text)
    );
    assert!(TypeRef::parse("Optional[int]").is_optional());
}

#[test]
fn test_unknown_names_stay_custom() {
    assert_eq!(
        TypeRef::parse("Address"),
        TypeRef::Custom("Address".to_string())
    );
    assert_eq!(
        TypeRef::parse("int | str"),
        TypeRef::Custom("int | str".to_string())
    );
    assert_eq!(
        TypeRef::parse("Frobnicator[int]"),
        TypeRef::Custom("Frobnicator[int]".to_string())
    );
}

#[test]
fn test_rust_type_refs() {
    assert_eq!(TypeRef::of::<u8>(), TypeRef::Integer);
    assert_eq!(TypeRef::of::<f64>(), TypeRef::Float);
    assert_eq!(TypeRef::of::<Option<bool>>(), TypeRef::optional(TypeRef::Boolean));
    assert_eq!(TypeRef::of::<HashMap<String, i32>>(), TypeRef::Mapping);
    assert_eq!(
        TypeRef::of::<Vec<String>>(),
        TypeRef::sequence_of(TypeRef::Text)
    );
}

#[test]
fn test_display_round_trips_builtin_names() {
    let parsed = TypeRef::parse("Optional[list[int]]");
    assert_eq!(parsed.to_string(), "Optional[list[int]]");
    assert_eq!(TypeRef::parse(&parsed.to_string()), parsed);
}
