//! Declared parameter and field types.
//!
//! A [`TypeRef`] is the type a source declares for a parameter, before it is
//! mapped onto a JSON Schema type. Annotations can be written Python-style
//! (`int`, `list[str]`, `Optional[float]`, `int | None`) or Rust-style
//! (`i64`, `Vec<String>`, `Option<f64>`), or derived from a Rust type's
//! [`schemars::JsonSchema`] implementation.

use crate::SchemaObject;
use crate::json_schema::root_schema_for;
use schemars::JsonSchema;
use std::fmt;

/// A declared type, as written in a source.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    /// Whole numbers
    Integer,
    /// Floating-point numbers
    Float,
    /// Text
    Text,
    /// True or false
    Boolean,
    /// Ordered sequence, with the element type when known
    Sequence(Option<Box<TypeRef>>),
    /// Key/value mapping
    Mapping,
    /// Value that may be omitted
    Optional(Box<TypeRef>),
    /// Nested schema object
    Schema(Box<SchemaObject>),
    /// Name with no known mapping
    Custom(String),
}

impl TypeRef {
    /// Sequence of `items`.
    pub fn sequence_of(items: TypeRef) -> Self {
        Self::Sequence(Some(Box::new(items)))
    }

    /// Optional `inner`.
    pub fn optional(inner: TypeRef) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Nested schema object.
    pub fn schema(object: SchemaObject) -> Self {
        Self::Schema(Box::new(object))
    }

    /// Type reference for a Rust type.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolsmith_normalize::TypeRef;
    ///
    /// assert_eq!(TypeRef::of::<i64>(), TypeRef::Integer);
    /// assert_eq!(TypeRef::of::<Vec<String>>(), TypeRef::sequence_of(TypeRef::Text));
    /// ```
    pub fn of<T: JsonSchema>() -> Self {
        Self::from_json_schema(&root_schema_for::<T>())
    }

    /// Parses a type annotation.
    ///
    /// Unknown names become [`TypeRef::Custom`]; they fail at normalization
    /// unless resolved to a schema object first.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolsmith_normalize::TypeRef;
    ///
    /// assert_eq!(TypeRef::parse("int"), TypeRef::Integer);
    /// assert_eq!(TypeRef::parse("Optional[str]"), TypeRef::optional(TypeRef::Text));
    /// assert_eq!(TypeRef::parse("Vec<f64>"), TypeRef::sequence_of(TypeRef::Float));
    /// assert_eq!(TypeRef::parse("Address"), TypeRef::Custom("Address".to_string()));
    /// ```
    pub fn parse(annotation: &str) -> Self {
        let annotation = annotation.trim();

        let alternatives = split_top_level(annotation, '|');
        if alternatives.len() > 1 {
            return parse_union(annotation, &alternatives);
        }

        if let Some((head, args)) = split_generic(annotation) {
            return parse_generic(annotation, head, &args);
        }

        parse_name(annotation)
    }

    /// True for [`TypeRef::Optional`].
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }
}

fn parse_union(annotation: &str, alternatives: &[&str]) -> TypeRef {
    let present: Vec<&str> = alternatives
        .iter()
        .copied()
        .filter(|alt| !matches!(*alt, "None" | "none" | "null" | "NoneType"))
        .collect();

    match present.as_slice() {
        [single] if present.len() < alternatives.len() => TypeRef::optional(TypeRef::parse(single)),
        _ => TypeRef::Custom(annotation.to_string()),
    }
}

fn parse_generic(annotation: &str, head: &str, args: &[&str]) -> TypeRef {
    match head.to_ascii_lowercase().as_str() {
        "optional" | "option" if args.len() == 1 => TypeRef::optional(TypeRef::parse(args[0])),
        "union" => parse_union(annotation, args),
        "list" | "sequence" | "set" | "frozenset" | "iterable" | "vec" | "vecdeque"
        | "hashset" | "btreeset" => match args {
            [item] => TypeRef::sequence_of(TypeRef::parse(item)),
            _ => TypeRef::Sequence(None),
        },
        "tuple" => TypeRef::Sequence(None),
        "dict" | "mapping" | "hashmap" | "btreemap" | "map" => TypeRef::Mapping,
        _ => TypeRef::Custom(annotation.to_string()),
    }
}

fn parse_name(name: &str) -> TypeRef {
    match name.to_ascii_lowercase().as_str() {
        "int" | "integer" | "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16"
        | "u32" | "u64" | "u128" | "usize" => TypeRef::Integer,
        "float" | "number" | "f32" | "f64" | "decimal" => TypeRef::Float,
        "str" | "string" | "text" | "char" => TypeRef::Text,
        "bool" | "boolean" => TypeRef::Boolean,
        "list" | "sequence" | "tuple" | "set" | "vec" | "array" => TypeRef::Sequence(None),
        "dict" | "mapping" | "hashmap" | "btreemap" | "object" | "map" => TypeRef::Mapping,
        _ => TypeRef::Custom(name.to_string()),
    }
}

/// Splits `Head[args]` or `Head<args>` into its head and top-level arguments.
fn split_generic(annotation: &str) -> Option<(&str, Vec<&str>)> {
    let open = annotation.find(['[', '<'])?;
    let close = match annotation.as_bytes()[open] {
        b'[' => ']',
        _ => '>',
    };
    if !annotation.ends_with(close) || open == 0 {
        return None;
    }
    let head = annotation[..open].trim();
    let inner = &annotation[open + 1..annotation.len() - 1];
    Some((head, split_top_level(inner, ',')))
}

/// Splits on `separator` outside of brackets, trimming each part.
fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, ch) in text.char_indices() {
        match ch {
            '[' | '<' | '(' => depth += 1,
            ']' | '>' | ')' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                parts.push(text[start..index].trim());
                start = index + ch.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(text[start..].trim());
    parts.retain(|part| !part.is_empty());
    parts
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Text => write!(f, "str"),
            Self::Boolean => write!(f, "bool"),
            Self::Sequence(None) => write!(f, "list"),
            Self::Sequence(Some(items)) => write!(f, "list[{}]", items),
            Self::Mapping => write!(f, "dict"),
            Self::Optional(inner) => write!(f, "Optional[{}]", inner),
            Self::Schema(object) => write!(f, "{}", object.name()),
            Self::Custom(name) => write!(f, "{}", name),
        }
    }
}

impl std::str::FromStr for TypeRef {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
