//! JSON Schema primitive types.

use serde::{Deserialize, Serialize};

/// The fixed set of JSON Schema types a parameter can carry.
///
/// # Examples
///
/// ```
/// use toolsmith_core::JsonType;
///
/// assert_eq!(JsonType::Integer.to_string(), "integer");
/// assert_eq!("number".parse::<JsonType>().unwrap(), JsonType::Number);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum JsonType {
    /// Whole numbers
    Integer,
    /// Floating-point numbers
    Number,
    /// Text
    String,
    /// True or false
    Boolean,
    /// Ordered sequences
    Array,
    /// Key/value mappings and nested schema objects
    Object,
}
