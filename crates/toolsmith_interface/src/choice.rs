//! Tool choice directives.
//!
//! `tool_choice` is `"auto"`, `"none"` or
//! `{"type": "function", "function": {"name": ...}}`. The legacy
//! `function_call` is the same directive restructured: `"auto"`, `"none"` or
//! `{"name": ...}`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use toolsmith_core::ToolKind;

/// Modern `tool_choice` directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ToolChoice {
    /// Model decides whether to call a tool
    #[default]
    Auto,
    /// Model must not call a tool
    None,
    /// Model must call the named tool
    Function(String),
}

impl ToolChoice {
    /// Forces the named tool.
    pub fn function(name: impl Into<String>) -> Self {
        Self::Function(name.into())
    }

    /// Tool this directive forces, if any.
    pub fn forced_name(&self) -> Option<&str> {
        match self {
            Self::Function(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Equivalent legacy `function_call` directive.
    pub fn to_legacy(&self) -> FunctionCallChoice {
        match self {
            Self::Auto => FunctionCallChoice::Auto,
            Self::None => FunctionCallChoice::None,
            Self::Function(name) => FunctionCallChoice::Named(name.clone()),
        }
    }
}

impl std::str::FromStr for ToolChoice {
    type Err = std::convert::Infallible;

    /// `auto` and `none` select the modes; anything else names a tool.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "auto" => Self::Auto,
            "none" => Self::None,
            name => Self::Function(name.to_string()),
        })
    }
}

/// Legacy `function_call` directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FunctionCallChoice {
    /// Model decides whether to call a function
    #[default]
    Auto,
    /// Model must not call a function
    None,
    /// Model must call the named function
    Named(String),
}

impl FunctionCallChoice {
    /// Equivalent modern `tool_choice` directive.
    pub fn to_modern(&self) -> ToolChoice {
        match self {
            Self::Auto => ToolChoice::Auto,
            Self::None => ToolChoice::None,
            Self::Named(name) => ToolChoice::Function(name.clone()),
        }
    }
}

#[derive(Deserialize)]
struct NamedFunction {
    name: String,
}

#[derive(Serialize)]
struct ForcedTool<'a> {
    #[serde(rename = "type")]
    kind: ToolKind,
    function: NamedRef<'a>,
}

#[derive(Serialize)]
struct NamedRef<'a> {
    name: &'a str,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawToolChoice {
    Mode(String),
    Forced { function: NamedFunction },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFunctionCall {
    Mode(String),
    Named(NamedFunction),
}

impl Serialize for ToolChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::None => serializer.serialize_str("none"),
            Self::Function(name) => ForcedTool {
                kind: ToolKind::Function,
                function: NamedRef { name },
            }
            .serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ToolChoice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawToolChoice::deserialize(deserializer)? {
            RawToolChoice::Mode(mode) => match mode.as_str() {
                "auto" => Ok(Self::Auto),
                "none" => Ok(Self::None),
                other => Err(D::Error::custom(format!("unknown tool_choice '{other}'"))),
            },
            RawToolChoice::Forced { function } => Ok(Self::Function(function.name)),
        }
    }
}

impl Serialize for FunctionCallChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::None => serializer.serialize_str("none"),
            Self::Named(name) => NamedRef { name }.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for FunctionCallChoice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawFunctionCall::deserialize(deserializer)? {
            RawFunctionCall::Mode(mode) => match mode.as_str() {
                "auto" => Ok(Self::Auto),
                "none" => Ok(Self::None),
                other => Err(D::Error::custom(format!("unknown function_call '{other}'"))),
            },
            RawFunctionCall::Named(function) => Ok(Self::Named(function.name)),
        }
    }
}
