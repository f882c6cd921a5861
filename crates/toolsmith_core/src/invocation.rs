//! Invocation requests returned by a model.

use crate::ToolDescriptor;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use toolsmith_error::{InvocationError, InvocationErrorKind, InvocationResult};
use tracing::{debug, instrument, warn};

/// A model's request to call one of the offered tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct InvocationRequest {
    /// Call identifier, absent for legacy function calls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    /// Name of the requested tool
    name: String,
    /// Decoded argument object
    arguments: Map<String, Value>,
}

impl InvocationRequest {
    /// Creates an invocation request.
    pub fn new(id: Option<String>, name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            id,
            name: name.into(),
            arguments,
        }
    }

    /// Decodes the JSON-encoded argument string a model returns.
    ///
    /// An empty string decodes to an empty object.
    pub fn from_encoded(
        id: Option<String>,
        name: impl Into<String>,
        encoded: &str,
    ) -> InvocationResult<Self> {
        let name = name.into();
        if encoded.trim().is_empty() {
            return Ok(Self::new(id, name, Map::new()));
        }

        let value: Value = serde_json::from_str(encoded).map_err(|e| {
            InvocationError::new(InvocationErrorKind::MalformedArguments {
                tool: name.clone(),
                message: e.to_string(),
            })
        })?;

        match value {
            Value::Object(arguments) => Ok(Self::new(id, name, arguments)),
            _ => Err(InvocationError::new(
                InvocationErrorKind::ArgumentsNotObject(name),
            )),
        }
    }

    /// Finds the offered descriptor this request targets and checks its arguments.
    ///
    /// Every required parameter must be present and every supplied key must be
    /// a declared parameter.
    #[instrument(skip(self, offered), fields(name = %self.name))]
    pub fn check_against<'a>(
        &self,
        offered: &'a [ToolDescriptor],
    ) -> InvocationResult<&'a ToolDescriptor> {
        let descriptor = offered
            .iter()
            .find(|d| d.name() == &self.name)
            .ok_or_else(|| {
                warn!("Model requested a tool that was not offered");
                InvocationError::new(InvocationErrorKind::UnknownTool(self.name.clone()))
            })?;

        let parameters = descriptor.parameters();
        let missing: Vec<String> = parameters
            .required_names()
            .filter(|name| !self.arguments.contains_key(*name))
            .map(str::to_string)
            .collect();
        let unexpected: Vec<String> = self
            .arguments
            .keys()
            .filter(|key| parameters.get(key).is_none())
            .cloned()
            .collect();

        if missing.is_empty() && unexpected.is_empty() {
            debug!("Arguments match descriptor");
            return Ok(descriptor);
        }

        Err(InvocationError::new(
            InvocationErrorKind::ArgumentMismatch {
                tool: self.name.clone(),
                missing,
                unexpected,
            },
        ))
    }
}
