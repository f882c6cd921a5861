//! Chat-completion requests that offer tools.

use crate::{ChatMessage, FunctionCallChoice, ToolChoice};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use toolsmith_core::{FunctionDefinition, ToolDefinition, ToolDescriptor};
use toolsmith_error::{RequestError, RequestErrorKind, RequestResult};
use tracing::{debug, instrument, warn};

/// Chat-completion request body.
///
/// Modern requests fill `tools`/`tool_choice`; legacy requests fill
/// `functions`/`function_call`.
///
/// # Examples
///
/// ```
/// use toolsmith_interface::{ChatCompletionRequest, ChatMessage, ToolChoice};
///
/// let mut builder = ChatCompletionRequest::builder();
/// builder
///     .messages(vec![ChatMessage::user("What is 3 times 12?")])
///     .tool_choice(ToolChoice::Auto);
/// let request = builder.build().unwrap();
///
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body["tool_choice"], "auto");
/// assert!(body.get("functions").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    /// Conversation messages
    messages: Vec<ChatMessage>,
    /// Modern tool entries
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<ToolDefinition>>,
    /// Modern tool choice directive
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tool_choice: Option<ToolChoice>,
    /// Legacy function entries
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    functions: Option<Vec<FunctionDefinition>>,
    /// Legacy function call directive
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    function_call: Option<FunctionCallChoice>,
}

impl ChatCompletionRequest {
    /// Creates a new builder for ChatCompletionRequest.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }

    /// Builds a request offering `descriptors` in the modern or legacy shape.
    ///
    /// With `legacy` set, `choice` is restructured into `function_call`.
    /// With no descriptors the request offers nothing and `choice` is dropped.
    #[instrument(skip(messages, descriptors), fields(tools = descriptors.len()))]
    pub fn offering(
        messages: Vec<ChatMessage>,
        descriptors: &[ToolDescriptor],
        choice: Option<ToolChoice>,
        legacy: bool,
    ) -> RequestResult<Self> {
        if let Err(e) = check_unique_names(descriptors) {
            warn!(error = %e, "Offering tools with ambiguous names");
        }

        let mut builder = Self::builder();
        builder.messages(messages);

        // An empty list is left unset, and a directive has nothing to direct.
        if descriptors.is_empty() {
            debug!("No tools to offer");
        } else if legacy {
            builder.offer_functions(descriptors);
            if let Some(choice) = choice {
                builder.function_call(choice.to_legacy());
            }
        } else {
            builder.offer_tools(descriptors);
            if let Some(choice) = choice {
                builder.tool_choice(choice);
            }
        }

        builder.build().map_err(|e| {
            RequestError::new(RequestErrorKind::Builder(format!(
                "Failed to build request: {}",
                e
            )))
        })
    }

    /// Names the model to address.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Names of every offered tool or function, in offer order.
    pub fn offered_names(&self) -> Vec<&str> {
        let modern = self
            .tools
            .iter()
            .flatten()
            .map(|tool| tool.function().name().as_str());
        let legacy = self
            .functions
            .iter()
            .flatten()
            .map(|function| function.name().as_str());
        modern.chain(legacy).collect()
    }

    /// Checks the request the way a strict provider would.
    ///
    /// Rejects repeated tool names and a forced choice naming a tool that is
    /// not offered. Nothing calls this implicitly.
    pub fn check(&self) -> RequestResult<()> {
        let names = self.offered_names();
        check_names(names.iter().copied())?;

        let forced = self
            .tool_choice
            .as_ref()
            .and_then(ToolChoice::forced_name)
            .or(match &self.function_call {
                Some(FunctionCallChoice::Named(name)) => Some(name.as_str()),
                _ => None,
            });

        if let Some(forced) = forced
            && !names.contains(&forced)
        {
            return Err(RequestError::new(RequestErrorKind::UnknownChoice(
                forced.to_string(),
            )));
        }
        Ok(())
    }
}

impl ChatCompletionRequestBuilder {
    /// Offers `descriptors` as modern tool entries.
    pub fn offer_tools(&mut self, descriptors: &[ToolDescriptor]) -> &mut Self {
        let tools: Vec<ToolDefinition> = descriptors.iter().map(ToolDescriptor::to_tool).collect();
        debug!(count = tools.len(), "Offering tools");
        self.tools(tools)
    }

    /// Offers `descriptors` as legacy function entries.
    pub fn offer_functions(&mut self, descriptors: &[ToolDescriptor]) -> &mut Self {
        let functions: Vec<FunctionDefinition> =
            descriptors.iter().map(ToolDescriptor::to_function).collect();
        debug!(count = functions.len(), "Offering legacy functions");
        self.functions(functions)
    }
}

/// Reports the first name offered more than once.
///
/// Providers reject ambiguous names; descriptors are never deduplicated here.
pub fn check_unique_names(descriptors: &[ToolDescriptor]) -> RequestResult<()> {
    check_names(descriptors.iter().map(|d| d.name().as_str()))
}

fn check_names<'a>(names: impl Iterator<Item = &'a str>) -> RequestResult<()> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    for name in names {
        let count = counts.entry(name).or_insert(0);
        if *count == 0 {
            order.push(name);
        }
        *count += 1;
    }

    match order.into_iter().find(|name| counts[name] > 1) {
        Some(name) => Err(RequestError::new(RequestErrorKind::AmbiguousName {
            name: name.to_string(),
            count: counts[name],
        })),
        None => Ok(()),
    }
}
