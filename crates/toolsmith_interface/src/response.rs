//! Chat-completion responses and the invocations they carry.

use crate::ChatMessage;
use serde::{Deserialize, Serialize};
use toolsmith_core::InvocationRequest;
use toolsmith_error::{InvocationError, InvocationErrorKind, InvocationResult};
use tracing::debug;

/// A choice in a chat-completion response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChoice {
    /// Position among the response choices
    #[serde(default)]
    pub index: usize,
    /// The message content
    pub message: ChatMessage,
    /// Reason for finishing
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl ChatChoice {
    /// Invocations requested by this choice's message.
    ///
    /// Modern `tool_calls` take precedence over a legacy `function_call`.
    pub fn invocations(&self) -> InvocationResult<Vec<InvocationRequest>> {
        if let Some(calls) = &self.message.tool_calls {
            return calls
                .iter()
                .map(|call| {
                    InvocationRequest::from_encoded(
                        Some(call.id.clone()),
                        call.function.name.clone(),
                        &call.function.arguments,
                    )
                })
                .collect();
        }

        match &self.message.function_call {
            Some(call) => Ok(vec![InvocationRequest::from_encoded(
                None,
                call.name.clone(),
                &call.arguments,
            )?]),
            None => Ok(Vec::new()),
        }
    }
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: Option<usize>,
    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: Option<usize>,
    /// Total tokens
    #[serde(default)]
    pub total_tokens: Option<usize>,
}

/// Chat-completion response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    /// Response identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Model that produced the response
    #[serde(default)]
    pub model: Option<String>,
    /// Response choices
    pub choices: Vec<ChatChoice>,
    /// Token usage
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatCompletionResponse {
    /// Invocations requested by the first choice.
    pub fn invocations(&self) -> InvocationResult<Vec<InvocationRequest>> {
        let choice = self
            .choices
            .first()
            .ok_or_else(|| InvocationError::new(InvocationErrorKind::NoChoices))?;
        let invocations = choice.invocations()?;
        debug!(count = invocations.len(), "Decoded invocations");
        Ok(invocations)
    }

    /// Text content of the first choice, if any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}
