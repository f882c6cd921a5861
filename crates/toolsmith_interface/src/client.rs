//! Seam for sending requests to a chat-completion backend.

use crate::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use toolsmith_error::ToolsmithResult;

/// A backend that answers chat-completion requests.
///
/// Transport is left to implementors; this crate only shapes the payloads.
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    /// Sends `request` and returns the backend's response.
    async fn complete(&self, request: &ChatCompletionRequest)
    -> ToolsmithResult<ChatCompletionResponse>;

    /// Backend name for logging.
    fn provider_name(&self) -> &'static str {
        "unknown"
    }
}
