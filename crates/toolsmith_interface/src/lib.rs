//! Chat-completion payloads for offering tools to a model.
//!
//! Builds requests that offer normalized [`ToolDescriptor`](toolsmith_core::ToolDescriptor)s
//! in the modern `tools` shape or the legacy `functions` shape, and decodes
//! the invocations a model sends back.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod choice;
mod client;
mod message;
mod request;
mod response;

pub use choice::{FunctionCallChoice, ToolChoice};
pub use client::ChatCompletionClient;
pub use message::{ChatMessage, FunctionCall, Role, ToolCall};
pub use request::{ChatCompletionRequest, ChatCompletionRequestBuilder, check_unique_names};
pub use response::{ChatChoice, ChatCompletionResponse, Usage};
