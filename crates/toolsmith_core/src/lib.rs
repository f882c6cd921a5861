//! Core data types for the Toolsmith function-calling library.
//!
//! This crate holds the normalized [`ToolDescriptor`] model and renders it into
//! the two wire shapes chat-completion APIs accept: the modern `tools` entry
//! `{"type": "function", "function": {...}}` and the legacy flat `functions`
//! entry.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod descriptor;
mod invocation;
mod json_type;
mod schema;
mod wire;

pub use descriptor::{ToolDescriptor, serialize};
pub use invocation::InvocationRequest;
pub use json_type::JsonType;
pub use schema::{ObjectSchema, ParameterSpec, ValueSchema};
pub use wire::{FunctionDefinition, ToolDefinition, ToolKind};
