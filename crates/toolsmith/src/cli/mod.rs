//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the toolsmith binary.

mod check;
mod commands;
mod render;
mod request;

pub use check::handle_check_command;
pub use commands::{Cli, Commands};
pub use render::handle_render_command;
pub use request::handle_request_command;
