//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toolsmith::ToolChoice;

/// Normalize declared tools into LLM function-calling descriptors.
#[derive(Parser, Debug)]
#[command(name = "toolsmith")]
#[command(about = "Normalize declared tools into LLM function-calling descriptors")]
#[command(version)]
pub struct Cli {
    /// Path to a configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the descriptors a manifest declares
    Render {
        /// Path to the manifest TOML file
        manifest: PathBuf,

        /// Emit the legacy flat `functions` shape
        #[arg(long)]
        legacy: bool,

        /// Only render the named tools
        #[arg(long = "tool", value_name = "NAME")]
        tools: Vec<String>,
    },

    /// Normalize every declaration and report problems
    Check {
        /// Path to the manifest TOML file
        manifest: PathBuf,
    },

    /// Print the chat-completion request body offering a manifest's tools
    Request {
        /// Path to the manifest TOML file
        manifest: PathBuf,

        /// User message to send
        #[arg(short, long)]
        prompt: String,

        /// Tool choice: auto, none, or a tool name to force
        #[arg(long)]
        choice: Option<ToolChoice>,

        /// Emit the legacy `functions`/`function_call` fields
        #[arg(long)]
        legacy: bool,
    },
}
