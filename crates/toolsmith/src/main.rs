//! Toolsmith command-line entry point.

mod cli;

use clap::Parser;
use cli::{
    Cli, Commands, handle_check_command, handle_render_command, handle_request_command,
};
use toolsmith::ToolsmithConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ToolsmithConfig::load(cli.config.as_deref())?;
    info!(doc_style = %config.doc_style(), "Configuration loaded");

    match cli.command {
        Commands::Render {
            manifest,
            legacy,
            tools,
        } => {
            let config = config.clone().with_legacy(legacy || *config.legacy());
            handle_render_command(&manifest, &tools, &config)
        }
        Commands::Check { manifest } => handle_check_command(&manifest, &config),
        Commands::Request {
            manifest,
            prompt,
            choice,
            legacy,
        } => {
            let config = config.clone().with_legacy(legacy || *config.legacy());
            handle_request_command(&manifest, &prompt, choice, &config)
        }
    }
}
