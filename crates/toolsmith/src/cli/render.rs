//! Render command handler.

use anyhow::{Result, bail};
use serde_json::Value;
use std::path::Path;
use toolsmith::{Manifest, ToolsmithConfig};

/// Handles the render command.
///
/// # Arguments
///
/// * `manifest` - Path to the manifest file
/// * `tools` - Names to keep; empty keeps everything
/// * `config` - Loaded configuration, with the output shape already applied
#[tracing::instrument(skip_all, fields(manifest = %manifest.display()))]
pub fn handle_render_command(
    manifest: &Path,
    tools: &[String],
    config: &ToolsmithConfig,
) -> Result<()> {
    let descriptors = Manifest::from_file(manifest)?.descriptors(&config.normalizer())?;

    if let Some(missing) = tools
        .iter()
        .find(|name| !descriptors.iter().any(|d| d.name() == *name))
    {
        bail!("Manifest declares no tool named '{}'", missing);
    }

    let rendered: Vec<Value> = descriptors
        .iter()
        .filter(|d| tools.is_empty() || tools.contains(d.name()))
        .map(|d| d.serialize(*config.legacy()))
        .collect();

    tracing::info!(count = rendered.len(), legacy = config.legacy(), "Rendered descriptors");
    println!("{}", config.render_json(&rendered)?);
    Ok(())
}
