//! Request command handler.

use anyhow::Result;
use std::path::Path;
use toolsmith::{ChatCompletionRequest, ChatMessage, Manifest, ToolChoice, ToolsmithConfig};

/// Handles the request command.
///
/// Prints the body that would be sent; nothing is transmitted.
#[tracing::instrument(skip_all, fields(manifest = %manifest.display()))]
pub fn handle_request_command(
    manifest: &Path,
    prompt: &str,
    choice: Option<ToolChoice>,
    config: &ToolsmithConfig,
) -> Result<()> {
    let descriptors = Manifest::from_file(manifest)?.descriptors(&config.normalizer())?;

    let mut request = ChatCompletionRequest::offering(
        vec![ChatMessage::user(prompt)],
        &descriptors,
        choice,
        *config.legacy(),
    )?;
    if let Some(model) = config.model() {
        request = request.with_model(model);
    }

    if let Err(e) = request.check() {
        tracing::warn!(error = %e, "Request would be rejected by strict providers");
    }

    println!("{}", config.render_json(&request)?);
    Ok(())
}
