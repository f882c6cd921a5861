//! Check command handler.

use anyhow::{Result, bail};
use std::path::Path;
use toolsmith::{Manifest, Normalizer, ToolDescriptor, ToolsmithConfig, check_unique_names};

/// Handles the check command.
///
/// Every declaration is normalized on its own so one failure does not hide
/// the rest.
#[tracing::instrument(skip_all, fields(manifest = %manifest.display()))]
pub fn handle_check_command(manifest: &Path, config: &ToolsmithConfig) -> Result<()> {
    let manifest = Manifest::from_file(manifest)?;
    let normalizer: Normalizer = config.normalizer();

    let mut descriptors: Vec<ToolDescriptor> = Vec::new();
    let mut failures = 0usize;

    for (name, source) in manifest.resolve_each() {
        match source.and_then(|source| normalizer.normalize(&source)) {
            Ok(descriptor) => {
                println!(
                    "✓ {} ({} parameters)",
                    name,
                    descriptor.parameters().len()
                );
                descriptors.push(descriptor);
            }
            Err(e) => {
                failures += 1;
                println!("✗ {}: {}", name, e.kind());
                tracing::debug!(error = %e, "Declaration failed");
            }
        }
    }

    if let Err(e) = check_unique_names(&descriptors) {
        failures += 1;
        println!("✗ {}", e.kind());
    }

    if failures > 0 {
        bail!("{} problem(s) found", failures);
    }

    println!("\n✅ {} tool(s) ready", descriptors.len());
    Ok(())
}
