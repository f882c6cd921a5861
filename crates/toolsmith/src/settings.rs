//! Layered configuration.

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use toolsmith_error::{ConfigError, ToolsmithError, ToolsmithResult};
use toolsmith_normalize::{DocStyle, Normalizer};
use tracing::{debug, instrument};

/// Environment variable prefix, e.g. `TOOLSMITH_LEGACY=true`.
const ENV_PREFIX: &str = "TOOLSMITH";

/// Toolsmith settings.
///
/// Layers, lowest first: built-in defaults, a TOML file, then `TOOLSMITH_*`
/// environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct ToolsmithConfig {
    /// Emit the legacy flat `functions` shape
    legacy: bool,
    /// Documentation convention of declared sources
    doc_style: DocStyle,
    /// Pretty-print JSON output
    pretty: bool,
    /// Model named in generated requests
    model: Option<String>,
}

impl Default for ToolsmithConfig {
    fn default() -> Self {
        Self {
            legacy: false,
            doc_style: DocStyle::Google,
            pretty: true,
            model: None,
        }
    }
}

impl ToolsmithConfig {
    /// Per-user configuration file, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("toolsmith").join("toolsmith.toml"))
    }

    /// Load configuration from every layer.
    ///
    /// An explicit `path` must exist; the per-user file is optional.
    #[instrument]
    pub fn load(path: Option<&Path>) -> ToolsmithResult<Self> {
        let file = match path {
            Some(path) => Some(File::from(path).format(FileFormat::Toml).required(true)),
            None => Self::default_path()
                .map(|path| File::from(path).format(FileFormat::Toml).required(false)),
        };

        let mut builder = Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(file);
        }

        let config: Self = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| {
                ToolsmithError::from(ConfigError::new(format!(
                    "Failed to load configuration: {}",
                    e
                )))
            })?;

        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from a TOML file alone.
    #[instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> ToolsmithResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ToolsmithError::from(ConfigError::new(format!(
                "Failed to read config file: {}",
                e
            )))
        })?;

        toml::from_str(&content).map_err(|e| {
            ToolsmithError::from(ConfigError::new(format!(
                "Failed to parse config: {}",
                e
            )))
        })
    }

    /// Overrides the output shape.
    pub fn with_legacy(mut self, legacy: bool) -> Self {
        self.legacy = legacy;
        self
    }

    /// Normalizer for the configured documentation style.
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.doc_style)
    }

    /// Renders `value` as JSON, pretty-printed when configured.
    pub fn render_json(&self, value: &impl Serialize) -> ToolsmithResult<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(rendered)
    }
}
