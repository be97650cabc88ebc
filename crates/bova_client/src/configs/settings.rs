use std::path::Path;

use bova_env::config::Log;
use config::{Config, ConfigError, Environment, File};
use masking::Secret;
use serde::Deserialize;

/// Prefix of environment variables read into [`Settings`]
pub const ENV_PREFIX: &str = "BOVA";
/// Separator between the prefix and nested keys, e.g. `BOVA__LOG__CONSOLE__LEVEL`
pub const ENV_SEPARATOR: &str = "__";

/// Client settings, for applications that keep them in files or the environment
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub api_url: String,
    pub secret: Secret<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub log: Log,
}

impl Settings {
    /// Settings from `BOVA__*` environment variables only
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_config_path(None)
    }

    /// Settings from an optional file (format taken from its extension) overlaid with
    /// `BOVA__*` environment variables
    pub fn with_config_path(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
