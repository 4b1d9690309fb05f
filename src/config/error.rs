//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading `roofsite.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    /// TOML given inline, with no file behind it.
    #[error("invalid config TOML")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config file `{0}`")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("invalid `[{section}]` setting: {message}")]
    Validation { section: &'static str, message: String },
}
