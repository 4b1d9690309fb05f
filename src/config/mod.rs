//! Site configuration management for `roofsite.toml`.
//!
//! # Sections
//!
//! | Section        | Purpose                                          |
//! |----------------|--------------------------------------------------|
//! | `[site]`       | Business identity and default search metadata    |
//! | `[catalog]`    | Optional catalog file replacing the built-in one |
//! | `[assistant]`  | Generative-AI chat and speech service            |
//! | `[projects]`   | Project-photo lookup service                     |
//! | `[build]`      | Route snapshots and sitemap output               |
//! | `[navigation]` | Overlay timing                                   |
//!
//! Every field has a default, so a missing config file is not an error.
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "Best Roofers Now"
//! url = "https://bestroofingnow.com"
//!
//! [build]
//! output = "public"
//! commercial = ["charlotte"]
//!
//! [assistant]
//! api_key_env = "GEMINI_API_KEY"
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod integrations;

pub use base::SiteSection;
pub use error::ConfigError;
pub use integrations::{AssistantSection, ProjectsSection};

use build::{BuildSection, CatalogSection, NavigationSection};

use crate::cli::{Cli, Commands};
use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

/// Root configuration structure representing roofsite.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Project root directory (set after loading)
    #[serde(skip)]
    pub root: PathBuf,

    /// Path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub catalog: CatalogSection,

    #[serde(default)]
    pub assistant: AssistantSection,

    #[serde(default)]
    pub projects: ProjectsSection,

    #[serde(default)]
    pub build: BuildSection,

    #[serde(default)]
    pub navigation: NavigationSection,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        toml::from_str(&content).map_err(|err| ConfigError::Parse(path.to_path_buf(), err))
    }

    /// Load the config named by the CLI, falling back to defaults when the
    /// file does not exist, then apply CLI overrides and validate.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            log!("config"; "{} not found, using defaults", config_path.display());
            Self::default()
        };
        config.root = root;
        config.config_path = config_path;
        config.update_with_cli(cli);
        config.validate()?;

        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        if let Commands::Build { output, sitemap } = &cli.command {
            Self::update_option(&mut self.build.output, output.as_ref());
            Self::update_option(&mut self.build.sitemap, sitemap.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate fields that have no meaningful empty value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::Validation { section: "site", message };

        if self.site.name.trim().is_empty() {
            return Err(invalid("`name` must not be empty".into()));
        }
        let url = self.site.url.trim();
        if url.is_empty() {
            return Err(invalid("`url` must not be empty".into()));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(invalid(format!("`url` must be an absolute http(s) URL, got `{url}`")));
        }
        Ok(())
    }

    /// Output directory resolved against the project root.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.build.output)
    }

    /// Catalog file resolved against the project root, if configured.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog.path.as_ref().map(|path| self.root.join(path))
    }

    pub fn close_scroll_delay(&self) -> Duration {
        Duration::from_millis(self.navigation.close_scroll_delay_ms)
    }
}
