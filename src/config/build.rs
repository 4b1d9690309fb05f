//! `[build]`, `[catalog]` and `[navigation]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section - prerendered route snapshots and sitemap.
///
/// # Example
/// ```toml
/// [build]
/// output = "public"
/// sitemap = true
/// commercial = ["charlotte", "concord"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildSection {
    /// Output directory, relative to the project root.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Write `sitemap.xml` alongside the snapshots.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub sitemap: bool,

    /// Area ids that also get a `commercial-roofing-<id>` snapshot.
    #[serde(default = "defaults::build::commercial")]
    #[educe(Default = defaults::build::commercial())]
    pub commercial: Vec<String>,
}

/// `[catalog]` section - where services, areas and FAQ entries come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogSection {
    /// TOML catalog replacing the built-in one, relative to the project root.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// `[navigation]` section - overlay timing.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct NavigationSection {
    /// Delay between closing an overlay and scrolling to a section.
    #[serde(default = "defaults::navigation::close_scroll_delay_ms")]
    #[educe(Default = defaults::navigation::close_scroll_delay_ms())]
    pub close_scroll_delay_ms: u64,
}
