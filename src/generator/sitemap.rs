//! Sitemap generation.
//!
//! Lists the canonical URL of every rendered route. Routes sharing a
//! canonical URL (a commercial variant and its location page) appear once.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/#/service/1</loc>
//!   </url>
//! </urlset>
//! ```

use super::snapshot::Snapshot;
use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use std::{collections::HashSet, fs, path::Path};

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

pub const SITEMAP_FILE: &str = "sitemap.xml";

// ============================================================================
// Public API
// ============================================================================

/// Write `<output>/sitemap.xml` if enabled in config.
pub fn build_sitemap(config: &SiteConfig, snapshots: &[Snapshot], output: &Path) -> Result<()> {
    if config.build.sitemap {
        Sitemap::from_snapshots(snapshots).write(&output.join(SITEMAP_FILE))?;
    }
    Ok(())
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

struct Sitemap {
    /// Canonical URLs, first occurrence order
    urls: Vec<String>,
}

impl Sitemap {
    fn from_snapshots(snapshots: &[Snapshot]) -> Self {
        let mut seen = HashSet::new();
        let urls = snapshots
            .iter()
            .map(|snapshot| snapshot.canonical.as_str())
            .filter(|url| seen.insert(*url))
            .map(str::to_owned)
            .collect();
        Self { urls }
    }

    /// Generate sitemap XML string.
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for loc in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&loc)));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to output file.
    fn write(self, path: &Path) -> Result<()> {
        let count = self.urls.len();
        fs::write(path, self.into_xml())
            .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

        log!("sitemap"; "{} urls", count);
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::routes::Route;
    use crate::router::ViewKind;

    fn snapshot(key: &str, canonical: &str) -> Snapshot {
        Snapshot {
            route: Route {
                key: key.into(),
                fragment: String::new(),
                url: canonical.into(),
                view: ViewKind::None,
            },
            title: String::new(),
            canonical: canonical.into(),
            file: format!("seo/{key}.html"),
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = Sitemap::from_snapshots(&[]).into_xml();

        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_dedups_canonical_urls() {
        let snapshots = [
            snapshot("home", "https://example.com"),
            snapshot("locations-a", "https://example.com/#/locations/a"),
            snapshot("commercial-roofing-a", "https://example.com/#/locations/a"),
        ];
        let xml = Sitemap::from_snapshots(&snapshots).into_xml();

        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains("<loc>https://example.com/#/locations/a</loc>"));
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let xml = Sitemap::from_snapshots(&[snapshot("home", "https://example.com?a=1&b=2")]).into_xml();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert_eq!(lines[3], "    <loc>https://example.com?a=1&amp;b=2</loc>");
        assert_eq!(lines.last().unwrap().trim(), "</urlset>");
    }

    #[test]
    fn test_build_sitemap_respects_flag() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        let snapshots = [snapshot("home", "https://example.com")];

        config.build.sitemap = false;
        build_sitemap(&config, &snapshots, dir.path()).unwrap();
        assert!(!dir.path().join(SITEMAP_FILE).exists());

        config.build.sitemap = true;
        build_sitemap(&config, &snapshots, dir.path()).unwrap();
        assert!(dir.path().join(SITEMAP_FILE).is_file());
    }
}
