//! Site building orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     ├── collect_routes()   ──► home, services, areas, commercial variants
//!     │
//!     ├── write_snapshots()  ──► <output>/seo/<key>.html (rayon)
//!     │
//!     ├── write_manifest()   ──► <output>/routes.json
//!     │
//!     └── build_sitemap()    ──► <output>/sitemap.xml
//! ```

use crate::{
    catalog::Catalog,
    config::SiteConfig,
    generator::{Snapshot, build_sitemap, collect_routes, write_snapshots},
    log,
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Manifest listing every snapshot.
pub const MANIFEST_FILE: &str = "routes.json";

/// Render every route and write the manifest and sitemap.
pub fn build_site(config: &SiteConfig, catalog: &Catalog) -> Result<Vec<Snapshot>> {
    let output = config.output_dir();

    let routes = collect_routes(config, catalog);
    log!("build"; "rendering {} routes...", routes.len());

    let snapshots = write_snapshots(config, catalog, &routes, &output)?;
    write_manifest(&output, &snapshots)?;
    build_sitemap(config, &snapshots, &output)?;

    log!("build"; "done, output in {}", output.display());
    Ok(snapshots)
}

fn write_manifest(output: &Path, snapshots: &[Snapshot]) -> Result<()> {
    let path = output.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(snapshots)?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
