//! Per-route head snapshots.
//!
//! Each route is mounted on its own navigator, so snapshots render in
//! parallel without sharing any state.

use super::routes::Route;
use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::history::MemoryHistory;
use crate::navigator::Navigator;
use crate::seo::{HeadDocument, render_head};
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde::Serialize;
use std::{fs, path::Path};

/// Directory under the output root that holds the snapshots.
pub const SNAPSHOT_DIR: &str = "seo";

/// Manifest entry for one rendered route.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    #[serde(flatten)]
    pub route: Route,
    pub title: String,
    pub canonical: String,
    /// Snapshot path relative to the output root.
    pub file: String,
}

/// Mount `route` and render the resulting head.
pub fn render_route(config: &SiteConfig, catalog: &Catalog, route: &Route) -> Result<(Snapshot, String)> {
    let mut nav = Navigator::new(
        config,
        catalog,
        MemoryHistory::new(&route.fragment),
        HeadDocument::new(route.url.clone()),
    );
    nav.mount();

    let view = nav.current().kind();
    if view != route.view {
        bail!("`{}` resolved to {view:?}, expected {:?}", route.fragment, route.view);
    }

    let head = nav.into_sink();
    let html = render_head(&head).with_context(|| format!("Failed to render `{}`", route.key))?;
    let snapshot = Snapshot {
        route: route.clone(),
        title: head.title().unwrap_or_default().to_owned(),
        canonical: head.link("canonical").unwrap_or(route.url.as_str()).to_owned(),
        file: format!("{SNAPSHOT_DIR}/{}.html", route.key),
    };
    Ok((snapshot, html))
}

/// Render every route in parallel and write `<output>/seo/<key>.html`.
/// Snapshots come back in route order.
pub fn write_snapshots(
    config: &SiteConfig,
    catalog: &Catalog,
    routes: &[Route],
    output: &Path,
) -> Result<Vec<Snapshot>> {
    let dir = output.join(SNAPSHOT_DIR);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    routes
        .par_iter()
        .map(|route| -> Result<Snapshot> {
            let (snapshot, html) = render_route(config, catalog, route)?;
            let path = output.join(&snapshot.file);
            fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Ok(snapshot)
        })
        .collect()
}
