//! Route enumeration for the snapshot build.

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::log;
use crate::router::{Fragment, ViewKind, ViewState, resolve};
use serde::Serialize;

/// Key of the route with no fragment.
const HOME_KEY: &str = "home";

/// Characters forbidden in file names
const FORBIDDEN_CHARS: &[char] = &[
    '<', '>', ':', '|', '?', '*', '#', '\\', '(', ')', '[', ']', '\t', '\r', '\n', '"',
];

/// One addressable view of the site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// File stem of the snapshot, unique per route.
    pub key: String,
    /// Fragment as it appears in the address bar.
    pub fragment: String,
    /// Absolute URL of the route.
    pub url: String,
    pub view: ViewKind,
}

impl Route {
    fn new(config: &SiteConfig, fragment: String, view: ViewKind) -> Self {
        let parsed = Fragment::parse(&fragment);
        let (key, url) = if parsed.is_empty() {
            (HOME_KEY.to_owned(), config.site.url.clone())
        } else {
            (route_key(parsed.path()), config.site.fragment_url(parsed.path()))
        };
        Self { key, fragment, url, view }
    }
}

/// Every route the site serves: home, each service, each area and the
/// configured commercial variants, in that order.
pub fn collect_routes(config: &SiteConfig, catalog: &Catalog) -> Vec<Route> {
    let mut routes = vec![Route::new(config, String::new(), ViewKind::None)];

    routes.extend(
        catalog
            .services()
            .iter()
            .map(|service| Route::new(config, format!("#/service/{}", service.id), ViewKind::Service)),
    );
    routes.extend(
        catalog
            .areas()
            .iter()
            .map(|area| Route::new(config, format!("#/locations/{}", area.slug), ViewKind::Area)),
    );

    for id in &config.build.commercial {
        if catalog.area_by_id(id).is_none() {
            log!("build"; "unknown commercial area `{id}`, skipped");
            continue;
        }
        let fragment = format!("#/commercial-roofing-{id}");
        // the suffix matches loosely, so make sure it lands on this area
        match resolve(&fragment, catalog, &ViewState::None) {
            ViewState::CommercialArea(area) if area.id == *id => {
                routes.push(Route::new(config, fragment, ViewKind::CommercialArea));
            }
            other => log!("build"; "`{fragment}` resolves to {other}, skipped"),
        }
    }

    routes
}

/// `service/1` → `service-1`, with characters unsafe in file names removed.
fn route_key(path: &str) -> String {
    path.trim_matches('/')
        .chars()
        .filter(|c| !FORBIDDEN_CHARS.contains(c))
        .map(|c| match c {
            '/' => '-',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect()
}
