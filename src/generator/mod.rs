//! Build outputs: route list, head snapshots and sitemap.

mod routes;
mod sitemap;
mod snapshot;

pub use routes::collect_routes;
pub use sitemap::build_sitemap;
pub use snapshot::{Snapshot, write_snapshots};
