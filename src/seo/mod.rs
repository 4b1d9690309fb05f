//! Search metadata: derive a record from the current view and reconcile it
//! into a document head.

mod record;
mod render;
mod schema;
mod sink;
mod sync;

pub use record::SeoRecord;
pub use render::render_head;
pub use sink::{HeadDocument, MetadataSink};
pub use sync::SeoSynchronizer;
