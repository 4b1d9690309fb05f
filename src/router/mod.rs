//! Hash routing: fragment parsing, the route table and the resolved view.
//!
//! | Fragment                         | View                              |
//! |----------------------------------|-----------------------------------|
//! | `#/commercial-roofing-<suffix>`  | commercial copy of a matched area |
//! | `#/locations/<slug>`             | area with that slug               |
//! | `#/service/<id>`                 | service with that id              |
//! | anything else                    | none (see [`resolve`])            |

mod fragment;
mod resolve;
mod view;

pub use fragment::Fragment;
pub use resolve::resolve;
pub use view::{ViewKind, ViewState};
