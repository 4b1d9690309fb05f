//! Event wiring between the address bar, the store and the metadata sink.
//!
//! The navigator owns one of each piece and drives them the way the page
//! does: overlays open by changing the fragment, every hash-change event
//! gets a full resolver pass, and every store write is followed by a sync.

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::history::History;
use crate::router::{ViewState, resolve};
use crate::seo::{MetadataSink, SeoSynchronizer};
use crate::store::ViewStateStore;
use std::time::Duration;

/// Page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Services,
    Areas,
    WhyUs,
    Reviews,
    Plans,
    Faq,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Self::Hero,
        Self::Services,
        Self::Areas,
        Self::WhyUs,
        Self::Reviews,
        Self::Plans,
        Self::Faq,
    ];

    /// Anchor id of the section element.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Services => "services",
            Self::Areas => "areas",
            Self::WhyUs => "why-us",
            Self::Reviews => "reviews",
            Self::Plans => "plans",
            Self::Faq => "faq",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

/// Where to scroll and how long to wait for the overlay to close first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollPlan {
    pub section: Section,
    pub delay: Duration,
}

pub struct Navigator<'c, H, S> {
    catalog: &'c Catalog,
    store: ViewStateStore,
    seo: SeoSynchronizer<'c>,
    history: H,
    sink: S,
    close_delay: Duration,
}

impl<'c, H: History, S: MetadataSink> Navigator<'c, H, S> {
    pub fn new(config: &'c SiteConfig, catalog: &'c Catalog, history: H, sink: S) -> Self {
        Self {
            catalog,
            store: ViewStateStore::new(),
            seo: SeoSynchronizer::new(&config.site, catalog),
            history,
            sink,
            close_delay: config.close_scroll_delay(),
        }
    }

    /// Resolve the fragment the page was loaded with and sync once.
    pub fn mount(&mut self) {
        let fragment = self.history.fragment().to_owned();
        self.handle(&fragment);
    }

    /// One hash-change event: resolve, store, sync.
    pub fn handle(&mut self, fragment: &str) {
        let next = resolve(fragment, self.catalog, self.store.current());
        self.store.set_from_resolved(next);
        self.seo.sync(&self.store, &mut self.sink);
    }

    /// Handle every queued hash-change event in arrival order. Returns the
    /// number of events handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Some(fragment) = self.history.next_event() {
            self.handle(&fragment);
            handled += 1;
        }
        handled
    }

    /// Point the address bar at a service. The overlay opens on the next
    /// [`pump`](Self::pump).
    pub fn open_service(&mut self, id: &str) {
        self.history.set_fragment(&format!("#/service/{id}"));
    }

    /// Point the address bar at an area. The overlay opens on the next
    /// [`pump`](Self::pump).
    pub fn open_area(&mut self, slug: &str) {
        self.history.set_fragment(&format!("#/locations/{slug}"));
    }

    /// Close any open overlay. Returns `false` when nothing was open.
    pub fn close(&mut self) -> bool {
        if !self.store.clear(&mut self.history) {
            return false;
        }
        self.seo.sync(&self.store, &mut self.sink);
        true
    }

    /// Close any open overlay and plan the scroll to `section`.
    pub fn scroll_to(&mut self, section: Section) -> ScrollPlan {
        let had_overlay = !self.store.current().is_none();
        if had_overlay {
            self.close();
        }
        ScrollPlan {
            section,
            delay: if had_overlay { self.close_delay } else { Duration::ZERO },
        }
    }

    pub fn current(&self) -> &ViewState {
        self.store.current()
    }

    pub fn store(&self) -> &ViewStateStore {
        &self.store
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
