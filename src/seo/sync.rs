//! View state → metadata record, pushed to a sink once per store change.

use super::record::{PageKind, SeoRecord, StructuredData};
use super::schema::SchemaBuilder;
use super::sink::MetadataSink;
use crate::catalog::{AreaEntity, Catalog, ServiceEntity};
use crate::config::SiteSection;
use crate::router::ViewState;
use crate::store::ViewStateStore;

pub struct SeoSynchronizer<'a> {
    site: &'a SiteSection,
    catalog: &'a Catalog,
    /// Store revision of the last record handed to the sink.
    synced: Option<u64>,
}

impl<'a> SeoSynchronizer<'a> {
    pub fn new(site: &'a SiteSection, catalog: &'a Catalog) -> Self {
        Self { site, catalog, synced: None }
    }

    /// Derive the full record for a view. Every field is set, so applying
    /// it leaves nothing behind from the previous view.
    pub fn derive(&self, view: &ViewState) -> SeoRecord {
        match view {
            ViewState::None => self.home(),
            ViewState::Service(service) => self.service(service),
            ViewState::Area(area) | ViewState::CommercialArea(area) => self.area(area),
        }
    }

    /// Apply the current view to `sink` unless this store revision was
    /// already applied. Returns whether the sink was called.
    pub fn sync(&mut self, store: &ViewStateStore, sink: &mut impl MetadataSink) -> bool {
        if self.synced == Some(store.revision()) {
            return false;
        }
        sink.apply(&self.derive(store.current()));
        self.synced = Some(store.revision());
        true
    }

    fn home(&self) -> SeoRecord {
        let schema = SchemaBuilder::new(self.site);
        SeoRecord {
            title: self.site.title.clone(),
            description: self.site.description.clone(),
            keywords: Some(self.site.keywords.clone()),
            image: Some(self.site.default_image().to_owned()),
            url: Some(self.site.url.clone()),
            kind: Some(PageKind::BusinessListing),
            schema: Some(StructuredData::List(vec![
                schema.business(),
                schema.faq_page(self.catalog.faqs()),
            ])),
        }
    }

    fn service(&self, service: &ServiceEntity) -> SeoRecord {
        SeoRecord {
            title: format!("{} | {}", service.title, self.site.name),
            description: service.seo_description().to_owned(),
            keywords: Some(format!(
                "{}, Roofing {}, {}",
                service.title, self.site.city, service.category
            )),
            image: Some(service.image.clone()),
            url: Some(self.site.fragment_url(&format!("service/{}", service.id))),
            kind: Some(PageKind::Article),
            schema: Some(StructuredData::Single(SchemaBuilder::new(self.site).service(service))),
        }
    }

    fn area(&self, area: &AreaEntity) -> SeoRecord {
        let url = self.site.fragment_url(&format!("locations/{}", area.slug));
        let schema = SchemaBuilder::new(self.site).local_business(area, &url);
        SeoRecord {
            title: format!(
                "{} in {}, {} | Local Experts",
                self.site.name, area.name, self.site.region
            ),
            description: area.meta_description.clone(),
            keywords: Some(area.keywords.clone()),
            image: Some(area.image_or(&self.site.logo).to_owned()),
            url: Some(url),
            kind: Some(PageKind::BusinessListing),
            schema: Some(StructuredData::Single(schema)),
        }
    }
}
