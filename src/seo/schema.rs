//! JSON-LD builders (schema.org vocabulary).

use crate::catalog::{AreaEntity, Faq, ServiceEntity};
use crate::config::SiteSection;
use serde_json::{Value, json};

const CONTEXT: &str = "https://schema.org";

pub struct SchemaBuilder<'a> {
    site: &'a SiteSection,
}

impl<'a> SchemaBuilder<'a> {
    pub fn new(site: &'a SiteSection) -> Self {
        Self { site }
    }

    /// Head-office postal address.
    fn postal_address(&self) -> Value {
        let site = self.site;
        json!({
            "@type": "PostalAddress",
            "streetAddress": site.address.street,
            "addressLocality": site.city,
            "addressRegion": site.region,
            "postalCode": site.address.postal_code,
            "addressCountry": site.address.country,
        })
    }

    /// Locality-only address for a city.
    fn city_address(&self, city: &str) -> Value {
        json!({
            "@type": "PostalAddress",
            "addressLocality": city,
            "addressRegion": self.site.region,
            "addressCountry": self.site.address.country,
        })
    }

    /// Top-level business record.
    pub fn business(&self) -> Value {
        let site = self.site;
        json!({
            "@context": CONTEXT,
            "@type": "RoofingContractor",
            "name": site.name,
            "url": site.url,
            "telephone": site.telephone,
            "image": site.logo,
            "address": self.postal_address(),
            "priceRange": site.price_range,
        })
    }

    /// `FAQPage` with one question per entry, in catalog order.
    pub fn faq_page(&self, faqs: &[Faq]) -> Value {
        let questions: Vec<Value> = faqs
            .iter()
            .map(|faq| {
                json!({
                    "@type": "Question",
                    "name": faq.question,
                    "acceptedAnswer": {
                        "@type": "Answer",
                        "text": faq.answer,
                    },
                })
            })
            .collect();

        json!({
            "@context": CONTEXT,
            "@type": "FAQPage",
            "mainEntity": questions,
        })
    }

    /// `Service` listing provided by the business in its home city.
    pub fn service(&self, service: &ServiceEntity) -> Value {
        let site = self.site;
        json!({
            "@context": CONTEXT,
            "@type": "Service",
            "serviceType": service.title,
            "name": service.title,
            "description": service.full_description(),
            "provider": {
                "@type": "RoofingContractor",
                "name": site.name,
                "url": site.url,
                "telephone": site.telephone,
                "image": site.logo,
                "address": self.postal_address(),
                "priceRange": site.price_range,
            },
            "areaServed": {
                "@type": "City",
                "name": site.city,
                "geo": {
                    "@type": "GeoCoordinates",
                    "latitude": site.geo.latitude,
                    "longitude": site.geo.longitude,
                },
                "address": self.city_address(&site.city),
            },
            "hasOfferCatalog": {
                "@type": "OfferCatalog",
                "name": service.category,
                "itemListElement": [{
                    "@type": "Offer",
                    "itemOffered": {
                        "@type": "Service",
                        "name": service.title,
                    },
                }],
            },
        })
    }

    /// Local `RoofingContractor` for an area, linked to the business.
    pub fn local_business(&self, area: &AreaEntity, url: &str) -> Value {
        let site = self.site;
        json!({
            "@context": CONTEXT,
            "@type": "RoofingContractor",
            "name": format!("{} - {}", site.name, area.name),
            "description": area.description,
            "image": area.image_or(&site.logo),
            "telephone": site.telephone,
            "url": url,
            "priceRange": site.price_range,
            "openingHoursSpecification": [
                {
                    "@type": "OpeningHoursSpecification",
                    "dayOfWeek": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
                    "opens": "08:00",
                    "closes": "18:00",
                },
                {
                    "@type": "OpeningHoursSpecification",
                    "dayOfWeek": "Saturday",
                    "opens": "09:00",
                    "closes": "14:00",
                },
            ],
            "parentOrganization": {
                "@type": "RoofingContractor",
                "name": site.name,
                "url": site.url,
                "image": site.logo,
            },
            "address": self.city_address(&area.name),
            "areaServed": {
                "@type": "City",
                "name": area.name,
                "address": self.city_address(&area.name),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn site() -> SiteSection {
        SiteSection::default()
    }

    #[test]
    fn test_business_record() {
        let site = site();
        let business = SchemaBuilder::new(&site).business();

        assert_eq!(business["@type"], "RoofingContractor");
        assert_eq!(business["name"], "Best Roofers Now");
        assert_eq!(business["address"]["postalCode"], "28262");
        assert_eq!(business["address"]["addressLocality"], "Charlotte");
    }

    #[test]
    fn test_faq_page_maps_every_entry() {
        let site = site();
        let catalog = Catalog::builtin().unwrap();
        let faq = SchemaBuilder::new(&site).faq_page(catalog.faqs());

        let entries = faq["mainEntity"].as_array().unwrap();
        assert_eq!(entries.len(), catalog.faqs().len());
        assert_eq!(entries[0]["name"], catalog.faqs()[0].question.as_str());
        assert_eq!(entries[0]["acceptedAnswer"]["@type"], "Answer");
    }

    #[test]
    fn test_service_record() {
        let site = site();
        let catalog = Catalog::builtin().unwrap();
        let service = catalog.service("3").unwrap();
        let record = SchemaBuilder::new(&site).service(service);

        assert_eq!(record["@type"], "Service");
        assert_eq!(record["name"], "Storm Restoration");
        assert_eq!(record["provider"]["name"], "Best Roofers Now");
        assert_eq!(record["areaServed"]["name"], "Charlotte");
        assert_eq!(record["hasOfferCatalog"]["name"], "Insurance Claims");
        assert_eq!(record["description"], service.full_description());
    }

    #[test]
    fn test_local_business_record() {
        let site = site();
        let catalog = Catalog::builtin().unwrap();
        let area = catalog.area_by_id("monroe").unwrap();
        let record = SchemaBuilder::new(&site).local_business(area, "https://x/#/locations/monroe-roofing");

        assert_eq!(record["name"], "Best Roofers Now - Monroe");
        assert_eq!(record["parentOrganization"]["url"], "https://bestroofingnow.com");
        assert_eq!(record["openingHoursSpecification"].as_array().unwrap().len(), 2);
        assert_eq!(record["areaServed"]["address"]["addressLocality"], "Monroe");
        assert_eq!(record["url"], "https://x/#/locations/monroe-roofing");
    }
}
