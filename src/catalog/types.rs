//! Catalog entity types.

use serde::{Deserialize, Serialize};

/// Fixed feature list shown on every commercial area view.
pub const COMMERCIAL_FEATURES: [&str; 4] = [
    "TPO & EPDM Systems",
    "Industrial Coatings",
    "Commercial Maintenance",
    "Leak Detection",
];

/// A roofing service, addressed by `#/service/<id>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceEntity {
    pub id: String,
    pub title: String,
    pub category: String,
    /// Call-to-action label on the service card.
    pub action: String,
    pub image: String,
    /// Short description shown on the card.
    pub description: String,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub process_steps: Vec<String>,
}

impl ServiceEntity {
    /// Meta description, falling back to the card description.
    pub fn seo_description(&self) -> &str {
        self.meta_description.as_deref().unwrap_or(&self.description)
    }

    /// Long-form description, falling back to the card description.
    pub fn full_description(&self) -> &str {
        self.long_description.as_deref().unwrap_or(&self.description)
    }
}

/// Position on the service-area map, in percent of the map box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Coordinates {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaVariant {
    Commercial,
}

/// A service area, addressed by `#/locations/<slug>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AreaEntity {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub coordinates: Coordinates,
    /// Project map reference, when the area has one.
    #[serde(default)]
    pub map_id: Option<String>,
    #[serde(default)]
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub meta_description: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub variant: Option<AreaVariant>,
}

impl AreaEntity {
    /// Build the commercial view of this area, with copy naming `business`.
    ///
    /// Returns a new value; `self` (the catalog entry) is left untouched.
    pub fn commercial_variant(&self, business: &str) -> AreaEntity {
        AreaEntity {
            name: format!("{} Commercial", self.name),
            description: format!(
                "{business} provides premier Commercial Roofing services in {}. \
                 From flat roof TPO systems to industrial coatings, we ensure your business \
                 stays protected with minimal disruption.",
                self.name
            ),
            features: COMMERCIAL_FEATURES.iter().map(|f| (*f).to_owned()).collect(),
            variant: Some(AreaVariant::Commercial),
            ..self.clone()
        }
    }

    pub fn is_commercial(&self) -> bool {
        self.variant == Some(AreaVariant::Commercial)
    }

    /// Image for previews, or `fallback` when the area has none.
    pub fn image_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.image.is_empty() { fallback } else { &self.image }
    }
}

/// A frequently asked question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}
