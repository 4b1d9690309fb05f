//! Entity catalogs: services, service areas and FAQ entries.
//!
//! The catalog is loaded once at startup, either from the built-in
//! `embed/catalog.toml` or from a file named in `[catalog].path`, and is
//! read-only afterwards. Lookups are exact or substring matches only.
//!
//! The catalog also carries the business name used in derived copy such as
//! commercial area descriptions. It defaults to the built-in site name and is
//! replaced with `[site].name` at startup.

mod types;

pub use types::{AreaEntity, Faq, ServiceEntity};

use crate::config::defaults;
use serde::Deserialize;
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Built-in catalog (embedded at compile time)
const BUILTIN_CATALOG: &str = include_str!("../embed/catalog.toml");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error when reading catalog `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Catalog parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("duplicate {kind} `{key}` in catalog")]
    Duplicate { kind: &'static str, key: String },

    #[error("area `{0}` has an empty slug")]
    EmptySlug(String),
}

/// Immutable, ordered entity lists.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default)]
    services: Vec<ServiceEntity>,
    #[serde(default)]
    areas: Vec<AreaEntity>,
    #[serde(default)]
    faqs: Vec<Faq>,
    #[serde(skip)]
    business: String,
}

impl Catalog {
    /// Parse and validate a catalog from TOML.
    pub fn from_str(content: &str) -> Result<Self, CatalogError> {
        let mut catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        catalog.business = defaults::site::name();
        Ok(catalog)
    }

    /// Use `name` in derived copy.
    pub fn with_business(mut self, name: &str) -> Self {
        self.business = name.to_owned();
        self
    }

    /// Business name used in derived copy.
    pub fn business(&self) -> &str {
        &self.business
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content =
            fs::read_to_string(path).map_err(|err| CatalogError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_str(BUILTIN_CATALOG)
    }

    /// Load from `path` when given, otherwise the built-in catalog.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }

    /// Check key uniqueness: service ids, area ids and area slugs.
    fn validate(&self) -> Result<(), CatalogError> {
        ensure_unique("service id", self.services.iter().map(|s| s.id.as_str()))?;
        ensure_unique("area id", self.areas.iter().map(|a| a.id.as_str()))?;
        if let Some(area) = self.areas.iter().find(|a| a.slug.trim().is_empty()) {
            return Err(CatalogError::EmptySlug(area.id.clone()));
        }
        ensure_unique("area slug", self.areas.iter().map(|a| a.slug.as_str()))
    }

    pub fn services(&self) -> &[ServiceEntity] {
        &self.services
    }

    pub fn areas(&self) -> &[AreaEntity] {
        &self.areas
    }

    pub fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    /// Exact match on service id.
    pub fn service(&self, id: &str) -> Option<&ServiceEntity> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Exact match on area slug.
    pub fn area_by_slug(&self, slug: &str) -> Option<&AreaEntity> {
        self.areas.iter().find(|a| a.slug == slug)
    }

    pub fn area_by_id(&self, id: &str) -> Option<&AreaEntity> {
        self.areas.iter().find(|a| a.id == id)
    }

    /// First area whose slug contains `suffix` or whose name equals it
    /// case-insensitively. An empty suffix matches nothing.
    pub fn area_for_commercial(&self, suffix: &str) -> Option<&AreaEntity> {
        if suffix.is_empty() {
            return None;
        }
        let lower = suffix.to_lowercase();
        self.areas
            .iter()
            .find(|a| a.slug.contains(suffix) || a.name.to_lowercase() == lower)
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(CatalogError::Duplicate { kind, key: key.to_owned() });
        }
    }
    Ok(())
}
