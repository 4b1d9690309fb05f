//! `[site]` section configuration.
//!
//! Business identity and the default search metadata shown when no overlay
//! is open.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in roofsite.toml.
///
/// # Example
/// ```toml
/// [site]
/// name = "Best Roofers Now"
/// url = "https://bestroofingnow.com"
/// city = "Charlotte"
/// region = "NC"
///
/// [site.address]
/// street = "10130 Mallard Creek Road, Suite 300"
/// postal_code = "28262"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Business name, used in titles and structured data.
    #[serde(default = "defaults::site::name")]
    #[educe(Default = defaults::site::name())]
    pub name: String,

    /// Canonical site origin, without trailing slash.
    #[serde(default = "defaults::site::url")]
    #[educe(Default = defaults::site::url())]
    pub url: String,

    /// E.164-ish telephone for structured data.
    #[serde(default = "defaults::site::telephone")]
    #[educe(Default = defaults::site::telephone())]
    pub telephone: String,

    /// Human-readable phone number used in assistant fallbacks.
    #[serde(default = "defaults::site::display_phone")]
    #[educe(Default = defaults::site::display_phone())]
    pub display_phone: String,

    /// Logo image, fallback image for areas without one.
    #[serde(default = "defaults::site::logo")]
    #[educe(Default = defaults::site::logo())]
    pub logo: String,

    /// Home city of the business.
    #[serde(default = "defaults::site::city")]
    #[educe(Default = defaults::site::city())]
    pub city: String,

    /// State / region code appended to area titles.
    #[serde(default = "defaults::site::region")]
    #[educe(Default = defaults::site::region())]
    pub region: String,

    /// Default document title.
    #[serde(default = "defaults::site::title")]
    #[educe(Default = defaults::site::title())]
    pub title: String,

    /// Default meta description.
    #[serde(default = "defaults::site::description")]
    #[educe(Default = defaults::site::description())]
    pub description: String,

    /// Default meta keywords.
    #[serde(default = "defaults::site::keywords")]
    #[educe(Default = defaults::site::keywords())]
    pub keywords: String,

    /// Default social preview image. Falls back to the logo when unset.
    #[serde(default)]
    pub image: Option<String>,

    #[serde(default = "defaults::site::price_range")]
    #[educe(Default = defaults::site::price_range())]
    pub price_range: String,

    #[serde(default)]
    pub address: AddressSection,

    #[serde(default)]
    pub geo: GeoSection,
}

impl SiteSection {
    /// Social preview image for the default view.
    pub fn default_image(&self) -> &str {
        self.image.as_deref().unwrap_or(&self.logo)
    }

    /// Absolute URL for a fragment route, e.g. `https://host/#/service/1`.
    pub fn fragment_url(&self, fragment: &str) -> String {
        format!("{}/#/{}", self.url.trim_end_matches('/'), fragment.trim_start_matches(['#', '/']))
    }
}

/// `[site.address]` postal address of the head office.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct AddressSection {
    #[serde(default = "defaults::site::address::street")]
    #[educe(Default = defaults::site::address::street())]
    pub street: String,

    #[serde(default = "defaults::site::address::postal_code")]
    #[educe(Default = defaults::site::address::postal_code())]
    pub postal_code: String,

    #[serde(default = "defaults::site::address::country")]
    #[educe(Default = defaults::site::address::country())]
    pub country: String,
}

/// `[site.geo]` coordinates of the home city.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct GeoSection {
    #[serde(default = "defaults::site::geo::latitude")]
    #[educe(Default = defaults::site::geo::latitude())]
    pub latitude: f64,

    #[serde(default = "defaults::site::geo::longitude")]
    #[educe(Default = defaults::site::geo::longitude())]
    pub longitude: f64,
}
