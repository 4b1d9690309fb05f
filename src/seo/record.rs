//! Search metadata record.

use serde::Serialize;
use serde_json::Value;

/// `og:type` of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageKind {
    /// Applied when a record carries no kind.
    #[serde(rename = "website")]
    Website,
    #[serde(rename = "article")]
    Article,
    #[serde(rename = "business.business")]
    BusinessListing,
}

impl PageKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
            Self::BusinessListing => "business.business",
        }
    }
}

/// JSON-LD payload: one object or an ordered list of objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StructuredData {
    Single(Value),
    List(Vec<Value>),
}

impl StructuredData {
    /// Compact JSON text for the script element.
    pub fn to_json(&self) -> String {
        match self {
            Self::Single(value) => value.to_string(),
            Self::List(values) => Value::Array(values.clone()).to_string(),
        }
    }
}

/// Complete metadata for one view. Built from scratch on every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoRecord {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PageKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<StructuredData>,
}
