//! Metadata sinks and the in-memory document head.
//!
//! [`HeadDocument::apply`] reconciles the head against a record: every
//! managed element is looked up by its identifying attribute and only
//! created when missing, so repeated applies never duplicate anything.

use super::record::{PageKind, SeoRecord};

/// Id of the script element that carries the dynamic JSON-LD.
pub const JSON_LD_SCRIPT_ID: &str = "dynamic-json-ld";

pub trait MetadataSink {
    fn apply(&mut self, record: &SeoRecord);
}

/// Collects every applied record, in order.
impl MetadataSink for Vec<SeoRecord> {
    fn apply(&mut self, record: &SeoRecord) {
        self.push(record.clone());
    }
}

/// Attribute that identifies a `<meta>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadElement {
    Title(String),
    Meta { attr: MetaAttr, key: String, content: String },
    Link { rel: String, href: String },
    Script { id: String, mime: String, body: String },
}

/// Document head plus the address the document is showing.
#[derive(Debug, Clone, Default)]
pub struct HeadDocument {
    elements: Vec<HeadElement>,
    /// Current page address, the `og:url` fallback.
    location: String,
}

impl HeadDocument {
    pub fn new(location: impl Into<String>) -> Self {
        Self { elements: Vec::new(), location: location.into() }
    }

    pub fn elements(&self) -> &[HeadElement] {
        &self.elements
    }

    pub fn title(&self) -> Option<&str> {
        self.elements.iter().find_map(|el| match el {
            HeadElement::Title(title) => Some(title.as_str()),
            _ => None,
        })
    }

    #[cfg(test)]
    pub fn meta(&self, attr: MetaAttr, key: &str) -> Option<&str> {
        self.elements.iter().find_map(|el| match el {
            HeadElement::Meta { attr: a, key: k, content } if *a == attr && k == key => {
                Some(content.as_str())
            }
            _ => None,
        })
    }

    pub fn link(&self, rel: &str) -> Option<&str> {
        self.elements.iter().find_map(|el| match el {
            HeadElement::Link { rel: r, href } if r == rel => Some(href.as_str()),
            _ => None,
        })
    }

    /// Body of the script element with `id`.
    #[cfg(test)]
    pub fn script(&self, id: &str) -> Option<&str> {
        self.elements.iter().find_map(|el| match el {
            HeadElement::Script { id: i, body, .. } if i == id => Some(body.as_str()),
            _ => None,
        })
    }

    fn set_title(&mut self, title: &str) {
        match self.elements.iter_mut().find(|el| matches!(el, HeadElement::Title(_))) {
            Some(HeadElement::Title(existing)) => *existing = title.to_owned(),
            _ => self.elements.push(HeadElement::Title(title.to_owned())),
        }
    }

    fn set_meta(&mut self, attr: MetaAttr, key: &str, value: &str) {
        let found = self.elements.iter_mut().find_map(|el| match el {
            HeadElement::Meta { attr: a, key: k, content } if *a == attr && k == key => {
                Some(content)
            }
            _ => None,
        });
        match found {
            Some(content) => *content = value.to_owned(),
            None => self.elements.push(HeadElement::Meta {
                attr,
                key: key.to_owned(),
                content: value.to_owned(),
            }),
        }
    }

    fn set_link(&mut self, rel: &str, value: &str) {
        let found = self.elements.iter_mut().find_map(|el| match el {
            HeadElement::Link { rel: r, href } if r == rel => Some(href),
            _ => None,
        });
        match found {
            Some(href) => *href = value.to_owned(),
            None => self.elements.push(HeadElement::Link {
                rel: rel.to_owned(),
                href: value.to_owned(),
            }),
        }
    }

    fn set_script(&mut self, id: &str, value: String) {
        let found = self.elements.iter_mut().find_map(|el| match el {
            HeadElement::Script { id: i, body, .. } if i == id => Some(body),
            _ => None,
        });
        match found {
            Some(body) => *body = value,
            None => self.elements.push(HeadElement::Script {
                id: id.to_owned(),
                mime: "application/ld+json".to_owned(),
                body: value,
            }),
        }
    }

    fn remove_script(&mut self, id: &str) {
        self.elements
            .retain(|el| !matches!(el, HeadElement::Script { id: i, .. } if i == id));
    }
}

impl MetadataSink for HeadDocument {
    fn apply(&mut self, record: &SeoRecord) {
        use MetaAttr::{Name, Property};

        self.set_title(&record.title);

        self.set_meta(Name, "description", &record.description);
        if let Some(keywords) = &record.keywords {
            self.set_meta(Name, "keywords", keywords);
        }

        let url = record.url.clone().unwrap_or_else(|| self.location.clone());
        self.set_meta(Property, "og:title", &record.title);
        self.set_meta(Property, "og:description", &record.description);
        self.set_meta(Property, "og:url", &url);
        let kind = record.kind.unwrap_or(PageKind::Website);
        self.set_meta(Property, "og:type", kind.as_str());
        if let Some(image) = &record.image {
            self.set_meta(Property, "og:image", image);
        }

        self.set_meta(Name, "twitter:title", &record.title);
        self.set_meta(Name, "twitter:description", &record.description);
        if let Some(image) = &record.image {
            self.set_meta(Name, "twitter:image", image);
        }

        if let Some(url) = &record.url {
            self.set_link("canonical", url);
        }

        match &record.schema {
            Some(schema) => self.set_script(JSON_LD_SCRIPT_ID, schema.to_json()),
            None => self.remove_script(JSON_LD_SCRIPT_ID),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::record::StructuredData;
    use serde_json::json;

    fn record(title: &str, schema: Option<StructuredData>) -> SeoRecord {
        SeoRecord {
            title: title.into(),
            description: format!("{title} description"),
            keywords: Some("roofing".into()),
            image: Some("https://img/x.webp".into()),
            url: Some(format!("https://site/#/{title}")),
            kind: Some(PageKind::Article),
            schema,
        }
    }

    #[test]
    fn test_apply_sets_all_managed_elements() {
        let mut head = HeadDocument::new("https://site/");
        head.apply(&record("a", Some(StructuredData::Single(json!({"k": 1})))));

        assert_eq!(head.title(), Some("a"));
        assert_eq!(head.meta(MetaAttr::Name, "description"), Some("a description"));
        assert_eq!(head.meta(MetaAttr::Name, "keywords"), Some("roofing"));
        assert_eq!(head.meta(MetaAttr::Property, "og:title"), Some("a"));
        assert_eq!(head.meta(MetaAttr::Property, "og:url"), Some("https://site/#/a"));
        assert_eq!(head.meta(MetaAttr::Property, "og:type"), Some("article"));
        assert_eq!(head.meta(MetaAttr::Property, "og:image"), Some("https://img/x.webp"));
        assert_eq!(head.meta(MetaAttr::Name, "twitter:image"), Some("https://img/x.webp"));
        assert_eq!(head.link("canonical"), Some("https://site/#/a"));
        assert_eq!(head.script(JSON_LD_SCRIPT_ID), Some(r#"{"k":1}"#));
    }

    #[test]
    fn test_apply_twice_never_duplicates() {
        let mut head = HeadDocument::new("https://site/");
        head.apply(&record("a", Some(StructuredData::Single(json!({})))));
        let count = head.elements().len();

        head.apply(&record("b", Some(StructuredData::List(vec![json!({})]))));
        assert_eq!(head.elements().len(), count);
        assert_eq!(head.title(), Some("b"));
        assert_eq!(head.script(JSON_LD_SCRIPT_ID), Some("[{}]"));
    }

    #[test]
    fn test_missing_schema_removes_script() {
        let mut head = HeadDocument::new("https://site/");
        head.apply(&record("a", Some(StructuredData::Single(json!({"k": 1})))));
        head.apply(&record("b", None));

        assert_eq!(head.script(JSON_LD_SCRIPT_ID), None);
        assert!(
            !head
                .elements()
                .iter()
                .any(|el| matches!(el, HeadElement::Script { .. }))
        );
    }

    #[test]
    fn test_untyped_record_is_website() {
        let mut head = HeadDocument::new("https://site/");
        head.apply(&record("a", None));
        assert_eq!(head.meta(MetaAttr::Property, "og:type"), Some("article"));

        let mut rec = record("b", None);
        rec.kind = None;
        head.apply(&rec);
        assert_eq!(head.meta(MetaAttr::Property, "og:type"), Some("website"));
    }

    #[test]
    fn test_og_url_falls_back_to_location() {
        let mut head = HeadDocument::new("https://site/#/somewhere");
        let mut rec = record("a", None);
        rec.url = None;
        head.apply(&rec);

        assert_eq!(head.meta(MetaAttr::Property, "og:url"), Some("https://site/#/somewhere"));
        assert_eq!(head.link("canonical"), None);
    }

    #[test]
    fn test_optional_fields_left_in_place_when_absent() {
        let mut head = HeadDocument::new("https://site/");
        head.apply(&record("a", None));

        let mut rec = record("b", None);
        rec.keywords = None;
        rec.image = None;
        head.apply(&rec);

        // the sink only overwrites what it is given
        assert_eq!(head.meta(MetaAttr::Name, "keywords"), Some("roofing"));
        assert_eq!(head.meta(MetaAttr::Property, "og:image"), Some("https://img/x.webp"));
    }

    #[test]
    fn test_name_and_property_keys_are_distinct() {
        let mut head = HeadDocument::new("");
        head.set_meta(MetaAttr::Name, "og:title", "by name");
        head.set_meta(MetaAttr::Property, "og:title", "by property");

        assert_eq!(head.meta(MetaAttr::Name, "og:title"), Some("by name"));
        assert_eq!(head.meta(MetaAttr::Property, "og:title"), Some("by property"));
    }

    #[test]
    fn test_vec_sink_records_in_order() {
        let mut sink: Vec<SeoRecord> = Vec::new();
        sink.apply(&record("a", None));
        sink.apply(&record("b", None));

        let titles: Vec<_> = sink.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["a", "b"]);
    }
}
