//! Structured fragment parsing.
//!
//! `#/locations/charlotte-roofing` parses to the path
//! `locations/charlotte-roofing`, first segment `locations` and rest
//! `charlotte-roofing`. The leading `#` and `/` are both optional.

/// Prefix of the first segment for commercial area routes.
pub const COMMERCIAL_PREFIX: &str = "commercial-roofing";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    path: &'a str,
}

impl<'a> Fragment<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let raw = raw.trim();
        let raw = raw.strip_prefix('#').unwrap_or(raw);
        Self { path: raw.trim_start_matches('/') }
    }

    /// Everything after the leading `#/`.
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// No path at all (`""`, `#` or `#/`).
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn first_segment(&self) -> &'a str {
        self.path.split('/').next().unwrap_or_default()
    }

    /// Path after the first segment and its separator, if any.
    pub fn rest(&self) -> Option<&'a str> {
        self.path.split_once('/').map(|(_, rest)| rest)
    }

    /// Whether the first segment addresses an area overlay.
    pub fn targets_area(&self) -> bool {
        let first = self.first_segment();
        first == "locations" || first.starts_with(COMMERCIAL_PREFIX)
    }

    /// Whether the first segment addresses a service overlay.
    pub fn targets_service(&self) -> bool {
        self.first_segment() == "service"
    }
}
