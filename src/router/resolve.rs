//! Fragment → [`ViewState`] resolution.
//!
//! Routes are an ordered table of `(matcher, handler)` rules. The first rule
//! whose matcher extracts a key and whose handler finds an entity wins. When
//! nothing resolves, the view closes, unless the fragment still addresses the
//! same kind of overlay that is open (a transient fragment while navigating
//! must not flash the overlay closed).

use super::fragment::{COMMERCIAL_PREFIX, Fragment};
use super::view::ViewState;
use crate::catalog::Catalog;
use crate::log;

type Matcher = for<'a> fn(&Fragment<'a>) -> Option<&'a str>;
type Handler = fn(&Catalog, &str) -> Option<ViewState>;

struct Rule {
    name: &'static str,
    matcher: Matcher,
    handler: Handler,
}

/// Routes in priority order.
const RULES: [Rule; 3] = [
    Rule { name: "commercial area", matcher: commercial_key, handler: commercial_area },
    Rule { name: "area", matcher: area_key, handler: area },
    Rule { name: "service", matcher: service_key, handler: service },
];

/// `commercial-roofing-<suffix>` → `<suffix>` (may contain further segments).
fn commercial_key<'a>(fragment: &Fragment<'a>) -> Option<&'a str> {
    fragment
        .path()
        .strip_prefix(COMMERCIAL_PREFIX)
        .and_then(|rest| rest.strip_prefix('-'))
}

/// `locations/<slug>` → `<slug>`.
fn area_key<'a>(fragment: &Fragment<'a>) -> Option<&'a str> {
    if fragment.first_segment() == "locations" { fragment.rest() } else { None }
}

/// `service/<id>` → `<id>`.
fn service_key<'a>(fragment: &Fragment<'a>) -> Option<&'a str> {
    if fragment.targets_service() { fragment.rest() } else { None }
}

fn commercial_area(catalog: &Catalog, suffix: &str) -> Option<ViewState> {
    catalog
        .area_for_commercial(suffix)
        .map(|area| ViewState::CommercialArea(area.commercial_variant(catalog.business())))
}

fn area(catalog: &Catalog, slug: &str) -> Option<ViewState> {
    catalog.area_by_slug(slug).cloned().map(ViewState::Area)
}

fn service(catalog: &Catalog, id: &str) -> Option<ViewState> {
    catalog.service(id).cloned().map(ViewState::Service)
}

/// Resolve `fragment` against the catalog.
///
/// `current` is consulted only when no rule resolves. Lookup misses are
/// logged and never returned as errors.
pub fn resolve(fragment: &str, catalog: &Catalog, current: &ViewState) -> ViewState {
    let parsed = Fragment::parse(fragment);

    for rule in &RULES {
        let Some(key) = (rule.matcher)(&parsed) else {
            continue;
        };
        if let Some(view) = (rule.handler)(catalog, key) {
            return view;
        }
        log!("route"; "no {} matches `{}`", rule.name, key);
    }

    fallback(&parsed, current)
}

fn fallback(fragment: &Fragment<'_>, current: &ViewState) -> ViewState {
    match current {
        ViewState::Area(_) | ViewState::CommercialArea(_) if fragment.targets_area() => {
            current.clone()
        }
        ViewState::Service(_) if fragment.targets_service() => current.clone(),
        _ => ViewState::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::ViewKind;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_every_slug_resolves_to_its_area() {
        let catalog = catalog();
        for area in catalog.areas() {
            let view = resolve(&format!("#/locations/{}", area.slug), &catalog, &ViewState::None);
            assert_eq!(view.kind(), ViewKind::Area);
            assert_eq!(view.area().unwrap().slug, area.slug);
        }
    }

    #[test]
    fn test_every_id_resolves_to_its_service() {
        let catalog = catalog();
        for service in catalog.services() {
            let view = resolve(&format!("#/service/{}", service.id), &catalog, &ViewState::None);
            assert_eq!(view.service().unwrap().id, service.id);
        }
    }

    #[test]
    fn test_unknown_slug_without_selection_is_none() {
        let catalog = catalog();
        let view = resolve("#/locations/raleigh-roofing", &catalog, &ViewState::None);
        assert!(view.is_none());
    }

    #[test]
    fn test_commercial_charlotte() {
        let catalog = catalog();
        let view = resolve("#/commercial-roofing-charlotte", &catalog, &ViewState::None);

        let ViewState::CommercialArea(area) = &view else {
            panic!("expected commercial area, got {view}");
        };
        assert_eq!(area.name, "Charlotte Commercial");
        assert!(area.is_commercial());
        assert_eq!(area.features.len(), 4);
        assert!(area.description.starts_with("Best Roofers Now provides"));
        assert_ne!(area.features, catalog.area_by_id("charlotte").unwrap().features);
    }

    #[test]
    fn test_commercial_copy_uses_configured_business() {
        let catalog = catalog().with_business("Queen City Roofing");
        let view = resolve("#/commercial-roofing-concord", &catalog, &ViewState::None);

        let area = view.area().unwrap();
        assert!(area.description.starts_with("Queen City Roofing provides"));
        assert!(!area.description.contains("Best Roofers Now"));
    }

    #[test]
    fn test_commercial_does_not_mutate_catalog() {
        let catalog = catalog();
        let _ = resolve("#/commercial-roofing-charlotte", &catalog, &ViewState::None);
        let base = catalog.area_by_id("charlotte").unwrap();
        assert_eq!(base.name, "Charlotte");
        assert!(!base.is_commercial());
    }

    #[test]
    fn test_commercial_miss_closes() {
        let catalog = catalog();
        let view = resolve("#/commercial-roofing-raleigh", &catalog, &ViewState::None);
        assert!(view.is_none());

        let view = resolve("#/commercial-roofing-", &catalog, &ViewState::None);
        assert!(view.is_none());
    }

    #[test]
    fn test_service_then_location_clears_service() {
        let catalog = catalog();
        let current = resolve("#/service/2", &catalog, &ViewState::None);
        let view = resolve("#/locations/concord-roofing", &catalog, &current);

        assert!(view.service().is_none());
        assert_eq!(view.area().unwrap().id, "concord");
    }

    #[test]
    fn test_area_then_service_clears_area() {
        let catalog = catalog();
        let current = resolve("#/locations/concord-roofing", &catalog, &ViewState::None);
        let view = resolve("#/service/5", &catalog, &current);

        assert!(view.area().is_none());
        assert_eq!(view.service().unwrap().id, "5");
    }

    #[test]
    fn test_transient_location_keeps_open_area() {
        let catalog = catalog();
        let current = resolve("#/locations/concord-roofing", &catalog, &ViewState::None);

        for transient in ["#/locations/", "#/locations", "#/locations/conc"] {
            let view = resolve(transient, &catalog, &current);
            assert_eq!(view, current, "{transient}");
        }
    }

    #[test]
    fn test_transient_commercial_keeps_open_commercial_area() {
        let catalog = catalog();
        let current = resolve("#/commercial-roofing-concord", &catalog, &ViewState::None);
        let view = resolve("#/commercial-roofing-", &catalog, &current);
        assert_eq!(view, current);
    }

    #[test]
    fn test_transient_service_keeps_open_service() {
        let catalog = catalog();
        let current = resolve("#/service/3", &catalog, &ViewState::None);
        let view = resolve("#/service/", &catalog, &current);
        assert_eq!(view, current);
    }

    #[test]
    fn test_unknown_location_closes_open_service() {
        let catalog = catalog();
        let current = resolve("#/service/3", &catalog, &ViewState::None);
        let view = resolve("#/locations/nowhere", &catalog, &current);
        assert!(view.is_none());
    }

    #[test]
    fn test_section_anchor_closes_overlay() {
        let catalog = catalog();
        let current = resolve("#/service/3", &catalog, &ViewState::None);

        // `services` is a page section, not the service route
        assert!(resolve("#services", &catalog, &current).is_none());
        assert!(resolve("", &catalog, &current).is_none());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let catalog = catalog();
        for fragment in ["#/commercial-roofing-charlotte", "#/locations/davidson-roofing", "#/service/6", "#faq"] {
            let first = resolve(fragment, &catalog, &ViewState::None);
            let second = resolve(fragment, &catalog, &first);
            assert_eq!(first, second, "{fragment}");
        }
    }

    #[test]
    fn test_fragment_without_hash_resolves() {
        let catalog = catalog();
        let view = resolve("/service/1", &catalog, &ViewState::None);
        assert_eq!(view.service().unwrap().id, "1");
    }
}
