//! Resolved view state.

use crate::catalog::{AreaEntity, ServiceEntity};
use serde::Serialize;
use std::fmt;

/// Which overlay is open. Exactly one variant is active, so a service and an
/// area can never be selected together.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    None,
    Service(ServiceEntity),
    Area(AreaEntity),
    /// Derived commercial copy of a catalog area.
    CommercialArea(AreaEntity),
}

/// Discriminant of [`ViewState`], for logging and state checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    None,
    Service,
    Area,
    CommercialArea,
}

impl ViewState {
    pub fn kind(&self) -> ViewKind {
        match self {
            Self::None => ViewKind::None,
            Self::Service(_) => ViewKind::Service,
            Self::Area(_) => ViewKind::Area,
            Self::CommercialArea(_) => ViewKind::CommercialArea,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn service(&self) -> Option<&ServiceEntity> {
        match self {
            Self::Service(service) => Some(service),
            _ => None,
        }
    }

    /// Selected area, plain or commercial.
    pub fn area(&self) -> Option<&AreaEntity> {
        match self {
            Self::Area(area) | Self::CommercialArea(area) => Some(area),
            _ => None,
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Service(service) => write!(f, "service `{}`", service.id),
            Self::Area(area) => write!(f, "area `{}`", area.slug),
            Self::CommercialArea(area) => write!(f, "commercial area `{}`", area.slug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_default_is_none() {
        let view = ViewState::default();
        assert!(view.is_none());
        assert_eq!(view.kind(), ViewKind::None);
        assert!(view.service().is_none());
        assert!(view.area().is_none());
    }

    #[test]
    fn test_accessors_follow_variant() {
        let catalog = Catalog::builtin().unwrap();
        let area = catalog.area_by_id("concord").unwrap();

        let view = ViewState::CommercialArea(area.commercial_variant(catalog.business()));
        assert_eq!(view.kind(), ViewKind::CommercialArea);
        assert_eq!(view.area().unwrap().name, "Concord Commercial");
        assert!(view.service().is_none());

        let view = ViewState::Service(catalog.service("4").unwrap().clone());
        assert_eq!(view.service().unwrap().title, "Drone Inspections");
        assert!(view.area().is_none());
    }

    #[test]
    fn test_display() {
        let catalog = Catalog::builtin().unwrap();
        let area = catalog.area_by_id("belmont").unwrap().clone();

        assert_eq!(ViewState::None.to_string(), "none");
        assert_eq!(ViewState::Area(area).to_string(), "area `belmont-roofing`");
    }
}
