//! View-state store.
//!
//! Single owner of the current [`ViewState`]. Writes come only from resolver
//! output (`set_from_resolved`) or from closing an overlay (`clear`). Each
//! write bumps a revision so observers can tell one change from the next,
//! even when the new state equals the old one.

use crate::catalog::{AreaEntity, ServiceEntity};
use crate::history::History;
use crate::log;
use crate::router::ViewState;

#[derive(Debug, Default)]
pub struct ViewStateStore {
    state: ViewState,
    revision: u64,
}

impl ViewStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current state.
    pub fn set_from_resolved(&mut self, state: ViewState) {
        self.state = state;
        self.revision += 1;
    }

    pub fn current(&self) -> &ViewState {
        &self.state
    }

    /// Number of writes since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn selected_service(&self) -> Option<&ServiceEntity> {
        self.state.service()
    }

    pub fn selected_area(&self) -> Option<&AreaEntity> {
        self.state.area()
    }

    /// Close any overlay and drop the fragment from the address bar.
    ///
    /// The fragment is removed with a push that emits no hash-change event,
    /// so no resolver pass follows. History failures are logged and the
    /// state is cleared anyway. Returns `false` when there was nothing to
    /// clear.
    pub fn clear(&mut self, history: &mut impl History) -> bool {
        if self.state.is_none() && history.fragment().is_empty() {
            return false;
        }
        if !history.fragment().is_empty()
            && let Err(err) = history.push_without_fragment()
        {
            log!("store"; "could not reset address bar: {err}");
        }
        self.set_from_resolved(ViewState::None);
        true
    }
}
