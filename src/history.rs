//! Address-bar history and hash-change event source.
//!
//! The [`History`] trait is the only way the routing core touches the
//! address bar. [`MemoryHistory`] is the in-process implementation used by
//! the CLI, the snapshot build and tests.

use std::collections::VecDeque;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("history manipulation is not supported")]
    Unsupported,
}

pub trait History {
    /// Current fragment, including the leading `#` (empty when none).
    fn fragment(&self) -> &str;

    /// Navigate to `fragment`, queuing a hash-change event when it differs
    /// from the current one.
    fn set_fragment(&mut self, fragment: &str);

    /// Push an entry without a fragment. Emits no hash-change event.
    fn push_without_fragment(&mut self) -> Result<(), NavigationError>;

    /// Next pending hash-change event, oldest first.
    fn next_event(&mut self) -> Option<String>;
}

#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
    events: VecDeque<String>,
    push_supported: bool,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![normalize(initial)],
            cursor: 0,
            events: VecDeque::new(),
            push_supported: true,
        }
    }

    /// History whose push primitive always fails.
    #[cfg(test)]
    pub fn without_push(initial: &str) -> Self {
        Self { push_supported: false, ..Self::new(initial) }
    }

    /// Number of entries in the session history.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Go back one entry. Queues a hash-change event when the fragment
    /// changes. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let before = self.entries[self.cursor].clone();
        self.cursor -= 1;
        if self.entries[self.cursor] != before {
            self.events.push_back(self.entries[self.cursor].clone());
        }
        true
    }

    fn push(&mut self, entry: String) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor += 1;
    }
}

impl History for MemoryHistory {
    fn fragment(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn set_fragment(&mut self, fragment: &str) {
        let fragment = normalize(fragment);
        if fragment == self.fragment() {
            return;
        }
        self.push(fragment.clone());
        self.events.push_back(fragment);
    }

    fn push_without_fragment(&mut self) -> Result<(), NavigationError> {
        if !self.push_supported {
            return Err(NavigationError::Unsupported);
        }
        self.push(String::new());
        Ok(())
    }

    fn next_event(&mut self) -> Option<String> {
        self.events.pop_front()
    }
}

/// Ensure a non-empty fragment starts with `#`.
fn normalize(fragment: &str) -> String {
    if fragment.is_empty() || fragment.starts_with('#') {
        fragment.to_owned()
    } else {
        format!("#{fragment}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_fragment_queues_event() {
        let mut history = MemoryHistory::new("");
        history.set_fragment("#/service/1");

        assert_eq!(history.fragment(), "#/service/1");
        assert_eq!(history.next_event().as_deref(), Some("#/service/1"));
        assert_eq!(history.next_event(), None);
    }

    #[test]
    fn test_set_fragment_adds_hash() {
        let mut history = MemoryHistory::new("/locations/x");
        assert_eq!(history.fragment(), "#/locations/x");

        history.set_fragment("/service/2");
        assert_eq!(history.fragment(), "#/service/2");
    }

    #[test]
    fn test_same_fragment_does_not_fire() {
        let mut history = MemoryHistory::new("#/service/1");
        history.set_fragment("#/service/1");

        assert_eq!(history.next_event(), None);
        assert_eq!(history.entry_count(), 1);
    }

    #[test]
    fn test_events_keep_delivery_order() {
        let mut history = MemoryHistory::new("");
        history.set_fragment("#/service/1");
        history.set_fragment("#/service/2");
        history.set_fragment("#/locations/concord-roofing");

        let events: Vec<_> = std::iter::from_fn(|| history.next_event()).collect();
        assert_eq!(
            events,
            vec!["#/service/1", "#/service/2", "#/locations/concord-roofing"]
        );
    }

    #[test]
    fn test_push_without_fragment_is_silent() {
        let mut history = MemoryHistory::new("#/service/1");
        history.push_without_fragment().unwrap();

        assert_eq!(history.fragment(), "");
        assert_eq!(history.entry_count(), 2);
        assert_eq!(history.next_event(), None);
    }

    #[test]
    fn test_push_unsupported() {
        let mut history = MemoryHistory::without_push("#/service/1");
        assert_eq!(history.push_without_fragment(), Err(NavigationError::Unsupported));
        assert_eq!(history.fragment(), "#/service/1");
    }

    #[test]
    fn test_back_fires_when_fragment_changes() {
        let mut history = MemoryHistory::new("");
        history.set_fragment("#/service/1");
        history.next_event();
        history.push_without_fragment().unwrap();

        assert!(history.back());
        assert_eq!(history.fragment(), "#/service/1");
        assert_eq!(history.next_event().as_deref(), Some("#/service/1"));

        assert!(history.back());
        assert!(!history.back());
    }

    #[test]
    fn test_push_after_back_truncates_forward_entries() {
        let mut history = MemoryHistory::new("");
        history.set_fragment("#/service/1");
        history.set_fragment("#/service/2");
        history.back();
        history.set_fragment("#/service/3");

        assert_eq!(history.entry_count(), 3);
        assert_eq!(history.fragment(), "#/service/3");
    }
}
