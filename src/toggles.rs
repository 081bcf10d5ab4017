//! Named view toggles
//!
//! A toggle hides every entry that declares a class of the same name
//! (`watched`, `folder`, ...) while it is active. Toggles are independent of
//! the text filter; an entry is visible only when it passes the filter and
//! no active toggle hides it.

use crate::listing::{Entry, EntryRegistry};
use serde::{Deserialize, Serialize};

/// One named toggle and its state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewToggle {
    /// Class name hidden while the toggle is active
    pub name: String,

    /// Whether the toggle is active
    #[serde(default)]
    pub active: bool,
}

/// Set of view toggles in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewToggleSet {
    toggles: Vec<ViewToggle>,
}

impl ViewToggleSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            toggles: Vec::new(),
        }
    }

    /// Create a set from declared toggles; active ones apply immediately
    #[must_use]
    pub fn from_toggles(toggles: Vec<ViewToggle>) -> Self {
        Self { toggles }
    }

    /// Declared toggles
    #[must_use]
    pub fn toggles(&self) -> &[ViewToggle] {
        &self.toggles
    }

    /// Whether the named toggle is active
    #[must_use]
    pub fn is_active(&self, name: &str) -> bool {
        self.toggles.iter().any(|t| t.name == name && t.active)
    }

    /// Set a toggle, declaring it if unknown
    ///
    /// Returns `true` when the state changed.
    pub fn set(&mut self, name: &str, active: bool) -> bool {
        if let Some(toggle) = self.toggles.iter_mut().find(|t| t.name == name) {
            let changed = toggle.active != active;
            toggle.active = active;
            return changed;
        }

        self.toggles.push(ViewToggle {
            name: name.to_string(),
            active,
        });
        active
    }

    /// Flip a toggle, returning its new state
    pub fn flip(&mut self, name: &str) -> bool {
        let active = !self.is_active(name);
        self.set(name, active);
        active
    }

    /// Whether any active toggle hides the entry
    #[must_use]
    pub fn hides(&self, entry: &Entry) -> bool {
        self.toggles
            .iter()
            .any(|toggle| toggle.active && entry.has_class(&toggle.name))
    }

    /// Recompute `concealed` for every entry
    ///
    /// Returns the number of entries hidden by toggles.
    pub fn apply(&self, registry: &mut EntryRegistry) -> usize {
        let mut hidden = 0;

        for entry in registry.entries_mut() {
            entry.concealed = self.hides(entry);
            hidden += usize::from(entry.concealed);
        }

        hidden
    }
}
