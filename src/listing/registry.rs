//! Ordered entry registry for the current listing
//!
//! The registry is replaced wholesale on every refresh and never patched
//! structurally. Per-entry flags (selection, filter, toggles) are mutated in
//! place on the current generation only.

use super::models::{Entry, EntryId, ListingNode};

/// Ordered collection of entries for one generation of a listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryRegistry {
    generation: u64,
    entries: Vec<Entry>,
}

/// Focus movement over the visible entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusStep {
    /// One row up
    Up,

    /// One row down
    Down,

    /// Ten rows up
    JumpUp,

    /// Ten rows down
    JumpDown,
}

impl FocusStep {
    /// Signed row offset of this step
    #[must_use]
    pub const fn offset(self) -> isize {
        match self {
            Self::Up => -1,
            Self::Down => 1,
            Self::JumpUp => -10,
            Self::JumpDown => 10,
        }
    }
}

impl EntryRegistry {
    /// Create an empty registry for the given generation
    #[must_use]
    pub const fn empty(generation: u64) -> Self {
        Self {
            generation,
            entries: Vec::new(),
        }
    }

    /// Build a registry from parsed nodes, preserving their order
    ///
    /// Every entry starts unselected and visible.
    #[must_use]
    pub fn from_nodes(generation: u64, nodes: Vec<ListingNode>) -> Self {
        let entries = nodes
            .into_iter()
            .enumerate()
            .map(|(index, node)| Entry::new(EntryId::new(generation, index), node))
            .collect();

        Self {
            generation,
            entries,
        }
    }

    /// Generation of this registry
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in registry order
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Mutable access to all entries in registry order
    pub fn entries_mut(&mut self) -> &mut [Entry] {
        &mut self.entries
    }

    /// Resolve an id to its index, rejecting ids from other generations
    #[must_use]
    pub fn index_of(&self, id: EntryId) -> Option<usize> {
        (id.generation == self.generation && id.index < self.entries.len()).then_some(id.index)
    }

    /// Look up an entry by id
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.index_of(id).map(|index| &self.entries[index])
    }

    /// Look up an entry by id for mutation
    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        self.index_of(id).map(|index| &mut self.entries[index])
    }

    /// Visible entries in registry order
    pub fn visible(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|entry| entry.is_visible())
    }

    /// Selected entries in registry order
    pub fn selected(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|entry| entry.is_selected())
    }

    /// Number of selected entries
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    /// Id of the n-th visible entry (0-based)
    #[must_use]
    pub fn nth_visible(&self, n: usize) -> Option<EntryId> {
        self.visible().nth(n).map(|entry| entry.id)
    }

    /// Move focus across the visible entries
    ///
    /// With no current focus (or a focus that is no longer visible) the first
    /// visible entry is returned. Movement clamps at both ends.
    #[must_use]
    pub fn step_focus(&self, current: Option<EntryId>, step: FocusStep) -> Option<EntryId> {
        let visible: Vec<EntryId> = self.visible().map(|entry| entry.id).collect();
        let last = visible.len().checked_sub(1)?;

        let Some(position) = current.and_then(|id| visible.iter().position(|v| *v == id)) else {
            return visible.first().copied();
        };

        let target = position.saturating_add_signed(step.offset()).min(last);
        Some(visible[target])
    }
}
