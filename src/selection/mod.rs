//! Selection model - the three selection gestures and their ordering rules
//!
//! The model itself holds only configuration; selection state lives on the
//! entries of the registry it is handed. Every gesture resolves its target
//! through the registry first, so a target from a previous generation (or
//! one that does not exist) is a no-op.
//!
//! # Gestures
//!
//! - **replace** (plain click): clear everything, select the target alone
//! - **toggle** (ctrl click): flip the target
//! - **range** (shift click): select the visible span between an anchor and
//!   the target, replacing the previous selection
//!
//! # Modes
//!
//! In [`SelectionMode::Ordered`] every selected entry carries a position.
//! Positions are always `1..=k` for `k` selected entries: deselecting shifts
//! every higher position down by one, selecting appends `max + 1`.

use crate::listing::{Entry, EntryId, EntryRegistry, Selection};
use serde::{Deserialize, Serialize};

/// How selection state is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// Boolean flag; canonical order is registry order
    Unordered,

    /// Dense positions; canonical order is ascending position
    #[default]
    Ordered,
}

/// How a range gesture chooses the end opposite to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeAnchor {
    /// Anchor is the first selected entry (else the first visible one); a
    /// target before the anchor spans `[target, anchor]`
    #[default]
    FirstSelected,

    /// As `FirstSelected`, but a target before the anchor spans up to the
    /// last selected entry
    SpanSelection,
}

/// Selection gestures over an [`EntryRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionModel {
    mode: SelectionMode,
    anchor: RangeAnchor,
}

impl SelectionModel {
    /// Create a model with the given mode and range anchor policy
    #[must_use]
    pub const fn new(mode: SelectionMode, anchor: RangeAnchor) -> Self {
        Self { mode, anchor }
    }

    /// Selection mode
    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Range anchor policy
    #[must_use]
    pub const fn anchor(&self) -> RangeAnchor {
        self.anchor
    }

    /// Select `target` alone, clearing every other entry
    ///
    /// Returns `false` (and changes nothing) when the target does not resolve
    /// or is not visible.
    pub fn replace(&self, registry: &mut EntryRegistry, target: EntryId) -> bool {
        let Some(index) = registry.index_of(target) else {
            return false;
        };

        if !registry.entries()[index].is_visible() {
            return false;
        }

        self.clear(registry);
        self.mark(registry, index);
        true
    }

    /// Flip the selection state of `target`
    pub fn toggle(&self, registry: &mut EntryRegistry, target: EntryId) -> bool {
        let Some(index) = registry.index_of(target) else {
            return false;
        };

        if registry.entries()[index].is_selected() {
            Self::unmark(registry, index);
            return true;
        }

        if !registry.entries()[index].is_visible() {
            return false;
        }

        self.mark(registry, index);
        true
    }

    /// Select `target` unless it is already selected
    pub fn activate(&self, registry: &mut EntryRegistry, target: EntryId) -> bool {
        match registry.get(target) {
            Some(entry) if !entry.is_selected() && entry.is_visible() => {
                self.toggle(registry, target)
            }
            _ => false,
        }
    }

    /// Deselect `target` unless it is already unselected
    ///
    /// Positions above the removed one shift down to stay dense.
    pub fn deselect(&self, registry: &mut EntryRegistry, target: EntryId) -> bool {
        let Some(index) = registry.index_of(target) else {
            return false;
        };

        if !registry.entries()[index].is_selected() {
            return false;
        }

        Self::unmark(registry, index);
        true
    }

    /// Alias of [`deselect`](Self::deselect) for keyboard-driven removal
    pub fn deactivate(&self, registry: &mut EntryRegistry, target: EntryId) -> bool {
        self.deselect(registry, target)
    }

    /// Replace the selection with every visible entry between anchor and target
    ///
    /// Positions are assigned from 1 in registry order across the span.
    pub fn range(&self, registry: &mut EntryRegistry, target: EntryId) -> bool {
        let Some(target_index) = registry.index_of(target) else {
            return false;
        };

        let Some((start, end)) = self.span(registry.entries(), target_index) else {
            return false;
        };

        self.clear(registry);

        let mut position = 0;
        for entry in &mut registry.entries_mut()[start..=end] {
            if entry.is_visible() {
                position += 1;
                entry.selection = self.marker(position);
            }
        }

        true
    }

    /// Deselect every entry, returning how many were selected
    pub fn clear(&self, registry: &mut EntryRegistry) -> usize {
        let mut cleared = 0;

        for entry in registry.entries_mut() {
            if entry.is_selected() {
                entry.selection = Selection::Unselected;
                cleared += 1;
            }
        }

        cleared
    }

    /// Deselect every selected entry that is no longer visible
    ///
    /// Returns the number of entries deselected.
    pub fn reconcile(&self, registry: &mut EntryRegistry) -> usize {
        let hidden: Vec<EntryId> = registry
            .selected()
            .filter(|entry| !entry.is_visible())
            .map(|entry| entry.id)
            .collect();

        hidden
            .into_iter()
            .filter(|id| self.deselect(registry, *id))
            .count()
    }

    /// Selected entries in canonical order
    ///
    /// Ascending position in ordered mode, registry order otherwise.
    #[must_use]
    pub fn snapshot<'a>(&self, registry: &'a EntryRegistry) -> Vec<&'a Entry> {
        let mut selected: Vec<&Entry> = registry.selected().collect();

        if self.mode == SelectionMode::Ordered {
            selected.sort_by_key(|entry| entry.selection.position());
        }

        selected
    }

    fn span(&self, entries: &[Entry], target: usize) -> Option<(usize, usize)> {
        let first_selected = entries.iter().position(Entry::is_selected);
        let anchor = first_selected.or_else(|| entries.iter().position(Entry::is_visible))?;

        if anchor <= target {
            return Some((anchor, target));
        }

        let end = match self.anchor {
            RangeAnchor::FirstSelected => anchor,
            RangeAnchor::SpanSelection => entries
                .iter()
                .rposition(Entry::is_selected)
                .unwrap_or(anchor),
        };

        Some((target, end))
    }

    fn mark(&self, registry: &mut EntryRegistry, index: usize) {
        let next = registry
            .entries()
            .iter()
            .filter_map(|entry| entry.selection.position())
            .max()
            .unwrap_or(0)
            + 1;

        registry.entries_mut()[index].selection = self.marker(next);
    }

    fn unmark(registry: &mut EntryRegistry, index: usize) {
        let entries = registry.entries_mut();
        let removed = std::mem::take(&mut entries[index].selection);

        let Some(changed) = removed.position() else {
            return;
        };

        for entry in entries.iter_mut() {
            if let Selection::Position(current) = entry.selection
                && current > changed
            {
                entry.selection = Selection::Position(current - 1);
            }
        }
    }

    const fn marker(&self, position: u32) -> Selection {
        match self.mode {
            SelectionMode::Unordered => Selection::Flagged,
            SelectionMode::Ordered => Selection::Position(position),
        }
    }
}
