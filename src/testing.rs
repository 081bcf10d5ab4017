//! Testing utilities for rowpick
//!
//! Helpers for building registries from plain labels and reading back
//! selection state in a compact form.
//!
//! Only available when compiled with `cfg(test)`.

use crate::listing::{Entry, EntryRegistry, ListingNode};

/// Registry of generation 1 with one plain entry per label
#[must_use]
pub fn registry_of(labels: &[&str]) -> EntryRegistry {
    EntryRegistry::from_nodes(
        1,
        labels.iter().map(|label| ListingNode::labelled(*label)).collect(),
    )
}

/// Selection position of every entry, in registry order
#[must_use]
pub fn positions(registry: &EntryRegistry) -> Vec<Option<u32>> {
    registry
        .entries()
        .iter()
        .map(|entry| entry.selection.position())
        .collect()
}

/// Raw labels of the given entries
#[must_use]
pub fn labels<'a>(entries: &[&'a Entry]) -> Vec<&'a str> {
    entries.iter().map(|entry| entry.raw_label.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_of() {
        let registry = registry_of(&["a", "b"]);

        assert_eq!(registry.generation(), 1);
        assert_eq!(positions(&registry), vec![None, None]);
        let entries: Vec<&Entry> = registry.entries().iter().collect();
        assert_eq!(labels(&entries), vec!["a", "b"]);
    }
}
