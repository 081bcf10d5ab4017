//! Data models for listing entries
//!
//! These are plain data structures. Visibility is derived from two flags
//! owned by the filter and the view toggles; selection is owned by the
//! selection model. Direct field access is used for reads.

use serde::Serialize;
use std::fmt;

// ============================================================================
// Identity
// ============================================================================

/// Stable identifier of an entry within one registry generation
///
/// The generation is bumped every time the registry is replaced, so an id
/// taken from a previous listing never resolves against the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EntryId {
    /// Registry generation this id belongs to
    pub generation: u64,

    /// Position of the entry in registry order
    pub index: usize,
}

impl EntryId {
    /// Create an id for the given generation and index
    #[must_use]
    pub const fn new(generation: u64, index: usize) -> Self {
        Self { generation, index }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.generation, self.index)
    }
}

// ============================================================================
// Selection State
// ============================================================================

/// Selection state of a single entry
///
/// `Flagged` is used by the unordered mode, `Position` by the ordered mode.
/// Positions start at 1 and stay densely packed across the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Not selected
    #[default]
    Unselected,

    /// Selected, no ordering information
    Flagged,

    /// Selected at the given 1-based position
    Position(u32),
}

impl Selection {
    /// Whether the entry is selected in either mode
    #[must_use]
    pub const fn is_selected(self) -> bool {
        !matches!(self, Self::Unselected)
    }

    /// Selection position, if the entry carries one
    #[must_use]
    pub const fn position(self) -> Option<u32> {
        match self {
            Self::Position(position) => Some(position),
            Self::Unselected | Self::Flagged => None,
        }
    }
}

// ============================================================================
// Entry
// ============================================================================

/// One row of the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Synthetic identifier
    pub id: EntryId,

    /// Literal text content of the row (path, tag name, title)
    pub raw_label: String,

    /// Number of structural sub-nodes; primary sort key when sorting is enabled
    pub child_count: usize,

    /// Class names declared by the server, matched by view toggles
    pub classes: Vec<String>,

    /// Identifier declared by the server, if any
    pub key: Option<String>,

    /// Current selection state
    pub selection: Selection,

    /// Hidden by the active text filter
    pub filtered: bool,

    /// Hidden by at least one active view toggle
    pub concealed: bool,
}

impl Entry {
    /// Create an unselected, visible entry from a parsed node
    #[must_use]
    pub fn new(id: EntryId, node: ListingNode) -> Self {
        Self {
            id,
            raw_label: node.label,
            child_count: node.child_count,
            classes: node.classes,
            key: node.key,
            selection: Selection::Unselected,
            filtered: false,
            concealed: false,
        }
    }

    /// Whether the entry passes both the text filter and every active toggle
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !self.filtered && !self.concealed
    }

    /// Whether the entry is selected
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selection.is_selected()
    }

    /// Whether the entry declares the given class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Label text, canonicalized when `clean` is set
    #[must_use]
    pub fn text(&self, clean: bool) -> String {
        if clean {
            super::canonical::clean(&self.raw_label)
        } else {
            self.raw_label.clone()
        }
    }
}

// ============================================================================
// Parsed Nodes
// ============================================================================

/// Structural node produced by parsing a refresh response
///
/// One node per top-level element of the response body, in server order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingNode {
    /// Text content of the node
    pub label: String,

    /// Number of element children
    pub child_count: usize,

    /// Class names of the node
    pub classes: Vec<String>,

    /// Server-provided identifier (`data-id`)
    pub key: Option<String>,
}

impl ListingNode {
    /// Create a childless node with the given label
    #[must_use]
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the class list
    #[must_use]
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the child count
    #[must_use]
    pub const fn with_child_count(mut self, child_count: usize) -> Self {
        self.child_count = child_count;
        self
    }
}
