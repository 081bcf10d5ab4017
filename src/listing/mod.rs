//! Listing module - entries and the registry that holds them
//!
//! # Architecture
//!
//! - `models`: Core data types (`Entry`, `EntryId`, `Selection`, `ListingNode`)
//! - `registry`: The ordered, generation-stamped entry collection
//! - `canonical`: Clean-label pipeline used for display, copy and dispatch
//! - `collate`: Base-sensitivity folding and natural ordering

pub mod canonical;
pub mod collate;
pub mod models;
pub mod registry;

pub use canonical::clean;
pub use models::{Entry, EntryId, ListingNode, Selection};
pub use registry::{EntryRegistry, FocusStep};
