//! Refresh - replace the registry with a fresh listing from the server
//!
//! A refresh is split in two halves. [`ListSession::fetch`] only reads from
//! the session, so several fetches may be in flight at once.
//! [`ListSession::install`] needs exclusive access and swaps the registry;
//! whichever listing is installed last wins.

use super::error::{Result, SessionError};
use super::ListSession;
use crate::listing::{EntryRegistry, ListingNode, collate};
use crate::remote::{Transport, parse_fragment};

/// Outcome of a fetch that reached the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    /// Status 200; nodes in server order
    Listing(Vec<ListingNode>),

    /// Any other status; the body is the error message
    Rejected { status: u16, body: String },
}

impl<T: Transport> ListSession<T> {
    /// Read the listing source
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Transport` if no response was received. The
    /// session is not touched either way.
    pub async fn fetch(&self) -> Result<Fetched> {
        let response = self.transport.get(&self.source).await?;

        if !response.is_success() {
            tracing::warn!(status = response.status, source = %self.source, "refresh rejected");
            return Ok(Fetched::Rejected {
                status: response.status,
                body: response.body,
            });
        }

        let nodes = parse_fragment(&response.body);
        tracing::debug!(entries = nodes.len(), source = %self.source, "listing fetched");
        Ok(Fetched::Listing(nodes))
    }

    /// Replace the registry with a fetched listing
    ///
    /// Entries start unselected. The active filter query and view toggles are
    /// applied before the swap. A rejection still replaces the registry, with
    /// an empty one. Ids from the previous registry stop resolving in both
    /// cases.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Rejected` carrying the server's message.
    pub fn install(&mut self, fetched: Fetched) -> Result<usize> {
        let generation = self.next_generation();
        self.focus = None;

        match fetched {
            Fetched::Rejected { status, body } => {
                self.registry = EntryRegistry::empty(generation);
                Err(SessionError::Rejected { status, body })
            }
            Fetched::Listing(mut nodes) => {
                if self.sorted {
                    collate::sort_nodes(&mut nodes);
                }

                let mut registry = EntryRegistry::from_nodes(generation, nodes);
                self.filter.apply(&mut registry);
                self.toggles.apply(&mut registry);
                self.registry = registry;

                tracing::info!(
                    generation,
                    entries = self.registry.len(),
                    visible = self.registry.visible().count(),
                    "registry replaced"
                );
                Ok(self.registry.len())
            }
        }
    }

    /// Fetch and install in one step
    ///
    /// Returns the number of entries in the new registry.
    ///
    /// # Errors
    ///
    /// `SessionError::Transport` leaves the registry untouched;
    /// `SessionError::Rejected` leaves it empty.
    pub async fn refresh(&mut self) -> Result<usize> {
        let fetched = self.fetch().await?;
        self.install(fetched)
    }
}
