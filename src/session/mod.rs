//! List session - one listing and everything that acts on it
//!
//! A [`ListSession`] owns the current [`EntryRegistry`] together with the
//! selection model, filter and view toggles configured for the listing, and
//! the transport used to talk to the server. It is the only place the
//! registry is replaced; every other operation mutates per-entry flags of the
//! current generation.
//!
//! # Architecture
//!
//! ```text
//! keystrokes ──► FilterEngine ──┐
//! toggles ─────► ViewToggleSet ─┼──► visibility ──► SelectionModel::reconcile
//!                               │
//! refresh ─► Transport::get ─► parse ─► sort ─► fresh EntryRegistry (gen + 1)
//!
//! dispatch ─► snapshot ─► confirm/prompt ─► Transport::post_form ─► refresh?
//! ```
//!
//! After anything that can change visibility, selected entries that became
//! hidden are deselected and positions are renumbered.

pub mod copy;
pub mod dispatch;
pub mod error;
pub mod refresh;

pub use dispatch::{ActionSpec, DispatchOutcome, EmptyInput};
pub use error::{Result, SessionError};
pub use refresh::Fetched;

use crate::filter::FilterEngine;
use crate::listing::{Entry, EntryId, EntryRegistry, FocusStep};
use crate::remote::Transport;
use crate::selection::SelectionModel;
use crate::toggles::ViewToggleSet;

/// Controller for a single listing
#[derive(Debug)]
pub struct ListSession<T: Transport> {
    transport: T,
    source: String,
    sorted: bool,
    registry: EntryRegistry,
    selection: SelectionModel,
    filter: FilterEngine,
    toggles: ViewToggleSet,
    generation: u64,
    focus: Option<EntryId>,
}

impl<T: Transport> ListSession<T> {
    /// Create a session with an empty registry
    ///
    /// Nothing is fetched until [`refresh`](Self::refresh) is called.
    pub fn new(transport: T, source: impl Into<String>) -> Self {
        Self {
            transport,
            source: source.into(),
            sorted: false,
            registry: EntryRegistry::empty(0),
            selection: SelectionModel::default(),
            filter: FilterEngine::default(),
            toggles: ViewToggleSet::new(),
            generation: 0,
            focus: None,
        }
    }

    /// Sort entries on every refresh
    #[must_use]
    pub const fn with_sorting(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    #[must_use]
    pub const fn with_selection(mut self, selection: SelectionModel) -> Self {
        self.selection = selection;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: FilterEngine) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn with_toggles(mut self, toggles: ViewToggleSet) -> Self {
        self.toggles = toggles;
        self
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Current registry
    pub const fn registry(&self) -> &EntryRegistry {
        &self.registry
    }

    pub const fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub const fn filter(&self) -> &FilterEngine {
        &self.filter
    }

    pub const fn toggles(&self) -> &ViewToggleSet {
        &self.toggles
    }

    // ========================================================================
    // Selection gestures
    // ========================================================================

    /// Plain activation: select `target` alone
    pub fn replace(&mut self, target: EntryId) -> bool {
        self.selection.replace(&mut self.registry, target)
    }

    /// Extend-selection activation: flip `target`
    pub fn toggle(&mut self, target: EntryId) -> bool {
        self.selection.toggle(&mut self.registry, target)
    }

    /// Range activation: select the visible span up to `target`
    pub fn range(&mut self, target: EntryId) -> bool {
        self.selection.range(&mut self.registry, target)
    }

    /// Select `target` if it is not selected yet
    pub fn activate(&mut self, target: EntryId) -> bool {
        self.selection.activate(&mut self.registry, target)
    }

    /// Deselect `target` if it is selected
    pub fn deactivate(&mut self, target: EntryId) -> bool {
        self.selection.deactivate(&mut self.registry, target)
    }

    /// Deselect everything, returning how many entries were selected
    pub fn clear_selection(&mut self) -> usize {
        self.selection.clear(&mut self.registry)
    }

    /// Selected entries in canonical order
    pub fn snapshot(&self) -> Vec<&Entry> {
        self.selection.snapshot(&self.registry)
    }

    /// Id of the `n`th visible entry (0-based)
    pub fn nth_visible(&self, n: usize) -> Option<EntryId> {
        self.registry.nth_visible(n)
    }

    // ========================================================================
    // Focus
    // ========================================================================

    /// Focused entry, if it is still part of the current registry
    pub fn focus(&self) -> Option<EntryId> {
        self.focus.filter(|id| self.registry.get(*id).is_some())
    }

    /// Move focus and return the newly focused entry
    pub fn step_focus(&mut self, step: FocusStep) -> Option<EntryId> {
        self.focus = self.registry.step_focus(self.focus(), step);
        self.focus
    }

    // ========================================================================
    // Visibility
    // ========================================================================

    /// Record a keystroke in the filter box
    ///
    /// Visibility is not recomputed until the quiet window elapses, see
    /// [`apply_pending_filter`](Self::apply_pending_filter).
    pub fn filter_input(&mut self, query: impl Into<String>) {
        self.filter.input(query);
    }

    /// Wait for the pending query to settle, then apply it
    ///
    /// Never resolves while nothing is pending, which makes it suitable as a
    /// `tokio::select!` branch next to other input sources.
    pub async fn apply_pending_filter(&mut self) -> usize {
        self.filter.settled().await;
        self.recompute_visibility()
    }

    /// Apply the pending query now, if there is one
    pub fn flush_filter(&mut self) -> bool {
        let flushed = self.filter.flush();
        if flushed {
            self.recompute_visibility();
        }
        flushed
    }

    /// Set and apply a query immediately
    ///
    /// Returns the number of selected entries deselected because they became
    /// hidden.
    pub fn set_filter(&mut self, query: &str) -> usize {
        self.filter.set_query(query);
        self.recompute_visibility()
    }

    /// Set a view toggle
    ///
    /// Returns the number of selected entries deselected because they became
    /// hidden.
    pub fn set_toggle(&mut self, name: &str, active: bool) -> usize {
        if !self.toggles.set(name, active) {
            return 0;
        }
        self.recompute_visibility()
    }

    /// Flip a view toggle, returning its new state
    pub fn flip_toggle(&mut self, name: &str) -> bool {
        let active = self.toggles.flip(name);
        self.recompute_visibility();
        active
    }

    fn recompute_visibility(&mut self) -> usize {
        self.filter.apply(&mut self.registry);
        self.toggles.apply(&mut self.registry);
        let deselected = self.selection.reconcile(&mut self.registry);

        if let Some(id) = self.focus
            && !self.registry.get(id).is_some_and(Entry::is_visible)
        {
            self.focus = None;
        }

        if deselected > 0 {
            tracing::debug!(deselected, "deselected hidden entries");
        }
        deselected
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::MockTransport;
    use crate::selection::{RangeAnchor, SelectionMode};
    use crate::testing::positions;

    fn session(labels: &[&str]) -> ListSession<MockTransport> {
        let body: String = labels
            .iter()
            .map(|label| format!("<div>{label}</div>"))
            .collect();
        let transport = MockTransport::new().reply(200, &body);
        ListSession::new(transport, "/list")
    }

    async fn loaded(labels: &[&str]) -> ListSession<MockTransport> {
        let mut session = session(labels);
        session.refresh().await.unwrap();
        session
    }

    #[tokio::test]
    async fn test_gestures_follow_the_current_generation() {
        let mut session = loaded(&["a", "b", "c"]).await;
        let a = session.nth_visible(0).unwrap();
        let c = session.nth_visible(2).unwrap();

        assert!(session.toggle(c));
        assert!(session.toggle(a));
        assert_eq!(positions(session.registry()), vec![Some(2), None, Some(1)]);

        let labels: Vec<&str> = session.snapshot().iter().map(|e| e.raw_label.as_str()).collect();
        assert_eq!(labels, vec!["c", "a"]);
    }

    #[tokio::test]
    async fn test_filter_deselects_hidden_entries() {
        let mut session = loaded(&["[GRP] show.mkv", "other.mkv", "grp two.mkv"]).await;
        for n in 0..3 {
            let id = session.nth_visible(n).unwrap();
            session.toggle(id);
        }

        let deselected = session.set_filter("grp");

        assert_eq!(deselected, 1);
        assert_eq!(positions(session.registry()), vec![Some(1), None, Some(2)]);
        assert_eq!(session.registry().visible().count(), 2);
    }

    #[tokio::test]
    async fn test_revealed_entries_stay_unselected() {
        let mut session = loaded(&["a", "b"]).await;
        session.set_filter("a");
        session.set_filter("");

        assert_eq!(session.registry().visible().count(), 2);
        assert_eq!(session.registry().selected_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_filter_applies_latest_query() {
        let mut session = loaded(&["alpha", "beta", "gamma"]).await;

        session.filter_input("al");
        session.filter_input("bet");
        assert_eq!(session.registry().visible().count(), 3);

        session.apply_pending_filter().await;

        assert_eq!(session.filter().query(), "bet");
        let visible: Vec<&str> = session
            .registry()
            .visible()
            .map(|e| e.raw_label.as_str())
            .collect();
        assert_eq!(visible, vec!["beta"]);
    }

    #[tokio::test]
    async fn test_flush_filter_without_pending_is_noop() {
        let mut session = loaded(&["a"]).await;
        assert!(!session.flush_filter());

        session.filter_input("zzz");
        assert!(session.flush_filter());
        assert_eq!(session.registry().visible().count(), 0);
    }

    #[tokio::test]
    async fn test_toggle_hides_and_deselects() {
        let body = r#"<div class="watched">a</div><div>b</div><div class="watched">c</div>"#;
        let transport = MockTransport::new().reply(200, body);
        let mut session = ListSession::new(transport, "/list");
        session.refresh().await.unwrap();

        let a = session.nth_visible(0).unwrap();
        let b = session.nth_visible(1).unwrap();
        session.toggle(a);
        session.toggle(b);

        assert_eq!(session.set_toggle("watched", true), 1);
        assert_eq!(positions(session.registry()), vec![None, Some(1), None]);

        assert_eq!(session.set_toggle("watched", true), 0);
        assert!(!session.flip_toggle("watched"));
        assert_eq!(session.registry().visible().count(), 3);
    }

    #[tokio::test]
    async fn test_range_uses_configured_anchor() {
        let transport = MockTransport::new().reply(200, "<p>a</p><p>b</p><p>c</p><p>d</p>");
        let mut session = ListSession::new(transport, "/list").with_selection(
            SelectionModel::new(SelectionMode::Unordered, RangeAnchor::SpanSelection),
        );
        session.refresh().await.unwrap();

        let b = session.nth_visible(1).unwrap();
        let d = session.nth_visible(3).unwrap();
        let a = session.nth_visible(0).unwrap();
        session.toggle(b);
        session.toggle(d);
        session.range(a);

        assert_eq!(session.registry().selected_count(), 4);
    }

    #[tokio::test]
    async fn test_focus_is_dropped_when_hidden() {
        let mut session = loaded(&["a", "b"]).await;

        assert_eq!(session.step_focus(FocusStep::Down), session.nth_visible(0));
        assert_eq!(session.step_focus(FocusStep::Down), session.nth_visible(1));

        session.set_filter("a");
        assert_eq!(session.focus(), None);
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = ListSession::new(MockTransport::new(), "/list");

        assert!(session.registry().is_empty());
        assert_eq!(session.source(), "/list");
        assert_eq!(session.transport().request_count(), 0);
    }
}
