//! Text filter over the entry registry
//!
//! A query hides every entry whose raw label does not contain it. Two
//! matching strategies exist:
//!
//! - **Collated**: both sides are NFC-normalized and folded to base
//!   sensitivity (case and diacritics ignored), then searched as a substring
//! - **Pattern**: the query is a case-insensitive regular expression; a query
//!   that does not compile is searched for literally
//!
//! Recomputation is debounced by the owning session through
//! [`Debouncer`]; applying a query only ever flips `Entry::filtered`.
//! Deselecting entries that became hidden is the selection model's job.

pub mod debounce;

pub use debounce::Debouncer;

use crate::listing::EntryRegistry;
use crate::listing::collate::fold;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use unicode_normalization::UnicodeNormalization;

/// How a query is compared against entry labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// Base-sensitivity substring search over NFC text
    #[default]
    Collated,

    /// Case-insensitive regular expression
    Pattern,
}

/// Query compiled for repeated matching
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Empty query, matches everything
    All,

    /// Folded query searched as a substring of the folded label
    Folded(String),

    /// Compiled pattern
    Regex(Regex),
}

impl Matcher {
    /// Compile a query under the given strategy
    #[must_use]
    pub fn compile(query: &str, strategy: MatchStrategy) -> Self {
        if query.is_empty() {
            return Self::All;
        }

        match strategy {
            MatchStrategy::Collated => Self::Folded(fold(&nfc(query))),
            MatchStrategy::Pattern => {
                let regex = RegexBuilder::new(query)
                    .case_insensitive(true)
                    .build()
                    .or_else(|_| {
                        RegexBuilder::new(&regex::escape(query))
                            .case_insensitive(true)
                            .build()
                    });

                match regex {
                    Ok(regex) => Self::Regex(regex),
                    Err(_) => Self::Folded(fold(&nfc(query))),
                }
            }
        }
    }

    /// Whether the label matches
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::All => true,
            Self::Folded(query) => fold(&nfc(text)).contains(query.as_str()),
            Self::Regex(regex) => regex.is_match(text),
        }
    }
}

/// Whether `text` matches `query` under base-sensitivity substring search
///
/// # Examples
///
/// ```
/// use rowpick::filter::matches;
///
/// assert!(matches("", "anything"));
/// assert!(matches("grp", "[GRP] show.mkv"));
/// assert!(matches("cafe", "Café Terrace"));
/// assert!(!matches("grp", "other.mkv"));
/// ```
#[must_use]
pub fn matches(query: &str, text: &str) -> bool {
    Matcher::compile(query, MatchStrategy::Collated).is_match(text)
}

/// Filter state: the active query and the pending, not yet applied one
#[derive(Debug)]
pub struct FilterEngine {
    strategy: MatchStrategy,
    query: String,
    debouncer: Debouncer<String>,
}

impl FilterEngine {
    /// Create an engine with an empty query
    #[must_use]
    pub fn new(strategy: MatchStrategy, quiet: Duration) -> Self {
        Self {
            strategy,
            query: String::new(),
            debouncer: Debouncer::new(quiet),
        }
    }

    /// Matching strategy
    #[must_use]
    pub const fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Active (applied) query, NFC-normalized
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Record a keystroke; supersedes any pending query
    pub fn input(&mut self, query: impl Into<String>) {
        self.debouncer.push(query.into());
    }

    /// Whether a keystroke is waiting for its quiet window
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Wait for the pending query to settle and make it active
    ///
    /// Never resolves while nothing is pending. Cancel-safe.
    pub async fn settled(&mut self) -> &str {
        let query = self.debouncer.settled().await;
        self.set_query(&query);
        &self.query
    }

    /// Make the pending query active immediately, if there is one
    pub fn flush(&mut self) -> bool {
        match self.debouncer.flush() {
            Some(query) => {
                self.set_query(&query);
                true
            }
            None => false,
        }
    }

    /// Make `query` active immediately, dropping any pending one
    pub fn set_query(&mut self, query: &str) {
        self.debouncer.cancel();
        self.query = nfc(query);
        tracing::debug!(query = %self.query, "filter query set");
    }

    /// Whether a label passes the active query
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        Matcher::compile(&self.query, self.strategy).is_match(text)
    }

    /// Recompute `filtered` for every entry under the active query
    ///
    /// Returns the number of entries hidden by the filter.
    pub fn apply(&self, registry: &mut EntryRegistry) -> usize {
        let matcher = Matcher::compile(&self.query, self.strategy);
        let mut hidden = 0;

        for entry in registry.entries_mut() {
            entry.filtered = !matcher.is_match(&entry.raw_label);
            hidden += usize::from(entry.filtered);
        }

        hidden
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(MatchStrategy::default(), debounce::DEFAULT_QUIET)
    }
}

fn nfc(text: &str) -> String {
    text.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::registry_of;

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches("", ""));
        assert!(matches("", "anything at all"));
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert!(matches("grp", "[GRP] show.mkv"));
        assert!(!matches("grp", "other.mkv"));
        assert!(matches("SHOW", "[GRP] show.mkv"));
    }

    #[test]
    fn test_substring_not_fuzzy() {
        assert!(!matches("sw", "show"));
        assert!(matches("ho", "show"));
    }

    #[test]
    fn test_diacritics_and_composition_ignored() {
        assert!(matches("cafe", "Café"));
        assert!(matches("café", "CAFE"));
        // decomposed query against composed text
        assert!(matches("cafe\u{301}", "caf\u{e9} noir"));
    }

    #[test]
    fn test_pattern_strategy() {
        let matcher = Matcher::compile("^ep\\s+\\d+$", MatchStrategy::Pattern);
        assert!(matcher.is_match("EP 12"));
        assert!(!matcher.is_match("ep twelve"));
    }

    #[test]
    fn test_invalid_pattern_is_literal() {
        let matcher = Matcher::compile("[unclosed", MatchStrategy::Pattern);
        assert!(matcher.is_match("an [UNCLOSED bracket"));
        assert!(!matcher.is_match("closed"));
    }

    #[test]
    fn test_apply_flags_non_matching_entries() {
        let mut registry = registry_of(&["[GRP] show.mkv", "other.mkv"]);
        let mut engine = FilterEngine::default();

        engine.set_query("grp");
        assert_eq!(engine.apply(&mut registry), 1);
        assert!(registry.entries()[0].is_visible());
        assert!(!registry.entries()[1].is_visible());

        engine.set_query("");
        assert_eq!(engine.apply(&mut registry), 0);
        assert!(registry.entries()[1].is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_latest_keystroke_is_applied() {
        let mut engine = FilterEngine::new(MatchStrategy::Collated, Duration::from_millis(250));

        engine.input("s");
        engine.input("sh");
        engine.input("sho");

        assert_eq!(engine.query(), "");
        assert_eq!(engine.settled().await, "sho");
        assert!(!engine.is_pending());
    }

    #[test]
    fn test_set_query_cancels_pending_input() {
        let mut engine = FilterEngine::default();

        engine.input("stale");
        engine.set_query("fresh");

        assert!(!engine.is_pending());
        assert!(!engine.flush());
        assert_eq!(engine.query(), "fresh");
    }
}
