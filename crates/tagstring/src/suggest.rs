//! Autocomplete suggestions for the tag under the caret.
//!
//! [`KnownTags`] matches against a fixed list held by the caller.
//! [`SuggestionCache`] tracks queries sent to a remote source: the caller
//! owns the transport and reports results back, while the cache coalesces
//! duplicate queries and drops answers to queries the user has moved past.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Fixed list of tag names matched by prefix.
#[derive(Debug, Clone, Default)]
pub struct KnownTags {
    known: Vec<String>,
    folded: Vec<String>,
    case_sensitive: bool,
}

impl KnownTags {
    /// Build a matcher over `known`, ignoring case unless `case_sensitive`.
    #[must_use]
    pub fn new<I, S>(known: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let known: Vec<String> = known.into_iter().map(Into::into).collect();
        let folded = known.iter().map(|tag| fold(tag, case_sensitive)).collect();
        Self {
            known,
            folded,
            case_sensitive,
        }
    }

    /// Known tags starting with `prefix`, in the order they were given.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagstring::KnownTags;
    ///
    /// let known = KnownTags::new(["Adam", "adrian", "brian"], false);
    /// assert_eq!(known.suggest("AD"), vec!["Adam", "adrian"]);
    /// ```
    #[must_use]
    pub fn suggest(&self, prefix: &str) -> Vec<&str> {
        let prefix = fold(prefix, self.case_sensitive);
        self.known
            .iter()
            .zip(&self.folded)
            .filter(|(_, folded)| folded.starts_with(prefix.as_str()))
            .map(|(tag, _)| tag.as_str())
            .collect()
    }
}

/// Settings for [`SuggestionCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LookupOptions {
    /// Match queries exactly rather than by lower-cased key.
    pub case_sensitive: bool,
    /// Queries shorter than this many characters are not sent.
    pub min_chars: usize,
}

/// Outcome of [`SuggestionCache::lookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Results for this query are already cached.
    Ready(&'a [String]),
    /// A request for this query is in flight; wait for it.
    Pending,
    /// The query is too short to send.
    Skip,
    /// Send a request for the given cache key.
    Fetch(String),
}

#[derive(Debug, Clone)]
enum CacheEntry {
    Pending,
    Ready(Vec<String>),
}

/// Per-field cache of remote suggestion queries.
///
/// # Examples
///
/// ```
/// use tagstring::{Lookup, LookupOptions, SuggestionCache};
///
/// let mut cache = SuggestionCache::new(LookupOptions::default());
/// assert_eq!(cache.lookup("ad"), Lookup::Fetch("ad".into()));
/// assert_eq!(cache.lookup("ad"), Lookup::Pending);
/// let shown = cache.complete("ad", vec!["adam".into()]);
/// assert_eq!(shown, Some(&["adam".to_string()][..]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SuggestionCache {
    options: LookupOptions,
    entries: HashMap<String, CacheEntry>,
    current: Option<String>,
}

impl SuggestionCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new(options: LookupOptions) -> Self {
        Self {
            options,
            entries: HashMap::new(),
            current: None,
        }
    }

    /// Look up `query`, making it the query whose results are wanted.
    ///
    /// A [`Lookup::Fetch`] marks the query as in flight, so repeated lookups
    /// return [`Lookup::Pending`] until [`complete`](Self::complete) or
    /// [`fail`](Self::fail) is called.
    pub fn lookup(&mut self, query: &str) -> Lookup<'_> {
        let key = fold(query, self.options.case_sensitive);
        self.current = Some(key.clone());
        if key.chars().count() < self.options.min_chars {
            return Lookup::Skip;
        }
        match self.entries.entry(key) {
            Entry::Vacant(slot) => {
                let key = slot.key().clone();
                log::debug!("fetching suggestions for {key:?}");
                slot.insert(CacheEntry::Pending);
                Lookup::Fetch(key)
            }
            Entry::Occupied(slot) => match slot.into_mut() {
                CacheEntry::Ready(results) => Lookup::Ready(results.as_slice()),
                CacheEntry::Pending => Lookup::Pending,
            },
        }
    }

    /// Record results for `query`.
    ///
    /// Results are always cached. They are returned for display only when
    /// `query` is still the most recent lookup; a superseded answer yields
    /// `None`.
    pub fn complete(&mut self, query: &str, results: Vec<String>) -> Option<&[String]> {
        let key = fold(query, self.options.case_sensitive);
        let wanted = self.current.as_deref() == Some(key.as_str());
        if !wanted {
            log::debug!("caching superseded suggestions for {key:?}");
        }
        self.entries.insert(key.clone(), CacheEntry::Ready(results));
        if !wanted {
            return None;
        }
        match self.entries.get(&key) {
            Some(CacheEntry::Ready(results)) => Some(results.as_slice()),
            _ => None,
        }
    }

    /// Forget an in-flight request for `query` so it can be sent again.
    pub fn fail(&mut self, query: &str) {
        let key = fold(query, self.options.case_sensitive);
        if matches!(self.entries.get(&key), Some(CacheEntry::Pending)) {
            log::debug!("suggestion request for {key:?} failed");
            self.entries.remove(&key);
        }
    }
}

fn fold(text: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        text.to_owned()
    } else {
        text.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tags: &[&str]) -> Vec<String> {
        tags.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn case_sensitive_matching_respects_case() {
        let known = KnownTags::new(["Adam", "adrian"], true);
        assert_eq!(known.suggest("Ad"), vec!["Adam"]);
        assert!(known.suggest("x").is_empty());
    }

    #[test]
    fn lookups_are_coalesced_per_query() {
        let mut cache = SuggestionCache::new(LookupOptions::default());
        assert_eq!(cache.lookup("Ad"), Lookup::Fetch("ad".into()));
        assert_eq!(cache.lookup("aD"), Lookup::Pending);
    }

    #[test]
    fn superseded_results_are_cached_but_not_shown() {
        let mut cache = SuggestionCache::new(LookupOptions::default());
        assert_eq!(cache.lookup("a"), Lookup::Fetch("a".into()));
        assert_eq!(cache.lookup("ad"), Lookup::Fetch("ad".into()));
        assert_eq!(cache.complete("a", owned(&["adam", "anna"])), None);
        let expected = owned(&["adam", "anna"]);
        assert_eq!(cache.lookup("a"), Lookup::Ready(expected.as_slice()));
    }

    #[test]
    fn returning_to_a_pending_query_shows_its_results() {
        let mut cache = SuggestionCache::new(LookupOptions::default());
        assert_eq!(cache.lookup("a"), Lookup::Fetch("a".into()));
        assert_eq!(cache.lookup("ad"), Lookup::Fetch("ad".into()));
        assert_eq!(cache.lookup("a"), Lookup::Pending);
        let expected = owned(&["adam"]);
        assert_eq!(cache.complete("a", owned(&["adam"])), Some(expected.as_slice()));
    }

    #[test]
    fn failed_requests_can_be_retried() {
        let mut cache = SuggestionCache::new(LookupOptions::default());
        assert_eq!(cache.lookup("ad"), Lookup::Fetch("ad".into()));
        cache.fail("ad");
        assert_eq!(cache.lookup("ad"), Lookup::Fetch("ad".into()));
    }

    #[test]
    fn short_queries_are_skipped() {
        let mut cache = SuggestionCache::new(LookupOptions {
            case_sensitive: true,
            min_chars: 2,
        });
        assert_eq!(cache.lookup("a"), Lookup::Skip);
        assert_eq!(cache.lookup("ab"), Lookup::Fetch("ab".into()));
    }
}
