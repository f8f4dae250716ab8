//! Subject query normalization.
//!
//! Raw text from the query field is lowercased and trimmed before it is
//! placed into the catalog URL. Nothing else is filtered: arbitrary text goes
//! into the path segment as typed.

use std::fmt;

/// A normalized subject query.
///
/// Never carries leading or trailing whitespace. The empty query is the
/// "no query" sentinel and is never turned into a request; use
/// [`SearchQuery::parse`] to get `None` for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Lowercases and trims `raw`.
    ///
    /// Normalizing is idempotent: normalizing an already normalized query
    /// yields the same query.
    ///
    /// ```
    /// use shelfscout::domain::SearchQuery;
    ///
    /// assert_eq!(SearchQuery::normalize("  Science ").as_str(), "science");
    /// ```
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        Self(raw.to_lowercase().trim().to_string())
    }

    /// Normalizes `raw` and returns `None` when nothing is left.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let query = Self::normalize(raw);
        if query.is_empty() {
            None
        } else {
            Some(query)
        }
    }

    /// Returns `true` for the "no query" sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(SearchQuery::normalize("\t Quantum PHYSICS  ").as_str(), "quantum physics");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["", "   ", "Science", "  MiXeD case  ", "ÄPFEL ", "love\n", "a  b"] {
            let once = SearchQuery::normalize(raw);
            let twice = SearchQuery::normalize(once.as_str());
            assert_eq!(once, twice, "input {raw:?}");
        }
    }

    #[test]
    fn whitespace_only_is_no_query() {
        assert!(SearchQuery::parse("").is_none());
        assert!(SearchQuery::parse("   \t").is_none());
        assert_eq!(SearchQuery::parse(" Fantasy").map(|q| q.to_string()), Some("fantasy".to_string()));
    }

    #[test]
    fn characters_pass_through_unfiltered() {
        let query = SearchQuery::normalize("sci-fi/../?x=1");
        assert_eq!(query.as_str(), "sci-fi/../?x=1");
    }
}
