//! Predictive search over a fixed catalog of named entries.
//!
//! There is no backend: suggestions come from a case-insensitive substring
//! match over [`SearchEntry`] names, and a submitted query only produces a
//! "searching" toast.

use serde::Deserialize;

use crate::error::SearchError;
use crate::router::PageId;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchEntry {
    pub name: String,
    pub page: PageId,
}

/// Entries plus the length limits that govern the search box.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<SearchEntry>,
    max_len: usize,
    predictive_min_len: usize,
}

impl Catalog {
    pub fn new(entries: Vec<SearchEntry>, max_len: usize, predictive_min_len: usize) -> Self {
        Self {
            entries,
            max_len,
            predictive_min_len,
        }
    }

    /// Entries whose name contains `query`, ignoring case. Queries shorter
    /// than the predictive minimum match nothing.
    pub fn suggestions(&self, query: &str) -> Vec<&SearchEntry> {
        if query_len(query) < self.predictive_min_len {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn validate(&self, query: &str) -> Result<(), SearchError> {
        let len = query_len(query);
        if len == 0 {
            return Err(SearchError::Empty);
        }
        if len > self.max_len {
            return Err(SearchError::TooLong {
                len,
                max: self.max_len,
            });
        }
        Ok(())
    }

    /// Character counter text, e.g. `3 / 27`.
    pub fn counter(&self, query: &str) -> String {
        format!("{} / {}", query_len(query), self.max_len)
    }
}

fn query_len(query: &str) -> usize {
    query.chars().count()
}

/// State behind the search overlay: what has been typed and what the
/// suggestion panel currently lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchBox {
    query: String,
    suggestions: Vec<SearchEntry>,
}

impl SearchBox {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[SearchEntry] {
        &self.suggestions
    }

    /// The panel is shown only while it has something to show.
    pub fn panel_open(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Keystroke: store the new value and recompute suggestions.
    pub fn input(&mut self, value: String, catalog: &Catalog) {
        self.suggestions = catalog.suggestions(&value).into_iter().cloned().collect();
        self.query = value;
    }

    /// Form submission. On success the box is cleared and the accepted
    /// query is returned; on error the box is left as typed.
    pub fn submit(&mut self, catalog: &Catalog) -> Result<String, SearchError> {
        catalog.validate(&self.query)?;
        let query = std::mem::take(&mut self.query);
        self.suggestions.clear();
        Ok(query)
    }

    /// A suggestion was picked. Clears the box and hands back its page.
    pub fn select(&mut self, entry: &SearchEntry) -> PageId {
        self.clear();
        entry.page.clone()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.suggestions.clear();
    }
}
