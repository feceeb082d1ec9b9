//! Search filter predicates.

use scribe_core::{Comment, Post, User};

/// A lowercase needle for case-insensitive substring matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatch {
    needle: String,
}

impl TextMatch {
    /// Build a matcher, or `None` when the term is absent or empty.
    pub fn new(term: Option<&str>) -> Option<Self> {
        match term {
            Some(term) if !term.is_empty() => Some(Self {
                needle: term.to_lowercase(),
            }),
            _ => None,
        }
    }

    /// Returns true if `haystack` contains the needle, ignoring case.
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

/// Per-kind search predicate. The fields searched depend on the record:
/// users by name, posts by title or body. Comments are not searchable and
/// always match.
pub trait SearchFilter {
    fn matches_search(&self, term: &TextMatch) -> bool;
}

impl SearchFilter for User {
    fn matches_search(&self, term: &TextMatch) -> bool {
        term.matches(&self.name)
    }
}

impl SearchFilter for Post {
    fn matches_search(&self, term: &TextMatch) -> bool {
        term.matches(&self.title) || term.matches(&self.body)
    }
}

impl SearchFilter for Comment {
    fn matches_search(&self, _term: &TextMatch) -> bool {
        true
    }
}
