//! Tag list with suggestion promotion.
//!
//! One shared type backs every tag editor in the product: the wizard skills
//! step and the per-experience skills/software columns. Confirmed tags keep
//! first-insertion order and contain no duplicates; candidate suggestions sit
//! beside them until promoted, which is a one-way move.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagList {
    confirmed: Vec<String>,
    suggestions: Vec<String>,
}

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with confirmed tags and candidate suggestions already populated
    /// (experience cards arrive pre-seeded from resume parsing).
    pub fn with_items<I, J>(confirmed: I, suggestions: J) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        let mut list = TagList::new();
        for tag in confirmed {
            list.add(&tag);
        }
        list.suggestions = suggestions.into_iter().collect();
        list
    }

    pub fn with_suggestions<J>(suggestions: J) -> Self
    where
        J: IntoIterator<Item = String>,
    {
        Self::with_items(Vec::new(), suggestions)
    }

    /// Adds a tag. Whitespace is trimmed; empty input and exact
    /// (case-sensitive) duplicates are no-ops. Returns whether the list grew.
    pub fn add(&mut self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || self.confirmed.iter().any(|t| t == value) {
            return false;
        }
        self.confirmed.push(value.to_string());
        true
    }

    /// Removes the first exact match. No-op if absent.
    pub fn remove(&mut self, value: &str) -> bool {
        match self.confirmed.iter().position(|t| t == value) {
            Some(idx) => {
                self.confirmed.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Moves a suggestion into the confirmed list: `add(value)` plus removal
    /// from the suggestion side. Irreversible within the session: there is
    /// no demote back to suggestion.
    pub fn promote(&mut self, value: &str) -> bool {
        let added = self.add(value);
        if let Some(idx) = self.suggestions.iter().position(|s| s == value) {
            self.suggestions.remove(idx);
        }
        added
    }

    pub fn confirmed(&self) -> &[String] {
        &self.confirmed
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn contains(&self, value: &str) -> bool {
        self.confirmed.iter().any(|t| t == value)
    }

    pub fn is_empty(&self) -> bool {
        self.confirmed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.confirmed.len()
    }
}
