//! Listing filter and search.
//!
//! Narrows a normalized collection to what a listing view should show.
//! Filtering is stable: the result is always a subsequence of the input in
//! its original order. Sorting and paging happen elsewhere.

use serde::{Deserialize, Serialize};

use crate::library::content::ContentItem;

/// Selections that mean "no category filter"
const ALL_SENTINELS: &[&str] = &["all", "all posts", "all projects"];

/// Category predicate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// No category filter
    #[default]
    Any,

    /// Items with a category whose title equals this exactly
    Title(String),
}

impl CategoryFilter {
    /// Interpret a filter-bar selection; blank and "All"-style labels mean no filter
    pub fn from_selection(selection: &str) -> Self {
        let trimmed = selection.trim();
        let is_sentinel = trimmed.is_empty()
            || ALL_SENTINELS
                .iter()
                .any(|s| trimmed.eq_ignore_ascii_case(s));

        if is_sentinel {
            CategoryFilter::Any
        } else {
            CategoryFilter::Title(selection.to_string())
        }
    }

    pub fn matches(&self, item: &ContentItem) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Title(title) => item.has_category(title),
        }
    }
}

/// Current predicates of a listing view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub category: CategoryFilter,

    /// Free-text query, empty means no filter
    #[serde(default)]
    pub query: String,

    /// Only show featured items
    #[serde(default)]
    pub featured_only: bool,
}

impl FilterState {
    pub fn new(category: &str, query: impl Into<String>) -> Self {
        Self {
            category: CategoryFilter::from_selection(category),
            query: query.into(),
            featured_only: false,
        }
    }

    pub fn with_featured_only(mut self, featured_only: bool) -> Self {
        self.featured_only = featured_only;
        self
    }

    /// Whether an item passes every active predicate
    pub fn matches(&self, item: &ContentItem) -> bool {
        self.category.matches(item)
            && matches_query(item, &self.query.to_lowercase())
            && (!self.featured_only || item.featured)
    }
}

/// Case-insensitive substring match against title or excerpt
fn matches_query(item: &ContentItem, query_lower: &str) -> bool {
    query_lower.is_empty()
        || item.title.to_lowercase().contains(query_lower)
        || item.excerpt.to_lowercase().contains(query_lower)
}

/// Apply a filter state, preserving input order
pub fn filter<'a>(items: &'a [ContentItem], state: &FilterState) -> Vec<&'a ContentItem> {
    items.iter().filter(|item| state.matches(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert_eq!(CategoryFilter::from_selection("all"), CategoryFilter::Any);
        assert_eq!(CategoryFilter::from_selection("All Posts"), CategoryFilter::Any);
        assert_eq!(CategoryFilter::from_selection("All"), CategoryFilter::Any);
        assert_eq!(CategoryFilter::from_selection(""), CategoryFilter::Any);
        assert_eq!(
            CategoryFilter::from_selection("Automation"),
            CategoryFilter::Title("Automation".into())
        );
    }
}
