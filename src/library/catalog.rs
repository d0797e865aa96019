//! Catalog over a normalized collection.
//!
//! Read-only view that listing and detail pages query: filtering, slug
//! lookup, featured items, "load more" windows and related items.

use crate::core::listing::{self, FilterState};
use crate::core::taxonomy;

use super::content::{Category, ContentItem, ContentKind, Tag};

/// A normalized collection of one content kind
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Kind of every item in the catalog
    pub kind: ContentKind,

    /// Items in source order
    pub items: Vec<ContentItem>,
}

impl Catalog {
    /// Create a catalog; items are kept in the given order
    pub fn new(kind: ContentKind, items: Vec<ContentItem>) -> Self {
        Self { kind, items }
    }

    /// Items passing a filter state, in source order
    pub fn filter(&self, state: &FilterState) -> Vec<&ContentItem> {
        listing::filter(&self.items, state)
    }

    /// Search items by query (case-insensitive substring of title or excerpt)
    pub fn search(&self, query: &str) -> Vec<&ContentItem> {
        self.filter(&FilterState::new("", query))
    }

    /// Get an item by slug
    pub fn by_slug(&self, slug: &str) -> Option<&ContentItem> {
        self.items.iter().find(|i| i.slug == slug)
    }

    /// Featured items in source order, at most `limit`
    pub fn featured(&self, limit: usize) -> Vec<&ContentItem> {
        self.items.iter().filter(|i| i.featured).take(limit).collect()
    }

    /// Distinct categories, headed by "All"
    pub fn categories(&self) -> Vec<Category> {
        taxonomy::distinct_categories(&self.items)
    }

    /// Distinct tags, headed by "All"
    pub fn tags(&self) -> Vec<Tag> {
        taxonomy::distinct_tags(&self.items)
    }

    /// Other items sharing at least one category title with `item`
    pub fn related(&self, item: &ContentItem, limit: usize) -> Vec<&ContentItem> {
        self.items
            .iter()
            .filter(|other| other.slug != item.slug)
            .filter(|other| item.category_titles().any(|t| other.has_category(t)))
            .take(limit)
            .collect()
    }

    /// Get the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// "Load more" window over an already filtered listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMore {
    /// Items revealed per step
    pub step: usize,

    /// Items currently revealed
    pub visible: usize,
}

impl LoadMore {
    pub fn new(step: usize) -> Self {
        Self {
            step,
            visible: step,
        }
    }

    /// Reveal the next step
    pub fn advance(&mut self) {
        self.visible += self.step;
    }

    /// Back to the first step, used when the filter changes
    pub fn reset(&mut self) {
        self.visible = self.step;
    }

    /// The revealed prefix of `items`
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible.min(items.len())]
    }

    /// Whether `items` has more than is revealed
    pub fn has_more<T>(&self, items: &[T]) -> bool {
        items.len() > self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalizer::normalize_value;
    use serde_json::json;

    fn catalog() -> Catalog {
        let items = vec![
            json!({ "_id": "1", "title": "Rust CLIs", "categories": ["Rust"], "featured": true }),
            json!({ "_id": "2", "title": "Async Rust", "categories": ["Rust", "Async"] }),
            json!({ "_id": "3", "title": "CSS Grid", "categories": ["Web"], "featured": true }),
            json!({ "_id": "4", "title": "Tokio Tips", "categories": ["Async"] }),
        ]
        .into_iter()
        .map(|v| normalize_value(ContentKind::Post, v))
        .collect();

        Catalog::new(ContentKind::Post, items)
    }

    #[test]
    fn test_catalog_by_slug() {
        let catalog = catalog();
        assert_eq!(catalog.by_slug("css-grid").unwrap().id.as_str(), "3");
        assert!(catalog.by_slug("missing").is_none());
    }

    #[test]
    fn test_catalog_search() {
        let catalog = catalog();
        assert_eq!(catalog.search("rust").len(), 2);
        assert_eq!(catalog.search("RUST").len(), 2);
        assert!(catalog.search("python").is_empty());
    }

    #[test]
    fn test_catalog_featured() {
        let catalog = catalog();
        let titles: Vec<_> = catalog.featured(5).iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Rust CLIs", "CSS Grid"]);
        assert_eq!(catalog.featured(1).len(), 1);
    }

    #[test]
    fn test_catalog_related() {
        let catalog = catalog();
        let item = catalog.by_slug("async-rust").unwrap();
        let related: Vec<_> = catalog
            .related(item, 5)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(related, vec!["1", "4"]);
    }

    #[test]
    fn test_catalog_categories() {
        let titles: Vec<_> = catalog()
            .categories()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["All", "Rust", "Async", "Web"]);
    }

    #[test]
    fn test_load_more() {
        let items = [1, 2, 3, 4, 5];
        let mut more = LoadMore::new(2);

        assert_eq!(more.window(&items), &[1, 2]);
        assert!(more.has_more(&items));

        more.advance();
        more.advance();
        assert_eq!(more.window(&items), &items[..]);
        assert!(!more.has_more(&items));

        more.reset();
        assert_eq!(more.visible, 2);
    }
}
