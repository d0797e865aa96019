//! Category and tag helpers.
//!
//! Slug derivation for taxonomy entries and the distinct-title lists that
//! feed listing filter bars.

use std::collections::HashSet;

use crate::library::content::{Category, ContentItem, Tag, Taxonomy};

/// Title of the synthetic entry that heads every filter bar
pub const ALL_TITLE: &str = "All";

/// Derive a slug from a title: lowercase, whitespace runs become hyphens
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// The synthetic "All" entry
pub fn all_entry() -> Taxonomy {
    Taxonomy::new("all", ALL_TITLE, "all")
}

/// Distinct categories in use, headed by the synthetic "All" entry.
///
/// Entries are compared by `title` only; ids and slugs may differ between
/// origins for the same category. First-seen order is kept. A real entry
/// titled "All" collapses into the synthetic one, since selecting "All"
/// always clears the category filter.
pub fn distinct_categories(items: &[ContentItem]) -> Vec<Category> {
    distinct_by_title(items.iter().flat_map(|item| item.categories.iter()))
}

/// Distinct tags in use, headed by the synthetic "All" entry
pub fn distinct_tags(items: &[ContentItem]) -> Vec<Tag> {
    distinct_by_title(items.iter().flat_map(|item| item.tags.iter()))
}

fn distinct_by_title<'a>(entries: impl Iterator<Item = &'a Taxonomy>) -> Vec<Taxonomy> {
    let mut seen: HashSet<&str> = HashSet::from([ALL_TITLE]);
    let mut out = vec![all_entry()];

    for entry in entries {
        if seen.insert(entry.title.as_str()) {
            out.push(entry.clone());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalizer::normalize_value;
    use crate::library::content::ContentKind;
    use serde_json::json;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Web Development"), "web-development");
        assert_eq!(slugify("  AI   Tools "), "ai-tools");
        assert_eq!(slugify("automation"), "automation");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_distinct_of_nothing_is_all() {
        let out = distinct_categories(&[]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, ALL_TITLE);
    }

    #[test]
    fn test_real_all_category_is_not_listed_twice() {
        let item = normalize_value(
            ContentKind::Post,
            json!({ "title": "T", "categories": ["All", "Rust"] }),
        );

        let titles: Vec<_> = distinct_categories(&[item])
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec![ALL_TITLE, "Rust"]);
    }
}
