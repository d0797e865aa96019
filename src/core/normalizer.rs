//! Raw record to [`ContentItem`] normalization.
//!
//! Normalization is pure and total: missing or mistyped fields fall back to
//! defaults and nothing here returns an error. Normalizing the JSON form of
//! an already-normalized item yields the same item.

use std::collections::HashSet;

use serde_json::Value;

use crate::library::content::{
    ContentItem, ContentKind, ItemId, Taxonomy, TaxonomyKind, DEFAULT_AUTHOR,
};
use crate::library::raw::{RawRecord, RawTaxonomy};

use super::taxonomy::slugify;

/// Result of normalizing a whole collection
#[derive(Debug, Clone, Default)]
pub struct Normalized {
    /// Items in input order, unique by slug
    pub items: Vec<ContentItem>,

    /// Slugs of later records dropped because an earlier record claimed them
    pub duplicate_slugs: Vec<String>,
}

/// Normalize a JSON value of unknown shape
pub fn normalize_value(kind: ContentKind, value: Value) -> ContentItem {
    normalize(kind, RawRecord::from_value(value))
}

/// Normalize one raw record
pub fn normalize(kind: ContentKind, raw: RawRecord) -> ContentItem {
    let raw_id = raw
        .store_id
        .or(raw.id)
        .map(|id| id.into_string())
        .filter(|id| !id.is_empty());

    let title = raw.title.unwrap_or_default();

    let slug = raw
        .slug
        .and_then(|s| s.into_string())
        .filter(|s| !s.is_empty())
        .or_else(|| Some(slugify(&title)).filter(|s| !s.is_empty()))
        .or_else(|| raw_id.clone())
        .unwrap_or_else(|| format!("{}-untitled", kind));

    let id = raw_id.unwrap_or_else(|| format!("{}-{}", kind, slug));

    let categories = match (raw.categories, raw.category) {
        (Some(entries), _) => normalize_taxonomy(TaxonomyKind::Category, entries),
        (None, Some(flat)) => flat_category(&flat).into_iter().collect(),
        (None, None) => Vec::new(),
    };

    let tags = raw
        .tags
        .map(|entries| normalize_taxonomy(TaxonomyKind::Tag, entries))
        .unwrap_or_default();

    ContentItem {
        id: ItemId::new(id),
        kind,
        title,
        slug,
        excerpt: raw.excerpt.or(raw.description).unwrap_or_default(),
        body: raw.body.filter(|b| !b.is_null()),
        published_at: raw
            .published_at
            .or(raw.published_at_snake)
            .or(raw.date)
            .or(raw.created_at)
            .unwrap_or_default(),
        media: raw
            .main_image
            .or(raw.image)
            .or(raw.media)
            .filter(|m| !m.is_null()),
        featured: raw.featured.unwrap_or(false),
        author: raw
            .author
            .and_then(|a| a.into_name())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        categories,
        tags,
        technologies: raw.technologies.unwrap_or_default(),
        live_url: raw.live_url.or(raw.live_url_snake),
        source_url: raw.github_url.or(raw.source_url),
    }
}

/// Normalize a collection, keeping the first record for each slug
pub fn normalize_collection(kind: ContentKind, values: Vec<Value>) -> Normalized {
    let mut seen = HashSet::new();
    let mut out = Normalized::default();

    for item in values.into_iter().map(|v| normalize_value(kind, v)) {
        if seen.insert(item.slug.clone()) {
            out.items.push(item);
        } else {
            out.duplicate_slugs.push(item.slug);
        }
    }

    out
}

/// Legacy rows carry one flat category string
fn flat_category(title: &str) -> Option<Taxonomy> {
    if title.trim().is_empty() {
        return None;
    }
    let slug = slugify(title);
    Some(Taxonomy::new(format!("cat-{}", slug), title, slug))
}

/// Normalize category or tag entries, skipping ones with no usable title
pub fn normalize_taxonomy(kind: TaxonomyKind, entries: Vec<Value>) -> Vec<Taxonomy> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let positional_id = format!("{}-{}", kind.id_prefix(), index);

            match RawTaxonomy::from_value(value)? {
                RawTaxonomy::Title(title) => {
                    if title.trim().is_empty() {
                        return None;
                    }
                    let slug = slugify(&title);
                    Some(Taxonomy::new(positional_id, title, slug))
                }
                RawTaxonomy::Reference(reference) => {
                    let slug = reference
                        .slug
                        .and_then(|s| s.into_string())
                        .filter(|s| !s.trim().is_empty());
                    let title = reference
                        .title
                        .filter(|t| !t.trim().is_empty())
                        .or(reference.name.filter(|n| !n.trim().is_empty()))
                        .or_else(|| slug.clone())?;
                    let id = reference
                        .store_id
                        .or(reference.id)
                        .map(|id| id.into_string())
                        .filter(|id| !id.is_empty())
                        .unwrap_or(positional_id);
                    let slug = slug.unwrap_or_else(|| slugify(&title));
                    Some(Taxonomy::new(id, title, slug))
                }
            }
        })
        .collect()
}
