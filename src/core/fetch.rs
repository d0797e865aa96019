//! Fetch layer: content store first, static fallback second.
//!
//! Every operation reports an explicit [`FetchOutcome`] so callers can tell
//! "genuinely empty" from "fetch failed". There is no retry, timeout, cache
//! or request coalescing: two identical calls make two round-trips.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::adapters::{ContentSource, FetchError, StoreClient};
use crate::config::ResolvedConfig;
use crate::library::content::{ContentItem, ContentKind, Taxonomy, TaxonomyKind};
use crate::library::fallback::{FallbackTable, DEFAULT_FALLBACK};

use super::normalizer::{normalize_collection, normalize_taxonomy, normalize_value};
use super::taxonomy::{distinct_categories, distinct_tags};

/// Where loaded items came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Store,
    Fallback,
}

/// Result of loading a collection
#[derive(Debug)]
pub enum FetchOutcome<T = ContentItem> {
    /// Items loaded, possibly none
    Loaded { items: Vec<T>, origin: Origin },

    /// The store failed and no fallback rows exist
    Failed { reason: FetchError },
}

impl<T> FetchOutcome<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, FetchOutcome::Loaded { .. })
    }

    pub fn origin(&self) -> Option<Origin> {
        match self {
            FetchOutcome::Loaded { origin, .. } => Some(*origin),
            FetchOutcome::Failed { .. } => None,
        }
    }

    /// Loaded items, empty on failure
    pub fn items(&self) -> &[T] {
        match self {
            FetchOutcome::Loaded { items, .. } => items.as_slice(),
            FetchOutcome::Failed { .. } => &[],
        }
    }

    /// Loaded items, empty on failure (the empty-state view)
    pub fn into_items(self) -> Vec<T> {
        match self {
            FetchOutcome::Loaded { items, .. } => items,
            FetchOutcome::Failed { .. } => Vec::new(),
        }
    }
}

/// Loads and normalizes content for one site
pub struct ContentLibrary {
    source: Option<Arc<dyn ContentSource>>,
    fallback: &'static FallbackTable,
}

impl ContentLibrary {
    /// Create a library; `None` means the store is unconfigured
    pub fn new(source: Option<Arc<dyn ContentSource>>, fallback: &'static FallbackTable) -> Self {
        Self { source, fallback }
    }

    /// Create a library from resolved configuration
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let source = config
            .store
            .clone()
            .map(|store| Arc::new(StoreClient::new(store)) as Arc<dyn ContentSource>);
        let fallback = if config.fallback_enabled {
            &DEFAULT_FALLBACK
        } else {
            &FallbackTable::EMPTY
        };

        Self::new(source, fallback)
    }

    /// All items of a kind, most recent first
    pub async fn items(&self, kind: ContentKind) -> FetchOutcome {
        let fetched = match &self.source {
            Some(source) => source.fetch_all(kind).await,
            None => Err(FetchError::Unconfigured),
        };

        self.settle(kind, fetched, |items| items)
    }

    /// Featured items of a kind, at most `limit`
    pub async fn featured(&self, kind: ContentKind, limit: usize) -> FetchOutcome {
        let fetched = match &self.source {
            Some(source) => source.fetch_featured(kind, limit).await,
            None => Err(FetchError::Unconfigured),
        };

        self.settle(kind, fetched, |items| {
            items.into_iter().filter(|i| i.featured).take(limit).collect()
        })
    }

    /// One item by slug; `Ok(None)` is the not-found signal for route lookups
    pub async fn find_by_slug(
        &self,
        kind: ContentKind,
        slug: &str,
    ) -> Result<Option<ContentItem>, FetchError> {
        let fetched = match &self.source {
            Some(source) => source.fetch_by_slug(kind, slug).await,
            None => Err(FetchError::Unconfigured),
        };

        match fetched {
            Ok(value) => Ok(value.map(|v| normalize_value(kind, v))),
            Err(reason) if self.fallback.has(kind) => {
                warn!(%kind, slug, error = %reason, "Content store unavailable, looking up fallback table");
                Ok(self
                    .normalize(kind, self.fallback.records(kind))
                    .into_iter()
                    .find(|item| item.slug == slug))
            }
            Err(reason) => Err(reason),
        }
    }

    /// All categories, ordered by title
    pub async fn categories(&self) -> FetchOutcome<Taxonomy> {
        self.taxonomy(TaxonomyKind::Category).await
    }

    /// All tags, ordered by title
    pub async fn tags(&self) -> FetchOutcome<Taxonomy> {
        self.taxonomy(TaxonomyKind::Tag).await
    }

    async fn taxonomy(&self, taxonomy: TaxonomyKind) -> FetchOutcome<Taxonomy> {
        let fetched = match &self.source {
            Some(source) => source.fetch_taxonomy(taxonomy).await,
            None => Err(FetchError::Unconfigured),
        };

        let kinds = [ContentKind::Post, ContentKind::Project];

        match fetched {
            Ok(values) => FetchOutcome::Loaded {
                items: normalize_taxonomy(taxonomy, values),
                origin: Origin::Store,
            },
            Err(reason) if kinds.iter().any(|k| self.fallback.has(*k)) => {
                warn!(taxonomy = taxonomy.document_type(), error = %reason, "Content store unavailable, deriving from fallback table");

                let items: Vec<ContentItem> = kinds
                    .iter()
                    .flat_map(|k| self.normalize(*k, self.fallback.records(*k)))
                    .collect();
                let distinct = match taxonomy {
                    TaxonomyKind::Category => distinct_categories(&items),
                    TaxonomyKind::Tag => distinct_tags(&items),
                };

                let mut entries: Vec<Taxonomy> = distinct.into_iter().skip(1).collect();
                entries.sort_by(|a, b| a.title.cmp(&b.title));

                FetchOutcome::Loaded {
                    items: entries,
                    origin: Origin::Fallback,
                }
            }
            Err(reason) => {
                warn!(taxonomy = taxonomy.document_type(), error = %reason, "Failed to load taxonomy");
                FetchOutcome::Failed { reason }
            }
        }
    }

    fn settle(
        &self,
        kind: ContentKind,
        fetched: Result<Vec<Value>, FetchError>,
        from_fallback: impl FnOnce(Vec<ContentItem>) -> Vec<ContentItem>,
    ) -> FetchOutcome {
        match fetched {
            Ok(values) => {
                let items = self.normalize(kind, values);
                let source = self.source.as_ref().map_or("none", |s| s.name());
                info!(%kind, source, count = items.len(), "Loaded items");
                FetchOutcome::Loaded {
                    items,
                    origin: Origin::Store,
                }
            }
            Err(reason) if self.fallback.has(kind) => {
                warn!(%kind, error = %reason, "Content store unavailable, using fallback table");
                let items = from_fallback(self.normalize(kind, self.fallback.records(kind)));
                FetchOutcome::Loaded {
                    items,
                    origin: Origin::Fallback,
                }
            }
            Err(reason) => {
                warn!(%kind, error = %reason, "Failed to load content");
                FetchOutcome::Failed { reason }
            }
        }
    }

    fn normalize(&self, kind: ContentKind, values: Vec<Value>) -> Vec<ContentItem> {
        let normalized = normalize_collection(kind, values);
        for slug in &normalized.duplicate_slugs {
            warn!(%kind, slug, "Dropping record with duplicate slug");
        }
        normalized.items
    }
}
