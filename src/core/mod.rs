//! Content logic.
//!
//! This module contains:
//! - Normalizer: raw record to canonical item
//! - Reading time: word-count estimate over rich-content bodies
//! - Listing: category/query filtering
//! - Taxonomy: slug derivation and distinct category/tag lists
//! - Fetch: store-then-fallback loading with explicit outcomes

pub mod fetch;
pub mod listing;
pub mod normalizer;
pub mod reading_time;
pub mod taxonomy;

// Re-export commonly used types
pub use fetch::{ContentLibrary, FetchOutcome, Origin};
pub use listing::{filter, CategoryFilter, FilterState};
pub use normalizer::{normalize, normalize_collection, normalize_value, Normalized};
pub use reading_time::reading_time;
pub use taxonomy::{distinct_categories, distinct_tags, slugify};
