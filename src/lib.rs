//! folio - content core for a portfolio and blog site
//!
//! Fetches posts, projects, categories and tags from a headless content
//! store, normalizes every record into one canonical shape and filters the
//! result for listing views.
//!
//! # Architecture
//!
//! - Records arrive in mixed shapes (store documents, legacy fallback rows)
//! - The normalizer maps each one to a [`ContentItem`] with every field defaulted
//! - The listing filter narrows a collection by category, query and featured flag
//! - Fetch failures come back as [`FetchOutcome::Failed`], never as panics
//!
//! # Modules
//!
//! - `adapters`: Content sources (HTTP content store)
//! - `core`: Normalizer, reading time, listing filter, taxonomy, fetch layer
//! - `library`: Data structures (ContentItem, RawRecord, Catalog, fallback table)
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # List projects in one category matching a query
//! folio projects --category automation --query api
//!
//! # Show a post
//! folio show automating-invoice-intake
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod library;

// Re-export main types at crate root for convenience
pub use crate::adapters::{ContentSource, FetchError, StoreClient, StoreConfig};
pub use crate::core::{
    distinct_categories, filter, normalize, normalize_value, reading_time, ContentLibrary,
    FetchOutcome, FilterState, Origin,
};
pub use crate::library::{Catalog, ContentItem, ContentKind, RawRecord, Taxonomy};
