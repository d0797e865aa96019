//! Content data: canonical items, raw record shapes, the static fallback
//! table and the in-memory catalog.
//!
//! # Data flow
//!
//! ```text
//! content store ──┐
//!                 ├─> RawRecord ──normalize──> ContentItem ──> Catalog
//! FallbackTable ──┘
//! ```

pub mod catalog;
pub mod content;
pub mod fallback;
pub mod raw;

pub use catalog::{Catalog, LoadMore};
pub use content::{Category, ContentItem, ContentKind, ItemId, Tag, Taxonomy, TaxonomyKind};
pub use fallback::{FallbackTable, DEFAULT_FALLBACK};
pub use raw::RawRecord;
