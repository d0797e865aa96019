//! Adapter interfaces for external content sources.
//!
//! Adapters hand back raw JSON records; normalization happens in
//! [`crate::core::normalizer`].

pub mod store;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::library::content::{ContentKind, TaxonomyKind};

pub use store::{StoreClient, StoreConfig};

/// Why a fetch from a content source failed
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("content store is not configured")]
    Unconfigured,

    #[error("request to content store failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("content store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("content store rejected query: {0}")]
    Api(String),

    #[error("failed to decode content store response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read interface of a content source
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Human-readable source name
    fn name(&self) -> &str;

    /// All items of a kind, most recent first
    async fn fetch_all(&self, kind: ContentKind) -> Result<Vec<Value>, FetchError>;

    /// Featured items of a kind, most recent first, at most `limit`
    async fn fetch_featured(&self, kind: ContentKind, limit: usize)
        -> Result<Vec<Value>, FetchError>;

    /// One item by slug, `None` when no such item exists
    async fn fetch_by_slug(&self, kind: ContentKind, slug: &str)
        -> Result<Option<Value>, FetchError>;

    /// All categories or tags, ordered by title
    async fn fetch_taxonomy(&self, taxonomy: TaxonomyKind) -> Result<Vec<Value>, FetchError>;
}
