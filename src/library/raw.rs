//! As-fetched record shapes.
//!
//! A [`RawRecord`] is the union of every shape a post or project arrives in:
//! content-store documents (`_id`, `slug.current`, `publishedAt`, resolved
//! references), legacy fallback rows (numeric `id`, flat `category` string,
//! `description`, `image`) and already-normalized items. Every field is read
//! leniently: a value of the wrong type reads as absent instead of failing
//! the whole record.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Read a field, treating a value of the wrong shape as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Identifier as stored: store ids are strings, legacy rows use numbers
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    pub fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// Slug as stored: a plain string or a `{ current }` slug object
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawSlug {
    Plain(String),
    Object { current: Option<String> },
}

impl RawSlug {
    pub fn into_string(self) -> Option<String> {
        match self {
            RawSlug::Plain(s) => Some(s),
            RawSlug::Object { current } => current,
        }
    }
}

/// Author as stored: a bare name or a resolved author document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAuthor {
    Name(String),
    Document { name: Option<String> },
}

impl RawAuthor {
    pub fn into_name(self) -> Option<String> {
        match self {
            RawAuthor::Name(s) => Some(s),
            RawAuthor::Document { name } => name,
        }
    }
}

/// One category or tag entry: a bare title string or a structured reference
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawTaxonomy {
    Title(String),
    Reference(RawTaxonomyRef),
}

impl RawTaxonomy {
    /// Parse one array entry; anything that is neither a string nor an object is skipped
    pub fn from_value(value: Value) -> Option<Self> {
        serde_json::from_value(value).ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawTaxonomyRef {
    #[serde(default, rename = "_id", deserialize_with = "lenient")]
    pub store_id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub slug: Option<RawSlug>,
}

/// A post or project record before normalization
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    #[serde(default, rename = "_id", deserialize_with = "lenient")]
    pub store_id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<RawId>,

    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub slug: Option<RawSlug>,

    #[serde(default, deserialize_with = "lenient")]
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub body: Option<Value>,

    #[serde(default, deserialize_with = "lenient")]
    pub published_at: Option<String>,
    #[serde(default, rename = "published_at", deserialize_with = "lenient")]
    pub published_at_snake: Option<String>,
    #[serde(default, rename = "_createdAt", deserialize_with = "lenient")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub main_image: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub media: Option<Value>,

    #[serde(default, deserialize_with = "lenient")]
    pub featured: Option<bool>,

    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<RawAuthor>,

    #[serde(default, deserialize_with = "lenient")]
    pub categories: Option<Vec<Value>>,
    /// Legacy flat category string
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub tags: Option<Vec<Value>>,

    #[serde(default, deserialize_with = "lenient")]
    pub technologies: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub live_url: Option<String>,
    #[serde(default, rename = "live_url", deserialize_with = "lenient")]
    pub live_url_snake: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub github_url: Option<String>,
    #[serde(default, rename = "source_url", deserialize_with = "lenient")]
    pub source_url: Option<String>,
}

impl RawRecord {
    /// Read a record from any JSON value; non-objects read as an empty record
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}
