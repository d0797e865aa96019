//! Canonical content shapes.
//!
//! Every post or project, whatever its origin, ends up as a [`ContentItem`]
//! before anything downstream looks at it.

use serde::{Deserialize, Serialize};

/// Author label used when a record carries no author name
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Content item identifier, unique within its collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Blog post
    Post,

    /// Portfolio project
    Project,
}

impl ContentKind {
    /// Document type name in the content store
    pub const fn document_type(self) -> &'static str {
        match self {
            ContentKind::Post => "post",
            ContentKind::Project => "project",
        }
    }

    /// Label of the synthetic "no filter" entry in listing filter bars
    pub const fn all_label(self) -> &'static str {
        match self {
            ContentKind::Post => "All Posts",
            ContentKind::Project => "All Projects",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.document_type())
    }
}

impl std::str::FromStr for ContentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "post" | "posts" | "blog" => Ok(ContentKind::Post),
            "project" | "projects" => Ok(ContentKind::Project),
            _ => anyhow::bail!("Unknown content kind: {}", s),
        }
    }
}

/// Which taxonomy a reference belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxonomyKind {
    Category,
    Tag,
}

impl TaxonomyKind {
    /// Document type name in the content store
    pub const fn document_type(self) -> &'static str {
        match self {
            TaxonomyKind::Category => "category",
            TaxonomyKind::Tag => "tag",
        }
    }

    /// Prefix for synthesized identifiers (`cat-0`, `tag-3`, ...)
    pub const fn id_prefix(self) -> &'static str {
        match self {
            TaxonomyKind::Category => "cat",
            TaxonomyKind::Tag => "tag",
        }
    }
}

/// A category or tag reference attached to a content item.
///
/// `title` is the canonical field: every comparison downstream uses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub id: String,
    pub title: String,
    pub slug: String,
}

impl Taxonomy {
    pub fn new(id: impl Into<String>, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
        }
    }
}

pub type Category = Taxonomy;
pub type Tag = Taxonomy;

/// A post or project in its canonical, fully defaulted shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Identifier, unique within the collection
    pub id: ItemId,

    /// Post or project
    pub kind: ContentKind,

    /// Display title
    pub title: String,

    /// URL-safe slug, never empty
    pub slug: String,

    /// Short description, empty when absent
    pub excerpt: String,

    /// Rich-content payload, opaque to this crate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,

    /// Publication or creation timestamp (ISO-8601), empty when unknown
    pub published_at: String,

    /// Media reference, opaque to this crate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<serde_json::Value>,

    /// Featured flag
    pub featured: bool,

    /// Author display name
    pub author: String,

    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,

    /// Technologies used (projects)
    pub technologies: Vec<String>,

    /// Deployed site (projects)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,

    /// Source repository (projects)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl ContentItem {
    /// Whether any category on this item has exactly this title
    pub fn has_category(&self, title: &str) -> bool {
        self.categories.iter().any(|c| c.title == title)
    }

    /// Category titles in their stored order
    pub fn category_titles(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_kind_from_str() {
        assert_eq!("post".parse::<ContentKind>().unwrap(), ContentKind::Post);
        assert_eq!("blog".parse::<ContentKind>().unwrap(), ContentKind::Post);
        assert_eq!(
            "Projects".parse::<ContentKind>().unwrap(),
            ContentKind::Project
        );
        assert!("page".parse::<ContentKind>().is_err());
    }

    #[test]
    fn test_item_id_serializes_as_plain_string() {
        let id = ItemId::new("post-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"post-1\"");
        assert_eq!(id.to_string(), "post-1");
    }
}
