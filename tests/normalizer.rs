//! Normalizer Integration Tests
//!
//! Tests for default completeness, mixed-shape taxonomy handling and
//! normalization being a fixed point.

use folio::core::normalizer::{normalize_collection, normalize_value};
use folio::library::content::DEFAULT_AUTHOR;
use folio::library::{ContentItem, ContentKind, Taxonomy, DEFAULT_FALLBACK};
use serde_json::{json, Value};

fn renormalize(item: &ContentItem) -> ContentItem {
    normalize_value(item.kind, serde_json::to_value(item).unwrap())
}

fn sample_records() -> Vec<(ContentKind, Value)> {
    vec![
        (
            ContentKind::Post,
            json!({
                "_id": "post-a1",
                "_createdAt": "2024-01-01T00:00:00Z",
                "title": "Shipping a Rust CLI",
                "slug": { "_type": "slug", "current": "shipping-a-rust-cli" },
                "excerpt": "Notes from packaging a small tool.",
                "publishedAt": "2024-02-10T09:30:00Z",
                "mainImage": { "asset": { "_ref": "image-123" }, "alt": "cover" },
                "featured": true,
                "author": { "name": "Sam Rivera" },
                "body": [{ "_type": "block", "children": [{ "_type": "span", "text": "Hello there" }] }],
                "categories": [
                    { "_id": "cat-rust", "title": "Rust", "slug": { "current": "rust" } },
                    "Tooling"
                ],
                "tags": [{ "title": "CLI" }, "release"]
            }),
        ),
        (
            ContentKind::Project,
            json!({
                "id": 12,
                "title": "Price Watcher",
                "description": "Tracks prices and alerts on drops.",
                "category": "Web Scraping",
                "technologies": ["Rust", "SQLite"],
                "liveUrl": "https://prices.example.com",
                "githubUrl": "https://github.com/example/prices",
                "image": "/img/prices.png",
                "date": "2023-09-01"
            }),
        ),
        (ContentKind::Post, json!({})),
        (ContentKind::Project, json!({ "title": "   ", "categories": [null, 4, ""] })),
    ]
}

#[test]
fn test_static_fallback_shape() {
    let item = normalize_value(
        ContentKind::Project,
        json!({ "title": "X", "category": "automation" }),
    );

    assert_eq!(item.categories.len(), 1);
    assert_eq!(item.categories[0].title, "automation");
    assert_eq!(item.categories[0].id, "cat-automation");
    assert_eq!(item.categories[0].slug, "automation");
}

#[test]
fn test_missing_fields_default() {
    let item = normalize_value(
        ContentKind::Post,
        json!({ "_id": "p1", "title": "No extras", "slug": "no-extras" }),
    );

    assert!(item.categories.is_empty());
    assert!(item.tags.is_empty());
    assert!(!item.featured);
    assert_eq!(item.excerpt, "");
    assert_eq!(item.author, DEFAULT_AUTHOR);
    assert_eq!(item.media, None);
    assert_eq!(item.body, None);
    assert!(item.technologies.is_empty());
}

#[test]
fn test_null_fields_default() {
    let item = normalize_value(
        ContentKind::Post,
        json!({
            "title": "Nulls",
            "excerpt": null,
            "featured": null,
            "categories": null,
            "tags": null,
            "author": null,
            "mainImage": null
        }),
    );

    assert_eq!(item.excerpt, "");
    assert!(!item.featured);
    assert!(item.categories.is_empty());
    assert!(item.tags.is_empty());
    assert_eq!(item.author, DEFAULT_AUTHOR);
    assert_eq!(item.media, None);
}

#[test]
fn test_store_document_fields() {
    let (kind, record) = sample_records().remove(0);
    let item = normalize_value(kind, record);

    assert_eq!(item.id.as_str(), "post-a1");
    assert_eq!(item.slug, "shipping-a-rust-cli");
    assert_eq!(item.published_at, "2024-02-10T09:30:00Z");
    assert_eq!(item.author, "Sam Rivera");
    assert!(item.featured);
    assert!(item.media.is_some());
    assert_eq!(
        item.categories,
        vec![
            Taxonomy::new("cat-rust", "Rust", "rust"),
            Taxonomy::new("cat-1", "Tooling", "tooling"),
        ]
    );
    assert_eq!(
        item.tags,
        vec![
            Taxonomy::new("tag-0", "CLI", "cli"),
            Taxonomy::new("tag-1", "release", "release"),
        ]
    );
}

#[test]
fn test_legacy_project_fields() {
    let (kind, record) = sample_records().remove(1);
    let item = normalize_value(kind, record);

    assert_eq!(item.id.as_str(), "12");
    assert_eq!(item.slug, "price-watcher");
    assert_eq!(item.excerpt, "Tracks prices and alerts on drops.");
    assert_eq!(item.published_at, "2023-09-01");
    assert_eq!(item.media, Some(json!("/img/prices.png")));
    assert_eq!(item.technologies, vec!["Rust", "SQLite"]);
    assert_eq!(item.live_url.as_deref(), Some("https://prices.example.com"));
    assert_eq!(item.source_url.as_deref(), Some("https://github.com/example/prices"));
    assert_eq!(
        item.categories,
        vec![Taxonomy::new("cat-web-scraping", "Web Scraping", "web-scraping")]
    );
}

#[test]
fn test_normalization_is_a_fixed_point() {
    for (kind, record) in sample_records() {
        let once = normalize_value(kind, record);
        let twice = renormalize(&once);
        assert_eq!(once, twice, "not a fixed point for {:?}", once.slug);
    }
}

#[test]
fn test_fallback_table_is_a_fixed_point() {
    for kind in [ContentKind::Post, ContentKind::Project] {
        let items = normalize_collection(kind, DEFAULT_FALLBACK.records(kind)).items;
        assert!(!items.is_empty());
        for item in &items {
            assert_eq!(&renormalize(item), item);
        }
    }
}

#[test]
fn test_deterministic() {
    for (kind, record) in sample_records() {
        assert_eq!(
            normalize_value(kind, record.clone()),
            normalize_value(kind, record)
        );
    }
}

#[test]
fn test_every_item_has_a_slug() {
    for (kind, record) in sample_records() {
        let item = normalize_value(kind, record);
        assert!(!item.slug.is_empty());
        assert!(!item.id.as_str().is_empty());
    }
}

#[test]
fn test_collection_slugs_are_unique() {
    let records = vec![
        json!({ "title": "Same Title" }),
        json!({ "title": "Same Title", "excerpt": "second" }),
        json!({ "title": "Other" }),
    ];

    let normalized = normalize_collection(ContentKind::Post, records);
    let slugs: Vec<_> = normalized.items.iter().map(|i| i.slug.as_str()).collect();

    assert_eq!(slugs, vec!["same-title", "other"]);
    assert_eq!(normalized.duplicate_slugs, vec!["same-title".to_string()]);
    assert_eq!(normalized.items[0].excerpt, "");
}

#[test]
fn test_blank_reference_title_falls_back_to_name_then_slug() {
    let item = normalize_value(
        ContentKind::Post,
        json!({
            "title": "T",
            "categories": [
                { "_id": "c1", "title": "", "name": "Rust", "slug": { "current": "rust" } },
                { "_id": "c2", "title": "  ", "slug": { "current": "devops" } }
            ]
        }),
    );

    assert_eq!(
        item.categories,
        vec![
            Taxonomy::new("c1", "Rust", "rust"),
            Taxonomy::new("c2", "devops", "devops"),
        ]
    );
}
