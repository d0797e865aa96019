//! Command-line interface for folio.
//!
//! Lists, filters and shows posts and projects from the configured content
//! store (or the fallback table), and normalizes raw records offline.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;

use crate::config;
use crate::core::{
    normalize_value, reading_time, ContentLibrary, FetchOutcome, FilterState, Origin,
};
use crate::library::{Catalog, ContentItem, ContentKind, LoadMore, Taxonomy};

/// folio - portfolio content toolkit
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List blog posts
    Posts(ListArgs),

    /// List portfolio projects
    Projects(ListArgs),

    /// List featured items
    Featured {
        /// Kind of item
        #[arg(short, long, value_enum, default_value = "project")]
        kind: KindArg,
    },

    /// Show one post or project by slug
    Show {
        /// Item slug
        slug: String,

        /// Kind of item
        #[arg(short, long, value_enum, default_value = "post")]
        kind: KindArg,
    },

    /// List categories (filter-bar view when --kind is given)
    Categories {
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
    },

    /// List tags
    Tags,

    /// Normalize raw records from a JSON file (one object or an array)
    Normalize {
        /// JSON file to read
        file: PathBuf,

        /// Kind of the records
        #[arg(short, long, value_enum, default_value = "post")]
        kind: KindArg,
    },

    /// Show resolved configuration (debug)
    Config,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Category title to filter by ("All" for no filter)
    #[arg(short, long, default_value = "all")]
    category: String,

    /// Case-insensitive search over title and excerpt
    #[arg(short, long, default_value = "")]
    query: String,

    /// Only featured items
    #[arg(short, long)]
    featured: bool,

    /// Number of "load more" steps to reveal
    #[arg(short, long, default_value = "1")]
    pages: usize,
}

/// Content kind for CLI (maps to ContentKind)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Post,
    Project,
}

impl From<KindArg> for ContentKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Post => ContentKind::Post,
            KindArg::Project => ContentKind::Project,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Posts(args) => list_items(ContentKind::Post, args).await,
            Commands::Projects(args) => list_items(ContentKind::Project, args).await,
            Commands::Featured { kind } => list_featured(kind.into()).await,
            Commands::Show { slug, kind } => show_item(&slug, kind.into()).await,
            Commands::Categories { kind } => list_categories(kind.map(Into::into)).await,
            Commands::Tags => list_tags().await,
            Commands::Normalize { file, kind } => normalize_file(&file, kind.into()),
            Commands::Config => show_config(),
        }
    }
}

fn library() -> Result<ContentLibrary> {
    Ok(ContentLibrary::from_config(config::config()?))
}

fn origin_note(origin: Option<Origin>) -> &'static str {
    match origin {
        Some(Origin::Store) => "content store",
        Some(Origin::Fallback) => "fallback table",
        None => "unavailable",
    }
}

/// List, filter and page posts or projects
async fn list_items(kind: ContentKind, args: ListArgs) -> Result<()> {
    let library = library()?;
    let page_size = config::config()?.listing.page_size;

    let outcome = library.items(kind).await;
    if let FetchOutcome::Failed { reason } = &outcome {
        eprintln!("Could not load {}s: {}", kind, reason);
    }
    let origin = outcome.origin();
    let catalog = Catalog::new(kind, outcome.into_items());

    let state = FilterState::new(&args.category, args.query).with_featured_only(args.featured);
    let filtered = catalog.filter(&state);

    if filtered.is_empty() {
        println!("No {}s found", kind);
        return Ok(());
    }

    let mut more = LoadMore::new(page_size);
    for _ in 1..args.pages.max(1) {
        more.advance();
    }

    println!("{:<36} {:<12} {:<24} {}", "SLUG", "DATE", "CATEGORIES", "TITLE");
    println!("{}", "-".repeat(100));

    for item in more.window(&filtered) {
        let categories: Vec<_> = item.category_titles().collect();
        println!(
            "{:<36} {:<12} {:<24} {}{}",
            item.slug,
            display_date(&item.published_at),
            categories.join(", "),
            item.title,
            if item.featured { " *" } else { "" }
        );
    }

    if more.has_more(&filtered) {
        println!(
            "\n[{} of {} shown, use --pages {} for more]",
            more.visible,
            filtered.len(),
            args.pages.max(1) + 1
        );
    }
    eprintln!("[source: {}]", origin_note(origin));

    Ok(())
}

/// List featured items, capped by the configured limit
async fn list_featured(kind: ContentKind) -> Result<()> {
    let library = library()?;
    let limit = config::config()?.listing.featured_limit;

    let outcome = library.featured(kind, limit).await;
    if let FetchOutcome::Failed { reason } = &outcome {
        eprintln!("Could not load featured {}s: {}", kind, reason);
    }
    if outcome.items().is_empty() {
        println!("No featured {}s", kind);
        return Ok(());
    }

    for item in outcome.items() {
        println!("{} ({})", item.title, item.slug);
        if !item.excerpt.is_empty() {
            println!("  {}", item.excerpt);
        }
    }
    eprintln!("[source: {}]", origin_note(outcome.origin()));

    Ok(())
}

/// Show one item
async fn show_item(slug: &str, kind: ContentKind) -> Result<()> {
    let library = library()?;

    let item = library
        .find_by_slug(kind, slug)
        .await
        .with_context(|| format!("Failed to look up {} '{}'", kind, slug))?;

    let Some(item) = item else {
        anyhow::bail!("{} '{}' not found", kind, slug);
    };

    print_item(&item);

    let catalog = Catalog::new(kind, library.items(kind).await.into_items());
    let related = catalog.related(&item, 3);
    if !related.is_empty() {
        println!("\nRelated:");
        for other in related {
            println!("  {} ({})", other.title, other.slug);
        }
    }

    Ok(())
}

fn print_item(item: &ContentItem) {
    println!("Title: {}", item.title);
    println!("Slug: {}", item.slug);
    println!("ID: {}", item.id);
    println!("Kind: {}", item.kind);
    if !item.published_at.is_empty() {
        println!("Published: {}", display_date(&item.published_at));
    }
    if item.kind == ContentKind::Post {
        println!("Author: {}", item.author);
        println!("Reading time: {}", reading_time(item.body.as_ref()));
    }
    if item.featured {
        println!("Featured: yes");
    }
    if !item.categories.is_empty() {
        let titles: Vec<_> = item.category_titles().collect();
        println!("Categories: {}", titles.join(", "));
    }
    if !item.tags.is_empty() {
        let titles: Vec<_> = item.tags.iter().map(|t| t.title.as_str()).collect();
        println!("Tags: {}", titles.join(", "));
    }
    if !item.technologies.is_empty() {
        println!("Technologies: {}", item.technologies.join(", "));
    }
    if let Some(url) = &item.live_url {
        println!("Live: {}", url);
    }
    if let Some(url) = &item.source_url {
        println!("Source: {}", url);
    }
    if !item.excerpt.is_empty() {
        println!("\n{}", item.excerpt);
    }
}

/// Show the date part of an ISO-8601 timestamp
fn display_date(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| timestamp.chars().take(10).collect())
}

/// List categories from the store, or the filter bar for one kind
async fn list_categories(kind: Option<ContentKind>) -> Result<()> {
    let library = library()?;

    match kind {
        Some(kind) => {
            let catalog = Catalog::new(kind, library.items(kind).await.into_items());
            for (index, category) in catalog.categories().iter().enumerate() {
                let label = if index == 0 { kind.all_label() } else { category.title.as_str() };
                println!("{}", label);
            }
        }
        None => print_taxonomy("categories", library.categories().await),
    }

    Ok(())
}

async fn list_tags() -> Result<()> {
    let library = library()?;
    print_taxonomy("tags", library.tags().await);
    Ok(())
}

fn print_taxonomy(name: &str, outcome: FetchOutcome<Taxonomy>) {
    if let FetchOutcome::Failed { reason } = &outcome {
        eprintln!("Could not load {}: {}", name, reason);
    }
    if outcome.items().is_empty() {
        println!("No {} found", name);
        return;
    }

    println!("{:<28} {}", "SLUG", "TITLE");
    println!("{}", "-".repeat(60));
    for entry in outcome.items() {
        println!("{:<28} {}", entry.slug, entry.title);
    }
}

/// Normalize raw records read from a file and print them as JSON
fn normalize_file(path: &Path, kind: ContentKind) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;

    let output = match value {
        Value::Array(records) => {
            let items: Vec<ContentItem> = records
                .into_iter()
                .map(|r| normalize_value(kind, r))
                .collect();
            serde_json::to_string_pretty(&items)?
        }
        record => serde_json::to_string_pretty(&normalize_value(kind, record))?,
    };

    println!("{}", output);
    Ok(())
}

/// Show resolved configuration
fn show_config() -> Result<()> {
    let config = config::reload_config()?;

    println!(
        "Config file: {}",
        config
            .config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string())
    );

    match &config.store {
        Some(store) => {
            println!("Store project: {}", store.project_id);
            println!("Store dataset: {}", store.dataset);
            println!("API version: {}", store.api_version);
            println!("CDN: {}", store.use_cdn);
            println!("Token: {}", if store.token.is_some() { "set" } else { "not set" });
        }
        None => println!("Store: not configured"),
    }

    println!("Page size: {}", config.listing.page_size);
    println!("Featured limit: {}", config.listing.featured_limit);
    println!("Fallback table: {}", if config.fallback_enabled { "enabled" } else { "disabled" });

    Ok(())
}
