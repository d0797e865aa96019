//! Static fallback content.
//!
//! Rows in the legacy flat shape (numeric id, one `category` string) used when
//! the content store is unreachable or unconfigured. The table is immutable
//! and handed to [`crate::core::ContentLibrary`] explicitly.

use serde::Serialize;
use serde_json::Value;

use super::content::ContentKind;

/// A legacy project row
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyProject {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub technologies: &'static [&'static str],
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
    pub date: &'static str,
}

/// A legacy post row
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPost {
    pub id: u32,
    pub title: &'static str,
    pub slug: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub featured: bool,
    pub date: &'static str,
}

/// Immutable fallback rows per content kind
#[derive(Debug, Clone, Copy)]
pub struct FallbackTable {
    pub posts: &'static [LegacyPost],
    pub projects: &'static [LegacyProject],
}

impl FallbackTable {
    /// A table with no rows
    pub const EMPTY: FallbackTable = FallbackTable {
        posts: &[],
        projects: &[],
    };

    /// Rows of a kind as raw JSON records
    pub fn records(&self, kind: ContentKind) -> Vec<Value> {
        match kind {
            ContentKind::Post => to_records(self.posts),
            ContentKind::Project => to_records(self.projects),
        }
    }

    /// Whether the table has rows of a kind
    pub fn has(&self, kind: ContentKind) -> bool {
        match kind {
            ContentKind::Post => !self.posts.is_empty(),
            ContentKind::Project => !self.projects.is_empty(),
        }
    }
}

fn to_records<T: Serialize>(rows: &[T]) -> Vec<Value> {
    rows.iter()
        .filter_map(|row| serde_json::to_value(row).ok())
        .collect()
}

/// Built-in portfolio rows
pub static DEFAULT_FALLBACK: FallbackTable = FallbackTable {
    posts: &[
        LegacyPost {
            id: 1,
            title: "Automating Invoice Intake with an API-First Pipeline",
            slug: "automating-invoice-intake",
            excerpt: "How a small queue and a few API calls replaced hours of manual data entry.",
            category: "Automation",
            featured: true,
            date: "2024-06-02",
        },
        LegacyPost {
            id: 2,
            title: "Notes on Headless Content for Small Sites",
            slug: "headless-content-small-sites",
            excerpt: "What a hosted content store buys a personal site, and what it costs.",
            category: "Web Development",
            featured: false,
            date: "2024-03-18",
        },
    ],
    projects: &[
        LegacyProject {
            id: 1,
            title: "Invoice Pipeline",
            description: "Automated invoice intake that extracts line items and posts them to accounting through its API.",
            category: "automation",
            technologies: &["Python", "FastAPI", "PostgreSQL"],
            featured: true,
            live_url: None,
            github_url: Some("https://github.com/example/invoice-pipeline"),
            image: Some("/images/projects/invoice-pipeline.png"),
            date: "2024-05-12",
        },
        LegacyProject {
            id: 2,
            title: "Storefront Redesign",
            description: "Rebuilt a small retail storefront with server rendering and a headless product catalog.",
            category: "web development",
            technologies: &["Next.js", "TypeScript", "Tailwind CSS"],
            featured: true,
            live_url: Some("https://shop.example.com"),
            github_url: None,
            image: Some("/images/projects/storefront.png"),
            date: "2024-02-03",
        },
        LegacyProject {
            id: 3,
            title: "Support Ticket Triage",
            description: "Classifies incoming support tickets and routes them to the right queue.",
            category: "ai",
            technologies: &["Python", "OpenAI API", "Redis"],
            featured: false,
            live_url: None,
            github_url: Some("https://github.com/example/ticket-triage"),
            image: None,
            date: "2023-11-20",
        },
        LegacyProject {
            id: 4,
            title: "Report Scheduler",
            description: "Builds weekly spreadsheet reports from CRM exports and mails them out.",
            category: "automation",
            technologies: &["Node.js", "Google Sheets API"],
            featured: false,
            live_url: None,
            github_url: None,
            image: None,
            date: "2023-08-14",
        },
    ],
};
