//! Headless content-store client.
//!
//! Issues GROQ queries against the store's HTTP query endpoint:
//! `GET https://<project>.api.sanity.io/v<version>/data/query/<dataset>?query=...`
//! (`apicdn` instead of `api` when the CDN is enabled).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::library::content::{ContentKind, TaxonomyKind};

use super::{ContentSource, FetchError};

/// Fields requested for posts
const POST_PROJECTION: &str = r#"{
  _id, _createdAt, title, slug, excerpt, body, publishedAt, mainImage, featured,
  "author": author->{name},
  "categories": categories[]->{_id, title, slug},
  "tags": tags[]->{_id, title, slug}
}"#;

/// Fields requested for projects
const PROJECT_PROJECTION: &str = r#"{
  _id, _createdAt, title, slug, excerpt, description, body, publishedAt, mainImage, featured,
  technologies, liveUrl, githubUrl,
  "categories": categories[]->{_id, title, slug},
  "tags": tags[]->{_id, title, slug}
}"#;

const RECENCY_ORDER: &str = "order(coalesce(publishedAt, _createdAt) desc)";

/// Connection settings for the content store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
    pub use_cdn: bool,
}

/// Content-store HTTP client
pub struct StoreClient {
    config: StoreConfig,
    client: reqwest::Client,
}

/// Envelope around every query response
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Value,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    description: Option<String>,
}

impl StoreClient {
    /// Create a new client
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Build the query endpoint URL
    fn query_url(&self) -> String {
        let host = if self.config.use_cdn { "apicdn" } else { "api" };
        let version = self.config.api_version.trim_start_matches('v');
        format!(
            "https://{}.{}.sanity.io/v{}/data/query/{}",
            self.config.project_id, host, version, self.config.dataset
        )
    }

    /// Run a GROQ query and return its `result`
    async fn query(&self, groq: &str, params: &[(&str, &str)]) -> Result<Value, FetchError> {
        let url = self.query_url();
        debug!(%url, "Querying content store");

        let mut pairs: Vec<(String, String)> = vec![("query".to_string(), groq.to_string())];
        for (name, value) in params {
            pairs.push((format!("${}", name), serde_json::to_string(value)?));
        }

        let mut request = self.client.get(&url).query(&pairs);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(match parse_envelope(&body) {
                Err(FetchError::Api(description)) => FetchError::Api(description),
                _ => FetchError::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        parse_envelope(&body)
    }
}

/// Extract `result` from a response body, surfacing query errors
fn parse_envelope(body: &str) -> Result<Value, FetchError> {
    let response: QueryResponse = serde_json::from_str(body)?;

    if let Some(error) = response.error {
        return Err(FetchError::Api(
            error.description.unwrap_or_else(|| "unknown error".to_string()),
        ));
    }

    Ok(response.result)
}

/// Interpret a query result as a list; `null` reads as empty
fn into_list(result: Value) -> Result<Vec<Value>, FetchError> {
    match result {
        Value::Null => Ok(Vec::new()),
        other => Ok(serde_json::from_value(other)?),
    }
}

fn projection(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Post => POST_PROJECTION,
        ContentKind::Project => PROJECT_PROJECTION,
    }
}

/// All items of a kind, most recent first
pub fn all_query(kind: ContentKind) -> String {
    format!(
        "*[_type == \"{}\"] | {} {}",
        kind.document_type(),
        RECENCY_ORDER,
        projection(kind)
    )
}

/// Featured items of a kind, most recent first, at most `limit`
pub fn featured_query(kind: ContentKind, limit: usize) -> String {
    format!(
        "*[_type == \"{}\" && featured == true] | {} [0...{}] {}",
        kind.document_type(),
        RECENCY_ORDER,
        limit,
        projection(kind)
    )
}

/// One item by slug; expects a `$slug` parameter
pub fn slug_query(kind: ContentKind) -> String {
    format!(
        "*[_type == \"{}\" && slug.current == $slug][0] {}",
        kind.document_type(),
        projection(kind)
    )
}

/// All categories or tags ordered by title
pub fn taxonomy_query(taxonomy: TaxonomyKind) -> String {
    format!(
        "*[_type == \"{}\"] | order(title asc) {{_id, title, slug}}",
        taxonomy.document_type()
    )
}

#[async_trait]
impl ContentSource for StoreClient {
    fn name(&self) -> &str {
        "content-store"
    }

    async fn fetch_all(&self, kind: ContentKind) -> Result<Vec<Value>, FetchError> {
        into_list(self.query(&all_query(kind), &[]).await?)
    }

    async fn fetch_featured(
        &self,
        kind: ContentKind,
        limit: usize,
    ) -> Result<Vec<Value>, FetchError> {
        into_list(self.query(&featured_query(kind, limit), &[]).await?)
    }

    async fn fetch_by_slug(
        &self,
        kind: ContentKind,
        slug: &str,
    ) -> Result<Option<Value>, FetchError> {
        let result = self.query(&slug_query(kind), &[("slug", slug)]).await?;
        Ok(Some(result).filter(|v| !v.is_null()))
    }

    async fn fetch_taxonomy(&self, taxonomy: TaxonomyKind) -> Result<Vec<Value>, FetchError> {
        into_list(self.query(&taxonomy_query(taxonomy), &[]).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(use_cdn: bool) -> StoreConfig {
        StoreConfig {
            project_id: "abc123".to_string(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            token: None,
            use_cdn,
        }
    }

    #[test]
    fn test_query_url() {
        let client = StoreClient::new(config(false));
        assert_eq!(
            client.query_url(),
            "https://abc123.api.sanity.io/v2024-01-01/data/query/production"
        );

        let client = StoreClient::new(config(true));
        assert_eq!(
            client.query_url(),
            "https://abc123.apicdn.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn test_queries() {
        let q = all_query(ContentKind::Post);
        assert!(q.starts_with(
            "*[_type == \"post\"] | order(coalesce(publishedAt, _createdAt) desc)"
        ));
        assert!(q.contains("\"categories\": categories[]->{_id, title, slug}"));

        let q = featured_query(ContentKind::Project, 3);
        assert!(q.contains("featured == true"));
        assert!(q.contains("[0...3]"));
        assert!(q.contains("githubUrl"));

        assert!(slug_query(ContentKind::Post).contains("slug.current == $slug][0]"));
        assert_eq!(
            taxonomy_query(TaxonomyKind::Tag),
            "*[_type == \"tag\"] | order(title asc) {_id, title, slug}"
        );
    }

    #[test]
    fn test_parse_envelope() {
        let value =
            parse_envelope(r#"{"ms": 4, "query": "*", "result": [{"_id": "a"}]}"#).unwrap();
        assert_eq!(into_list(value).unwrap().len(), 1);

        let value = parse_envelope(r#"{"result": null}"#).unwrap();
        assert!(into_list(value).unwrap().is_empty());

        let err = parse_envelope(
            r#"{"error": {"description": "param $slug referenced, but not provided"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, FetchError::Api(msg) if msg.contains("$slug")));

        assert!(matches!(parse_envelope("<html>"), Err(FetchError::Decode(_))));
    }
}
