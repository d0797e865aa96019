//! Configuration for the content store and listings.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (FOLIO_PROJECT_ID, FOLIO_DATASET,
//!    FOLIO_API_VERSION, FOLIO_TOKEN, FOLIO_USE_CDN)
//! 2. Config file (.folio/config.yaml)
//! 3. Defaults
//!
//! Config file discovery:
//! - Searches current directory and parents for .folio/config.yaml
//! - Falls back to ~/.folio/config.yaml
//!
//! The store counts as configured only when a project id resolves.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::adapters::StoreConfig;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const DEFAULT_DATASET: &str = "production";
const DEFAULT_API_VERSION: &str = "2024-01-01";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub listing: Option<ListingSection>,
    #[serde(default)]
    pub fallback: Option<FallbackSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreSection {
    pub project_id: Option<String>,
    pub dataset: Option<String>,
    pub api_version: Option<String>,
    pub token: Option<String>,
    pub use_cdn: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingSection {
    pub page_size: Option<usize>,
    pub featured_limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FallbackSection {
    pub enabled: Option<bool>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Content store connection, `None` when unconfigured
    pub store: Option<StoreConfig>,
    /// Listing settings
    pub listing: ListingSettings,
    /// Whether the static fallback table is used
    pub fallback_enabled: bool,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSettings {
    /// Items revealed per "load more" step
    pub page_size: usize,
    /// Featured items shown on the landing page
    pub featured_limit: usize,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            page_size: 6,
            featured_limit: 3,
        }
    }
}

/// Environment overrides, read once so resolution itself stays testable
#[derive(Debug, Clone, Default)]
struct EnvOverrides {
    project_id: Option<String>,
    dataset: Option<String>,
    api_version: Option<String>,
    token: Option<String>,
    use_cdn: Option<bool>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        Self {
            project_id: var("FOLIO_PROJECT_ID"),
            dataset: var("FOLIO_DATASET"),
            api_version: var("FOLIO_API_VERSION"),
            token: var("FOLIO_TOKEN"),
            use_cdn: var("FOLIO_USE_CDN").map(|v| parse_flag(&v)),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Find config file by searching current directory and parents, then home
fn find_config_file() -> Option<PathBuf> {
    if let Ok(mut current) = std::env::current_dir() {
        loop {
            let config_path = current.join(".folio").join("config.yaml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }
    }

    dirs::home_dir()
        .map(|home| home.join(".folio").join("config.yaml"))
        .filter(|path| path.exists())
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merge file settings and environment overrides
fn resolve(
    file: Option<&ConfigFile>,
    env: EnvOverrides,
    config_file: Option<PathBuf>,
) -> ResolvedConfig {
    let section = file.map(|f| f.store.clone()).unwrap_or_default();

    let store = env
        .project_id
        .or(section.project_id)
        .filter(|id| !id.trim().is_empty())
        .map(|project_id| StoreConfig {
            project_id,
            dataset: env
                .dataset
                .or(section.dataset)
                .unwrap_or_else(|| DEFAULT_DATASET.to_string()),
            api_version: env
                .api_version
                .or(section.api_version)
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            token: env.token.or(section.token),
            use_cdn: env.use_cdn.or(section.use_cdn).unwrap_or(true),
        });

    let defaults = ListingSettings::default();
    let listing = file.and_then(|f| f.listing.as_ref());
    let listing = ListingSettings {
        page_size: listing
            .and_then(|l| l.page_size)
            .filter(|n| *n > 0)
            .unwrap_or(defaults.page_size),
        featured_limit: listing
            .and_then(|l| l.featured_limit)
            .unwrap_or(defaults.featured_limit),
    };

    let fallback_enabled = file
        .and_then(|f| f.fallback.as_ref())
        .and_then(|f| f.enabled)
        .unwrap_or(true);

    ResolvedConfig {
        store,
        listing,
        fallback_enabled,
        config_file,
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();

    let file = match &config_file {
        Some(path) => Some(load_config_file(path)?),
        None => None,
    };

    Ok(resolve(file.as_ref(), EnvOverrides::from_env(), config_file))
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(body: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let folio_dir = temp.path().join(".folio");
        std::fs::create_dir_all(&folio_dir).unwrap();

        let config_path = folio_dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "{}", body).unwrap();

        (temp, config_path)
    }

    #[test]
    fn test_config_file_parsing() {
        let (_temp, path) = write_config(
            r#"
version: "1.0"
store:
  project_id: abc123
  dataset: staging
  use_cdn: false
listing:
  page_size: 9
fallback:
  enabled: false
"#,
        );

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.store.project_id.as_deref(), Some("abc123"));
        assert_eq!(config.store.dataset.as_deref(), Some("staging"));
        assert_eq!(config.listing.as_ref().unwrap().page_size, Some(9));

        let resolved = resolve(Some(&config), EnvOverrides::default(), Some(path));
        let store = resolved.store.unwrap();
        assert_eq!(store.dataset, "staging");
        assert_eq!(store.api_version, DEFAULT_API_VERSION);
        assert!(!store.use_cdn);
        assert_eq!(resolved.listing.page_size, 9);
        assert_eq!(resolved.listing.featured_limit, 3);
        assert!(!resolved.fallback_enabled);
    }

    #[test]
    fn test_unconfigured_without_project_id() {
        let resolved = resolve(None, EnvOverrides::default(), None);
        assert!(resolved.store.is_none());
        assert!(resolved.fallback_enabled);
        assert_eq!(resolved.listing, ListingSettings::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let (_temp, path) = write_config(
            r#"
version: "1.0"
store:
  project_id: from-file
  dataset: staging
"#,
        );
        let file = load_config_file(&path).unwrap();

        let env = EnvOverrides {
            project_id: Some("from-env".to_string()),
            token: Some("secret".to_string()),
            use_cdn: Some(false),
            ..Default::default()
        };

        let store = resolve(Some(&file), env, None).store.unwrap();
        assert_eq!(store.project_id, "from-env");
        assert_eq!(store.dataset, "staging");
        assert_eq!(store.token.as_deref(), Some("secret"));
        assert!(!store.use_cdn);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" YES "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("0"));
    }
}
