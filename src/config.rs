//! Pipeline configuration loaded from an optional YAML file.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! Investir / Les Echos setup: the "conseils actions" section in full followed
//! by every second article of the "actu des valeurs" section.
//!
//! ```yaml
//! summary_ratio: 0.3
//! secondary_stride: 2
//! lexicon_path: /etc/bourse_digest/lexicon.tsv
//! http:
//!   timeout_secs: 10
//! primary:
//!   listing_url: https://investir.lesechos.fr/conseils-boursiers/conseils-actions/
//! ```

use crate::error::ConfigError;
use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};
use url::Url;

const INVESTIR_BASE_URL: &str = "https://investir.lesechos.fr";
const MAX_RETRIES_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Share of sentences kept in each summary, in `(0, 1]`.
    pub summary_ratio: f64,
    /// Keep every n-th article of the secondary source.
    pub secondary_stride: NonZeroUsize,
    /// External lexicon file; the embedded lexicon is used when absent.
    pub lexicon_path: Option<PathBuf>,
    /// External stop-word list; the embedded French list is used when absent.
    pub stopwords_path: Option<PathBuf>,
    pub http: HttpConfig,
    pub primary: SourceConfig,
    pub secondary: SourceConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            summary_ratio: 0.2,
            secondary_stride: NonZeroUsize::MIN.saturating_add(1),
            lexicon_path: None,
            stopwords_path: None,
            http: HttpConfig::default(),
            primary: SourceConfig::investir(
                "conseils-actions",
                "https://investir.lesechos.fr/conseils-boursiers/conseils-actions/",
            ),
            secondary: SourceConfig::investir(
                "actu-des-valeurs",
                "https://investir.lesechos.fr/actu-des-valeurs",
            ),
        }
    }
}

impl PipelineConfig {
    /// Load from `path`, or return the defaults when no path is given.
    #[instrument(level = "info", skip_all, fields(path = ?path))]
    pub async fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            info!("No config file given; using defaults");
            return Ok(Self::default());
        };
        let shown = path.display().to_string();
        let text = fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: shown.clone(),
                source,
            })?;
        let config = Self::from_yaml(&text).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: shown.clone(),
                source,
            },
            other => other,
        })?;
        info!(path = %shown, "Loaded configuration");
        Ok(config)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
                path: "<inline>".to_string(),
                source,
            })?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.summary_ratio > 0.0 && self.summary_ratio <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "summary_ratio must be in (0, 1], got {}",
                self.summary_ratio
            )));
        }
        if self.http.max_retries > MAX_RETRIES_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "http.max_retries must be at most {MAX_RETRIES_LIMIT}, got {}",
                self.http.max_retries
            )));
        }
        for source in [&self.primary, &self.secondary] {
            source.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
    /// Per-request timeout, connection included.
    pub timeout_secs: u64,
    pub max_retries: usize,
    pub base_delay_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
            max_retries: 2,
            base_delay_ms: 500,
        }
    }
}

/// Where and how to scrape one section of the site.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceConfig {
    pub name: String,
    pub listing_url: String,
    /// Relative article links are resolved against this url.
    pub base_url: String,
    /// Elements holding the `<a aria-label=...>` article links.
    pub article_container: String,
    pub date_selector: String,
    /// Removed from the date text ("Publié le ").
    pub date_prefix: String,
    pub content_selector: String,
    /// Phrases deleted from the article text.
    pub strip_phrases: Vec<String>,
    /// Text from this marker onward is dropped.
    pub truncate_at: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::investir("investir", INVESTIR_BASE_URL)
    }
}

impl SourceConfig {
    fn investir(name: &str, listing_url: &str) -> Self {
        Self {
            name: name.to_string(),
            listing_url: listing_url.to_string(),
            base_url: INVESTIR_BASE_URL.to_string(),
            article_container: "div.sc-1vhx99f-0.idRUQR".to_string(),
            date_selector: "span.sc-17ifq26-0.cpeasH".to_string(),
            date_prefix: "Publié le ".to_string(),
            content_selector: "p".to_string(),
            strip_phrases: vec!["Contenu réservé aux abonnés".to_string()],
            truncate_at: Some("Un accès immédiat à l'intégralité des contenus".to_string()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("listing_url", &self.listing_url), ("base_url", &self.base_url)] {
            Url::parse(value).map_err(|e| {
                ConfigError::Invalid(format!("source {}: {field} {value:?}: {e}", self.name))
            })?;
        }
        for (field, css) in [
            ("article_container", self.listing_selector()),
            ("date_selector", self.date_selector.clone()),
            ("content_selector", self.content_selector.clone()),
        ] {
            Selector::parse(&css).map_err(|e| {
                ConfigError::Invalid(format!("source {}: {field} {css:?}: {e}", self.name))
            })?;
        }
        Ok(())
    }

    /// Links to articles inside the listing container.
    pub fn listing_selector(&self) -> String {
        format!("{} a[aria-label][href]", self.article_container)
    }
}
