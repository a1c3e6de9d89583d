//! Configuration types for metadata-pull

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Directory that receives output files when no explicit path is given
pub const DEFAULT_OUTPUT_DIR: &str = "pulled_data";

/// Upstream records API
///
/// `name` only shows up in the default output file name
/// (`pulled_data/<name>_<subfield>.json`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Short source name (default: "b2share")
    #[serde(default = "default_source_name")]
    pub name: String,

    /// Record listing endpoint (default: "https://b2share.eudat.eu/api/records/")
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            name: default_source_name(),
            base_url: default_base_url(),
        }
    }
}

/// How the listing endpoint is walked
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumerationStrategy {
    /// `?page=N&size=S&sort=..` until an empty page or the page cap (default)
    #[default]
    Paged,
    /// One `?q=..&sort=..&size=S` request returning every hit at once
    SingleQuery,
}

/// Link enumeration settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnumerationConfig {
    /// Which enumeration strategy to use (default: paged)
    #[serde(default)]
    pub strategy: EnumerationStrategy,

    /// Records per page for the paged strategy (default: 10)
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Last page requested by the paged strategy (default: 99)
    ///
    /// Pages are numbered from 1, so this is also the number of pages requested
    /// when no empty page is encountered first.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Sort order sent as `sort` (default: "mostrecent")
    #[serde(default = "default_sort")]
    pub sort: String,

    /// Filter sent as `q` by the single-query strategy (default: empty)
    #[serde(default)]
    pub query: String,

    /// `size` sent by the single-query strategy (default: 1000)
    #[serde(default = "default_query_size")]
    pub query_size: u32,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            strategy: EnumerationStrategy::default(),
            page_size: default_page_size(),
            max_pages: default_max_pages(),
            sort: default_sort(),
            query: String::new(),
            query_size: default_query_size(),
        }
    }
}

/// HTTP client settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout (None = client default, i.e. no timeout)
    #[serde(default)]
    pub timeout: Option<Duration>,

    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

/// Main configuration for a harvest run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Upstream API
    #[serde(default)]
    pub source: SourceConfig,

    /// Link enumeration
    #[serde(default)]
    pub enumeration: EnumerationConfig,

    /// HTTP client
    #[serde(default)]
    pub http: HttpConfig,

    /// Explicit output file (None = `pulled_data/<source>_<subfield>.json`)
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Check values that would otherwise fail only once requests start
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.source.base_url).map_err(|e| {
            Error::config(
                "base_url",
                format!("invalid base URL {:?}: {}", self.source.base_url, e),
            )
        })?;

        if self.source.name.is_empty() {
            return Err(Error::config("source", "source name must not be empty"));
        }

        match self.enumeration.strategy {
            EnumerationStrategy::Paged if self.enumeration.page_size == 0 => {
                Err(Error::config("page_size", "page size must be greater than zero"))
            }
            EnumerationStrategy::SingleQuery if self.enumeration.query_size == 0 => Err(
                Error::config("query_size", "query size must be greater than zero"),
            ),
            _ => Ok(()),
        }
    }

    /// Output file for `subfield`: the explicit path, or the default under
    /// [`DEFAULT_OUTPUT_DIR`]
    pub fn output_path(&self, subfield: &str) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(DEFAULT_OUTPUT_DIR)
                .join(format!("{}_{}.json", self.source.name, subfield)),
        }
    }
}

fn default_source_name() -> String {
    "b2share".to_string()
}

fn default_base_url() -> String {
    "https://b2share.eudat.eu/api/records/".to_string()
}

fn default_page_size() -> u32 {
    10
}

fn default_max_pages() -> u32 {
    99
}

fn default_sort() -> String {
    "mostrecent".to_string()
}

fn default_query_size() -> u32 {
    1000
}

fn default_user_agent() -> String {
    concat!("metadata-pull/", env!("CARGO_PKG_VERSION")).to_string()
}
