use crate::config::{Config, EnumerationStrategy};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Harvest one metadata subfield from every record of a records API.
///
/// Writes a JSON object mapping each record's self-link to the value of
/// `metadata.<SUBFIELD>` (null when the record has no such field).
#[derive(Parser, Debug)]
#[command(name = "metadata-pull", version)]
pub struct CliArgs {
    /// Metadata subfield to harvest (e.g. "title")
    pub subfield: String,

    /// Output file (default: pulled_data/<source>_<subfield>.json)
    pub output: Option<PathBuf>,

    /// Record listing endpoint
    #[arg(long)]
    pub base_url: Option<String>,

    /// Source name used in the default output file name
    #[arg(long)]
    pub source: Option<String>,

    /// How the listing endpoint is walked
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Records per page (paged strategy)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Last page to request (paged strategy)
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Sort order sent to the listing endpoint
    #[arg(long)]
    pub sort: Option<String>,

    /// Search filter sent as `q` (single-query strategy)
    #[arg(long)]
    pub query: Option<String>,

    /// Number of hits requested (single-query strategy)
    #[arg(long)]
    pub query_size: Option<u32>,

    /// Per-request timeout in seconds (default: none)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// User-Agent header value
    #[arg(long)]
    pub user_agent: Option<String>,
}

/// Command-line spelling of [`EnumerationStrategy`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Page through results until an empty page
    Paged,
    /// One large query
    SingleQuery,
}

impl From<StrategyArg> for EnumerationStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Paged => EnumerationStrategy::Paged,
            StrategyArg::SingleQuery => EnumerationStrategy::SingleQuery,
        }
    }
}

impl CliArgs {
    /// Default configuration with every given flag applied on top
    pub fn to_config(&self) -> Config {
        let mut config = Config::default();

        if let Some(base_url) = &self.base_url {
            config.source.base_url = base_url.clone();
        }
        if let Some(source) = &self.source {
            config.source.name = source.clone();
        }
        if let Some(strategy) = self.strategy {
            config.enumeration.strategy = strategy.into();
        }
        if let Some(page_size) = self.page_size {
            config.enumeration.page_size = page_size;
        }
        if let Some(max_pages) = self.max_pages {
            config.enumeration.max_pages = max_pages;
        }
        if let Some(sort) = &self.sort {
            config.enumeration.sort = sort.clone();
        }
        if let Some(query) = &self.query {
            config.enumeration.query = query.clone();
        }
        if let Some(query_size) = self.query_size {
            config.enumeration.query_size = query_size;
        }
        if let Some(secs) = self.timeout_secs {
            config.http.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(user_agent) = &self.user_agent {
            config.http.user_agent = user_agent.clone();
        }
        config.output = self.output.clone();

        config
    }
}
