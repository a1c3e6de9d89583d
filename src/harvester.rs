//! Enumerate → fetch → write, for one subfield

use crate::client::ApiClient;
use crate::config::Config;
use crate::enumerator::LinkEnumerator;
use crate::error::Result;
use crate::fetcher::SubfieldFetcher;
use crate::output::write_results;
use crate::types::{HarvestReport, ResultMap};
use tracing::info;

/// Runs the full harvest pipeline against one records API
pub struct Harvester {
    config: Config,
    client: ApiClient,
}

impl Harvester {
    /// Validate `config` and build the HTTP client
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or the HTTP client cannot
    /// be created
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let client = ApiClient::new(&config.http)?;
        Ok(Self { config, client })
    }

    /// Configuration this harvester runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Enumerate every record and fetch `subfield` from each, without writing
    pub async fn collect(&self, subfield: &str) -> (usize, ResultMap) {
        let links = LinkEnumerator::new(
            &self.client,
            &self.config.source.base_url,
            &self.config.enumeration,
        )
        .collect_links()
        .await;

        let results = SubfieldFetcher::new(&self.client, subfield)
            .fetch_all(&links)
            .await;

        (links.len(), results)
    }

    /// Harvest `subfield` and write the result map to the output path
    ///
    /// An enumeration that finds nothing still writes an empty object.
    ///
    /// # Errors
    /// Returns error only if the output file cannot be written
    pub async fn run(&self, subfield: &str) -> Result<HarvestReport> {
        info!(
            "Harvesting metadata.{} from {}",
            subfield, self.config.source.base_url
        );

        let (links_found, results) = self.collect(subfield).await;

        let output_path = self.config.output_path(subfield);
        write_results(&output_path, &results)?;
        info!(
            "Wrote {} entries to {}",
            results.len(),
            output_path.display()
        );

        Ok(HarvestReport {
            subfield: subfield.to_string(),
            output_path,
            links_found,
            entries_written: results.len(),
        })
    }
}
