//! Link enumeration over a record listing endpoint
//!
//! Walks the listing with the configured [`EnumerationStrategy`] and collects the
//! `links.self` URL of every hit, in the order the API returns them. Hits without
//! a self-link are skipped. The first failed page ends enumeration; links already
//! collected are kept.

use crate::client::{ApiClient, Fetched};
use crate::config::{EnumerationConfig, EnumerationStrategy};
use crate::types::Link;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Collects record self-links from a listing endpoint
pub struct LinkEnumerator<'a> {
    client: &'a ApiClient,
    base_url: &'a str,
    config: &'a EnumerationConfig,
}

impl<'a> LinkEnumerator<'a> {
    /// Create an enumerator for `base_url`
    pub fn new(client: &'a ApiClient, base_url: &'a str, config: &'a EnumerationConfig) -> Self {
        Self {
            client,
            base_url,
            config,
        }
    }

    /// Run the configured strategy to completion
    pub async fn collect_links(&self) -> Vec<Link> {
        let links = match self.config.strategy {
            EnumerationStrategy::Paged => self.collect_paged().await,
            EnumerationStrategy::SingleQuery => self.collect_single_query().await,
        };
        info!("Enumerated {} record links from {}", links.len(), self.base_url);
        links
    }

    async fn collect_paged(&self) -> Vec<Link> {
        let mut links = Vec::new();
        let page_size = self.config.page_size.to_string();

        for page in 1..=self.config.max_pages {
            let page_param = page.to_string();
            let query = [
                ("page", page_param.as_str()),
                ("size", page_size.as_str()),
                ("sort", self.config.sort.as_str()),
            ];

            let Some(listing) = self.fetch_listing(&query).await else {
                break;
            };

            if hit_count(&listing) == 0 {
                debug!("Page {} returned no hits, stopping", page);
                break;
            }

            let found = extract_links(&listing);
            debug!("Page {}: {} links", page, found.len());
            links.extend(found);
        }

        links
    }

    async fn collect_single_query(&self) -> Vec<Link> {
        let size = self.config.query_size.to_string();
        let query = [
            ("q", self.config.query.as_str()),
            ("sort", self.config.sort.as_str()),
            ("size", size.as_str()),
        ];

        match self.fetch_listing(&query).await {
            Some(listing) => extract_links(&listing),
            None => Vec::new(),
        }
    }

    /// One listing request; `None` means enumeration must stop
    async fn fetch_listing(&self, query: &[(&str, &str)]) -> Option<Value> {
        match self.client.get_json(self.base_url, query).await {
            Ok(Fetched::Json(listing)) => Some(listing),
            Ok(Fetched::Malformed(e)) => {
                warn!("Error: listing response is not valid JSON: {}", e);
                None
            }
            Err(e) => {
                match e.status() {
                    Some(status) => warn!("Error: Received status code {}", status),
                    None => warn!("Error: listing request failed: {}", e),
                }
                None
            }
        }
    }
}

fn hits(listing: &Value) -> &[Value] {
    listing
        .get("hits")
        .and_then(|h| h.get("hits"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn hit_count(listing: &Value) -> usize {
    hits(listing).len()
}

/// Self-links of every hit in a listing response, skipping hits without one
pub fn extract_links(listing: &Value) -> Vec<Link> {
    hits(listing)
        .iter()
        .filter_map(|hit| {
            let link = hit
                .get("links")
                .and_then(|links| links.get("self"))
                .and_then(Value::as_str);
            if link.is_none() {
                debug!("Skipping hit without links.self");
            }
            link.map(str::to_string)
        })
        .collect()
}
