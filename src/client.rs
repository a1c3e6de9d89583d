//! HTTP access shared by the enumeration and fetch stages

use crate::config::HttpConfig;
use crate::error::{Error, Result};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

/// Outcome of a GET whose response arrived
#[derive(Debug)]
pub enum Fetched {
    /// 200 OK with a body that parsed as JSON
    Json(Value),

    /// 200 OK but the body is not JSON
    Malformed(serde_json::Error),
}

/// Thin wrapper around one [`reqwest::Client`]
#[derive(Clone, Debug)]
pub struct ApiClient {
    http_client: reqwest::Client,
}

impl ApiClient {
    /// Build the underlying client from `config`
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| Error::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }

    /// GET `url` with `query` appended and parse a 200 body as JSON
    ///
    /// # Errors
    /// - [`Error::Network`] if the request fails or the body cannot be read
    /// - [`Error::HttpStatus`] for any status other than 200
    pub async fn get_json<Q>(&self, url: &str, query: &Q) -> Result<Fetched>
    where
        Q: serde::Serialize + ?Sized,
    {
        let response = self.http_client.get(url).query(query).send().await?;

        let status = response.status();
        debug!("GET {} -> {}", response.url(), status.as_u16());
        if status != StatusCode::OK {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(match serde_json::from_slice(&body) {
            Ok(value) => Fetched::Json(value),
            Err(e) => Fetched::Malformed(e),
        })
    }
}
