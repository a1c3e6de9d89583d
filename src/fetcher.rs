//! Per-record subfield fetching

use crate::client::{ApiClient, Fetched};
use crate::types::{Link, ResultMap};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Fetches `metadata.<subfield>` from each record link, one request at a time
pub struct SubfieldFetcher<'a> {
    client: &'a ApiClient,
    subfield: &'a str,
}

impl<'a> SubfieldFetcher<'a> {
    /// Create a fetcher for `subfield`
    pub fn new(client: &'a ApiClient, subfield: &'a str) -> Self {
        Self { client, subfield }
    }

    /// Fetch every link in order and build the result map
    ///
    /// Links that fail (transport error or non-200 status) are left out of the
    /// map. A record that is not JSON, or lacks the subfield, maps to `null`.
    pub async fn fetch_all(&self, links: &[Link]) -> ResultMap {
        let mut results = ResultMap::with_capacity(links.len());

        for link in links {
            match self.client.get_json(link, &[] as &[(&str, &str)]).await {
                Ok(Fetched::Json(record)) => {
                    let value = extract_subfield(&record, self.subfield);
                    if value.is_null() {
                        debug!("{} has no metadata.{}", link, self.subfield);
                    }
                    results.insert(link.clone(), value);
                }
                Ok(Fetched::Malformed(e)) => {
                    warn!("Record {} is not valid JSON, recording null: {}", link, e);
                    results.insert(link.clone(), Value::Null);
                }
                Err(e) => match e.status() {
                    Some(status) => warn!("Error fetching {}: Status code {}", link, status),
                    None => warn!("Error fetching {}: {}", link, e),
                },
            }
        }

        info!(
            "Fetched {} of {} records for subfield {:?}",
            results.len(),
            links.len(),
            self.subfield
        );
        results
    }
}

/// `record.metadata[subfield]`, or `null` when either level is missing
pub fn extract_subfield(record: &Value, subfield: &str) -> Value {
    record
        .get("metadata")
        .and_then(Value::as_object)
        .and_then(|metadata| metadata.get(subfield))
        .cloned()
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpConfig;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_extract_subfield_any_json_type() {
        let record = json!({
            "metadata": {
                "titles": [{"title": "Soil moisture"}],
                "open_access": true,
                "version": "2",
                "community": {"id": "e9b9792e"},
                "embargo_date": null
            }
        });

        assert_eq!(
            extract_subfield(&record, "titles"),
            json!([{"title": "Soil moisture"}])
        );
        assert_eq!(extract_subfield(&record, "open_access"), json!(true));
        assert_eq!(extract_subfield(&record, "version"), json!("2"));
        assert_eq!(extract_subfield(&record, "community"), json!({"id": "e9b9792e"}));
        assert_eq!(extract_subfield(&record, "embargo_date"), Value::Null);
    }

    #[test]
    fn test_extract_subfield_missing_is_null() {
        assert_eq!(extract_subfield(&json!({"metadata": {}}), "title"), Value::Null);
        assert_eq!(extract_subfield(&json!({}), "title"), Value::Null);
        assert_eq!(extract_subfield(&json!({"metadata": "flat"}), "title"), Value::Null);
        assert_eq!(extract_subfield(&json!([1, 2]), "title"), Value::Null);
    }

    #[tokio::test]
    async fn test_fetch_all_omits_failed_links_and_keeps_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/records/b"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"metadata": {"title": "Bravo"}})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/records/missing"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/records/a"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"metadata": {"other": 1}})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let links: Vec<Link> = ["b", "missing", "a"]
            .iter()
            .map(|id| format!("{}/records/{}", mock_server.uri(), id))
            .collect();

        let client = ApiClient::new(&HttpConfig::default()).unwrap();
        let results = SubfieldFetcher::new(&client, "title").fetch_all(&links).await;

        let keys: Vec<&String> = results.keys().collect();
        assert_eq!(keys, vec![&links[0], &links[2]]);
        assert_eq!(results[&links[0]], json!("Bravo"));
        assert_eq!(results[&links[2]], Value::Null);
    }

    #[tokio::test]
    async fn test_fetch_all_malformed_record_is_null() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/records/broken"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"metadata\": "))
            .mount(&mock_server)
            .await;

        let link = format!("{}/records/broken", mock_server.uri());
        let client = ApiClient::new(&HttpConfig::default()).unwrap();
        let results = SubfieldFetcher::new(&client, "title")
            .fetch_all(std::slice::from_ref(&link))
            .await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[&link], Value::Null);
    }

    #[tokio::test]
    async fn test_fetch_all_unreachable_link_is_skipped() {
        // Nothing listens on port 1
        let dead_uri = "http://127.0.0.1:1";
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/records/ok"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"metadata": {"title": "OK"}})),
            )
            .mount(&mock_server)
            .await;

        let links = vec![
            format!("{}/records/dead", dead_uri),
            format!("{}/records/ok", mock_server.uri()),
        ];
        let client = ApiClient::new(&HttpConfig::default()).unwrap();
        let results = SubfieldFetcher::new(&client, "title").fetch_all(&links).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[&links[1]], json!("OK"));
    }

    #[tokio::test]
    async fn test_fetch_all_empty_links() {
        let client = ApiClient::new(&HttpConfig::default()).unwrap();
        let results = SubfieldFetcher::new(&client, "title").fetch_all(&[]).await;
        assert!(results.is_empty());
    }
}
