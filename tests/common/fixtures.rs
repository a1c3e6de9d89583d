//! Mock records API fixtures

use metadata_pull::Config;
use serde_json::{Value, json};
use std::path::PathBuf;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Listing path served by the mock records API
pub const LISTING_PATH: &str = "/api/records/";

/// Self-link of record `id` on `server`
pub fn record_link(server: &MockServer, id: &str) -> String {
    format!("{}/api/records/{}", server.uri(), id)
}

/// Listing page body whose hits point at `links`
pub fn listing_page(links: &[String]) -> Value {
    let hits: Vec<Value> = links
        .iter()
        .map(|link| json!({"links": {"self": link}, "metadata": {}}))
        .collect();
    json!({"hits": {"hits": hits, "total": hits.len()}, "links": {}})
}

/// Mount listing page `page` (paged strategy) returning `links`
pub async fn mount_page(server: &MockServer, page: u32, links: &[String]) {
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_page(links)))
        .mount(server)
        .await;
}

/// Mount record `id` with the given `metadata` object
pub async fn mount_record(server: &MockServer, id: &str, metadata: Value) {
    Mock::given(method("GET"))
        .and(path(format!("{}{}", LISTING_PATH, id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": id,
            "links": {"self": record_link(server, id)},
            "metadata": metadata,
        })))
        .mount(server)
        .await;
}

/// Mount record `id` answering with a bare `status`
pub async fn mount_record_status(server: &MockServer, id: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("{}{}", LISTING_PATH, id)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Config pointing at `server` and writing to `output`
pub fn config_for(server: &MockServer, output: PathBuf) -> Config {
    let mut config = Config::default();
    config.source.base_url = format!("{}{}", server.uri(), LISTING_PATH);
    config.output = Some(output);
    config
}
