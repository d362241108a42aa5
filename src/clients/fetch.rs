use crate::error::Result;
use reqwest::Client;
use std::path::Path;
use tracing::info;

/// Loads page bodies from a URL or a saved file. One attempt, no retries.
pub struct PageClient {
    client: Client,
}

impl PageClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn get_page(&self, source: &str) -> Result<String> {
        if is_url(source) {
            info!("Fetching {source}");
            let body = self
                .client
                .get(source)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;
            Ok(body)
        } else {
            info!("Reading {source}");
            Ok(tokio::fs::read_to_string(Path::new(source)).await?)
        }
    }
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}
