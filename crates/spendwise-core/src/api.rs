//! HTTP client boundary
//!
//! One configured client for the whole app: base URL from settings, 30 second
//! timeout, JSON content type. The startup gate's warm-up ping lives here.

use crate::settings::Settings;
use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(settings: &Settings) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: settings.api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resource warm-up used by the startup gate. The body is irrelevant;
    /// only reachability matters, and the caller swallows failures.
    pub async fn warm_up(&self) -> Result<()> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(anyhow::anyhow!(
                "warm-up ping returned {}",
                response.status()
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let mut settings = Settings::default();
        settings.api_url = "http://localhost:3000/api/".to_string();
        let api = ApiClient::new(&settings);
        assert_eq!(api.base_url(), "http://localhost:3000/api");
    }
}
