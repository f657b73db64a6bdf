use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use crate::config::HttpSettings;

/// HTTP client for JSON APIs with a fixed user agent and request timeout
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        let client = Self::build_client(settings)?;
        Ok(Self { client })
    }

    pub async fn get(&self, url: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
    }

    fn build_client(settings: &HttpSettings) -> Result<Client> {
        let mut builder = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs));
        if !settings.use_system_proxy {
            builder = builder.no_proxy();
        }
        builder.build().context("Failed to build HTTP client")
    }
}
