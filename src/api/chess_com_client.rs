use anyhow::Result;
use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::api::models::{MonthlyArchiveResponse, StatsResponse};
use crate::config::{ChessSettings, HttpSettings};
use crate::domain::{GameHistorySource, GameRecord, PlayerStats, StatsSource};
use crate::errors::FetchError;
use crate::http::ApiClient;
use crate::pagination::ArchiveMonth;

/// chess.com public API client
pub struct ChessComClient {
    client: ApiClient,
    api_base_url: String,
}

impl ChessComClient {
    pub fn new(chess: &ChessSettings, http: &HttpSettings) -> Result<Self> {
        let client = ApiClient::new(http)?;
        Ok(Self {
            client,
            api_base_url: chess.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.json().await.map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    // --- Helper Methods ---

    fn build_stats_url(&self, username: &str) -> String {
        format!("{}/{}/stats", self.api_base_url, username)
    }

    fn build_month_url(&self, username: &str, month: ArchiveMonth) -> String {
        format!(
            "{}/{}/games/{}",
            self.api_base_url,
            username,
            month.path_segment()
        )
    }
}

#[async_trait]
impl StatsSource for ChessComClient {
    async fn fetch_stats(&self, username: &str) -> Result<PlayerStats, FetchError> {
        let url = self.build_stats_url(username);
        debug!("Fetching stats from {}", url);

        let response: StatsResponse = self.get_json(&url).await?;
        Ok(response.into())
    }
}

#[async_trait]
impl GameHistorySource for ChessComClient {
    async fn fetch_month(
        &self,
        username: &str,
        month: ArchiveMonth,
    ) -> Result<Vec<GameRecord>, FetchError> {
        let url = self.build_month_url(username, month);
        debug!("Fetching game archive from {}", url);

        match self.get_json::<MonthlyArchiveResponse>(&url).await {
            Ok(archive) => {
                let games: Vec<GameRecord> = archive.games.into_iter().map(Into::into).collect();
                debug!("Fetched {} games for {} in {}", games.len(), username, month);
                Ok(games)
            }
            Err(FetchError::Status { status, .. }) => {
                warn!("Game archive {} returned status {}", url, status);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}
