use async_trait::async_trait;

use crate::domain::models::{GameRecord, PlayerStats};
use crate::errors::FetchError;
use crate::pagination::ArchiveMonth;

/// Provides the current per-category stats of a player
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch_stats(&self, username: &str) -> Result<PlayerStats, FetchError>;
}

/// Provides the games a player finished in one calendar month
///
/// Implementations return an empty list when the archive answers with a
/// non-success status; errors are reserved for requests that could not be
/// completed or decoded.
#[async_trait]
pub trait GameHistorySource: Send + Sync {
    async fn fetch_month(
        &self,
        username: &str,
        month: ArchiveMonth,
    ) -> Result<Vec<GameRecord>, FetchError>;
}
