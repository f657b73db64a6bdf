use chrono::{DateTime, Duration, Utc};
use log::{debug, error, info, warn};

use crate::domain::{
    Category, GameHistorySource, GameRecord, PlayerStats, RatingReport, StatsSource,
};
use crate::errors::FetchError;
use crate::pagination::{months_to_fetch, ArchiveMonth};
use crate::rating::delta::category_delta;
use crate::rating::history::find_rating_at;

/// Width of the window the rating change is measured over
pub const LOOKBACK_DAYS: i64 = 30;

/// Derives each category's rating change over the last [`LOOKBACK_DAYS`]
///
/// The stats fetch is fatal: when it fails the whole report is empty. Archive
/// months are best effort and a failed month contributes no games.
pub struct RatingHistoryResolver<'a> {
    stats: &'a dyn StatsSource,
    history: &'a dyn GameHistorySource,
    username: &'a str,
}

impl<'a> RatingHistoryResolver<'a> {
    pub fn new(
        stats: &'a dyn StatsSource,
        history: &'a dyn GameHistorySource,
        username: &'a str,
    ) -> Self {
        Self {
            stats,
            history,
            username,
        }
    }

    pub async fn resolve(&self) -> RatingReport {
        self.resolve_at(Utc::now()).await
    }

    /// Never fails; errors are logged and degrade to an empty report
    pub async fn resolve_at(&self, now: DateTime<Utc>) -> RatingReport {
        match self.try_resolve(now).await {
            Ok(report) => report,
            Err(e) => {
                error!(
                    "Failed to fetch chess data for {}: {:#}",
                    self.username,
                    anyhow::Error::from(e)
                );
                RatingReport::default()
            }
        }
    }

    async fn try_resolve(&self, now: DateTime<Utc>) -> Result<RatingReport, FetchError> {
        let stats = self.stats.fetch_stats(self.username).await?;
        let cutoff = cutoff_timestamp(now);
        let games = self.fetch_candidate_games(now).await;
        debug!(
            "Resolving {} against {} archived games up to {}",
            self.username,
            games.len(),
            cutoff
        );

        let report = self.build_report(&stats, &games, cutoff);
        info!("Resolved chess ratings for {}: {:?}", self.username, report);
        Ok(report)
    }

    /// Previous month's games followed by the current month's
    async fn fetch_candidate_games(&self, now: DateTime<Utc>) -> Vec<GameRecord> {
        let (previous, current) = months_to_fetch(&now);

        let (previous_games, current_games) = tokio::join!(
            self.fetch_month_or_empty(previous),
            self.fetch_month_or_empty(current),
        );

        let mut games = previous_games;
        games.extend(current_games);
        games
    }

    async fn fetch_month_or_empty(&self, month: ArchiveMonth) -> Vec<GameRecord> {
        match self.history.fetch_month(self.username, month).await {
            Ok(games) => games,
            Err(e) => {
                warn!(
                    "Ignoring game archive {} for {}: {:#}",
                    month,
                    self.username,
                    anyhow::Error::from(e)
                );
                Vec::new()
            }
        }
    }

    fn build_report(&self, stats: &PlayerStats, games: &[GameRecord], cutoff: i64) -> RatingReport {
        let mut report = RatingReport::default();

        for category in Category::ALL {
            let delta = stats.current_rating(category).map(|current| {
                let historical = find_rating_at(games, category, cutoff, self.username);
                category_delta(current, historical)
            });
            report.set(category, delta);
        }

        report
    }
}

/// Unix seconds [`LOOKBACK_DAYS`] before `now`
pub fn cutoff_timestamp(now: DateTime<Utc>) -> i64 {
    (now - Duration::days(LOOKBACK_DAYS)).timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryDelta, CategoryStats, PlayerSide, RatingSnapshot};
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::collections::HashMap;
    use std::sync::Mutex;

    const ME: &str = "kevin_on";
    const DAY: i64 = 24 * 60 * 60;

    struct FakeStats {
        stats: Option<PlayerStats>,
    }

    #[async_trait]
    impl StatsSource for FakeStats {
        async fn fetch_stats(&self, _username: &str) -> Result<PlayerStats, FetchError> {
            self.stats.clone().ok_or_else(|| FetchError::Status {
                url: "stats".to_string(),
                status: 503,
            })
        }
    }

    #[derive(Default)]
    struct FakeHistory {
        months: HashMap<ArchiveMonth, Vec<GameRecord>>,
        failing: Vec<ArchiveMonth>,
        requested: Mutex<Vec<ArchiveMonth>>,
    }

    impl FakeHistory {
        fn with_month(mut self, month: ArchiveMonth, games: Vec<GameRecord>) -> Self {
            self.months.insert(month, games);
            self
        }

        fn failing(mut self, month: ArchiveMonth) -> Self {
            self.failing.push(month);
            self
        }

        fn requested(&self) -> Vec<ArchiveMonth> {
            let mut months = self.requested.lock().unwrap().clone();
            months.sort();
            months
        }
    }

    #[async_trait]
    impl GameHistorySource for FakeHistory {
        async fn fetch_month(
            &self,
            _username: &str,
            month: ArchiveMonth,
        ) -> Result<Vec<GameRecord>, FetchError> {
            self.requested.lock().unwrap().push(month);
            if self.failing.contains(&month) {
                return Err(FetchError::Status {
                    url: month.path_segment(),
                    status: 500,
                });
            }
            Ok(self.months.get(&month).cloned().unwrap_or_default())
        }
    }

    fn snapshot(rating: i32) -> CategoryStats {
        CategoryStats {
            last: RatingSnapshot {
                rating,
                as_of: 1_710_000_000,
            },
            best: None,
            record: None,
        }
    }

    fn stats(rapid: Option<i32>, blitz: Option<i32>) -> FakeStats {
        let mut stats = PlayerStats::new();
        if let Some(rating) = rapid {
            stats.insert(Category::Rapid, snapshot(rating));
        }
        if let Some(rating) = blitz {
            stats.insert(Category::Blitz, snapshot(rating));
        }
        FakeStats { stats: Some(stats) }
    }

    fn game(end_time: i64, category: &str, white: (&str, i32), black: (&str, i32)) -> GameRecord {
        GameRecord {
            end_time,
            category: category.to_string(),
            white: PlayerSide {
                username: white.0.to_string(),
                rating: white.1,
            },
            black: PlayerSide {
                username: black.0.to_string(),
                rating: black.1,
            },
        }
    }

    fn mid_march() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    const FEB: ArchiveMonth = ArchiveMonth { year: 2024, month: 2 };
    const MAR: ArchiveMonth = ArchiveMonth { year: 2024, month: 3 };

    #[tokio::test]
    async fn test_no_history_reports_current_rating_with_zero_change() {
        let stats = stats(Some(1500), Some(1200));
        let history = FakeHistory::default();

        let report = RatingHistoryResolver::new(&stats, &history, ME)
            .resolve_at(mid_march())
            .await;

        assert_eq!(
            report.rapid,
            Some(CategoryDelta {
                current: 1500,
                change: 0
            })
        );
        assert_eq!(
            report.blitz,
            Some(CategoryDelta {
                current: 1200,
                change: 0
            })
        );
    }

    #[tokio::test]
    async fn test_black_side_game_one_day_before_cutoff() {
        let now = mid_march();
        let cutoff = cutoff_timestamp(now);
        let stats = stats(Some(1500), None);
        let history = FakeHistory::default().with_month(
            FEB,
            vec![game(cutoff - DAY, "rapid", ("opponent", 1490), (ME, 1450))],
        );

        let report = RatingHistoryResolver::new(&stats, &history, ME).resolve_at(now).await;

        assert_eq!(
            report.rapid,
            Some(CategoryDelta {
                current: 1500,
                change: 50
            })
        );
        assert_eq!(report.blitz, None);
    }

    #[tokio::test]
    async fn test_white_side_rating_drives_change() {
        let now = mid_march();
        let cutoff = cutoff_timestamp(now);
        let stats = stats(None, Some(1180));
        let history = FakeHistory::default().with_month(
            FEB,
            vec![game(cutoff - 3 * DAY, "blitz", ("KEVIN_ON", 1210), ("opponent", 1250))],
        );

        let report = RatingHistoryResolver::new(&stats, &history, ME).resolve_at(now).await;

        assert_eq!(report.rapid, None);
        assert_eq!(
            report.blitz,
            Some(CategoryDelta {
                current: 1180,
                change: -30
            })
        );
    }

    #[tokio::test]
    async fn test_games_after_cutoff_are_too_recent() {
        let now = mid_march();
        let cutoff = cutoff_timestamp(now);
        let stats = stats(Some(1500), None);
        let history = FakeHistory::default()
            .with_month(FEB, vec![game(cutoff + 60, "rapid", (ME, 1300), ("opponent", 1300))])
            .with_month(MAR, vec![game(now.timestamp() - DAY, "rapid", (ME, 1490), ("opponent", 1300))]);

        let report = RatingHistoryResolver::new(&stats, &history, ME).resolve_at(now).await;

        assert_eq!(report.rapid.map(|delta| delta.change), Some(0));
    }

    #[tokio::test]
    async fn test_latest_game_wins_whichever_month_holds_it() {
        // On the 31st the cutoff lands inside the current month
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let cutoff = cutoff_timestamp(now);
        let newer = game(cutoff - 60, "rapid", (ME, 1440), ("opponent", 1500));
        let older = game(cutoff - 10 * DAY, "rapid", (ME, 1390), ("opponent", 1500));
        let stats = stats(Some(1500), None);

        let forward = FakeHistory::default()
            .with_month(FEB, vec![older.clone()])
            .with_month(MAR, vec![newer.clone()]);
        let swapped = FakeHistory::default()
            .with_month(FEB, vec![newer])
            .with_month(MAR, vec![older]);

        let first = RatingHistoryResolver::new(&stats, &forward, ME).resolve_at(now).await;
        let second = RatingHistoryResolver::new(&stats, &swapped, ME).resolve_at(now).await;

        assert_eq!(first.rapid.map(|delta| delta.change), Some(60));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_stats_failure_yields_empty_report() {
        let stats = FakeStats { stats: None };
        let history = FakeHistory::default().with_month(
            FEB,
            vec![game(1_700_000_000, "rapid", (ME, 1400), ("opponent", 1500))],
        );

        let report = RatingHistoryResolver::new(&stats, &history, ME)
            .resolve_at(mid_march())
            .await;

        assert_eq!(report, RatingReport::default());
        assert!(report.is_empty());
        assert!(history.requested().is_empty());
    }

    #[tokio::test]
    async fn test_failed_month_is_ignored() {
        let now = mid_march();
        let cutoff = cutoff_timestamp(now);
        let stats = stats(Some(1500), Some(1200));
        let history = FakeHistory::default()
            .with_month(FEB, vec![game(cutoff - DAY, "blitz", (ME, 1150), ("opponent", 1100))])
            .failing(MAR);

        let report = RatingHistoryResolver::new(&stats, &history, ME).resolve_at(now).await;

        assert_eq!(report.rapid.map(|delta| delta.change), Some(0));
        assert_eq!(report.blitz.map(|delta| delta.change), Some(50));
        assert_eq!(history.requested(), vec![FEB, MAR]);
    }

    #[tokio::test]
    async fn test_both_months_failing_still_reports_current_ratings() {
        let stats = stats(Some(1500), None);
        let history = FakeHistory::default().failing(FEB).failing(MAR);

        let report = RatingHistoryResolver::new(&stats, &history, ME)
            .resolve_at(mid_march())
            .await;

        assert_eq!(
            report.rapid,
            Some(CategoryDelta {
                current: 1500,
                change: 0
            })
        );
    }

    #[tokio::test]
    async fn test_january_fetches_december_of_previous_year() {
        let now = Utc.with_ymd_and_hms(2025, 1, 20, 9, 30, 0).unwrap();
        let stats = stats(Some(1500), None);
        let history = FakeHistory::default();

        RatingHistoryResolver::new(&stats, &history, ME).resolve_at(now).await;

        assert_eq!(
            history.requested(),
            vec![ArchiveMonth::new(2024, 12), ArchiveMonth::new(2025, 1)]
        );
    }

    #[test]
    fn test_cutoff_is_thirty_days_back() {
        let now = mid_march();

        assert_eq!(now.timestamp() - cutoff_timestamp(now), 30 * DAY);
    }
}
