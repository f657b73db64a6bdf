use serde::{Deserialize, Serialize};

use crate::domain::{
    Category, CategoryDelta, CategoryStats, GameRecord, PlayerSide, PlayerStats, RatingReport,
    RatingSnapshot, Record,
};
use crate::rating::format_change;

// --- chess.com API Response Structures ---

/// `GET /pub/player/{username}/stats`
#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub chess_rapid: Option<CategoryStatsResponse>,
    #[serde(default)]
    pub chess_blitz: Option<CategoryStatsResponse>,
}

impl StatsResponse {
    fn category(&self, category: Category) -> Option<&CategoryStatsResponse> {
        match category {
            Category::Rapid => self.chess_rapid.as_ref(),
            Category::Blitz => self.chess_blitz.as_ref(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryStatsResponse {
    pub last: Option<RatingPointResponse>,
    pub best: Option<RatingPointResponse>,
    pub record: Option<RecordResponse>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RatingPointResponse {
    pub rating: i32,
    pub date: i64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RecordResponse {
    #[serde(default)]
    pub win: u32,
    #[serde(default)]
    pub loss: u32,
    #[serde(default)]
    pub draw: u32,
}

/// `GET /pub/player/{username}/games/{YYYY}/{MM}`
#[derive(Debug, Deserialize)]
pub struct MonthlyArchiveResponse {
    #[serde(default)]
    pub games: Vec<GameResponse>,
}

#[derive(Debug, Deserialize)]
pub struct GameResponse {
    pub end_time: i64,
    pub time_class: String,
    pub white: SideResponse,
    pub black: SideResponse,
}

#[derive(Debug, Deserialize)]
pub struct SideResponse {
    pub username: String,
    pub rating: i32,
}

impl From<RatingPointResponse> for RatingSnapshot {
    fn from(point: RatingPointResponse) -> Self {
        Self {
            rating: point.rating,
            as_of: point.date,
        }
    }
}

impl From<RecordResponse> for Record {
    fn from(record: RecordResponse) -> Self {
        Self {
            win: record.win,
            loss: record.loss,
            draw: record.draw,
        }
    }
}

/// Categories without a `last` rating are left out
impl From<StatsResponse> for PlayerStats {
    fn from(response: StatsResponse) -> Self {
        let mut stats = PlayerStats::new();
        for category in Category::ALL {
            let Some(entry) = response.category(category) else {
                continue;
            };
            let Some(last) = entry.last else {
                continue;
            };
            stats.insert(
                category,
                CategoryStats {
                    last: last.into(),
                    best: entry.best.map(Into::into),
                    record: entry.record.map(Into::into),
                },
            );
        }
        stats
    }
}

impl From<SideResponse> for PlayerSide {
    fn from(side: SideResponse) -> Self {
        Self {
            username: side.username,
            rating: side.rating,
        }
    }
}

impl From<GameResponse> for GameRecord {
    fn from(game: GameResponse) -> Self {
        Self {
            end_time: game.end_time,
            category: game.time_class,
            white: game.white.into(),
            black: game.black.into(),
        }
    }
}

// --- Widget Structures ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWidget {
    pub current: i32,
    pub change: i32,
    pub display: String,
}

impl From<CategoryDelta> for CategoryWidget {
    fn from(delta: CategoryDelta) -> Self {
        Self {
            current: delta.current,
            change: delta.change,
            display: format_change(delta.change),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChessWidgetResponse {
    pub rapid: Option<CategoryWidget>,
    pub blitz: Option<CategoryWidget>,
}

impl From<&RatingReport> for ChessWidgetResponse {
    fn from(report: &RatingReport) -> Self {
        Self {
            rapid: report.rapid.map(Into::into),
            blitz: report.blitz.map(Into::into),
        }
    }
}
