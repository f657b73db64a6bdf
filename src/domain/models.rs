use serde::Serialize;
use std::collections::HashMap;

/// Chess time-control class tracked with its own rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Rapid,
    Blitz,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Rapid, Category::Blitz];

    /// Value of `time_class` in archived games
    pub fn time_class(&self) -> &'static str {
        match self {
            Category::Rapid => "rapid",
            Category::Blitz => "blitz",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Rapid => "Rapid",
            Category::Blitz => "Blitz",
        }
    }
}

/// Rating at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingSnapshot {
    pub rating: i32,
    /// Unix seconds
    pub as_of: i64,
}

/// Win/loss/draw tally for a category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    pub win: u32,
    pub loss: u32,
    pub draw: u32,
}

/// Stats of a single category as reported by the stats endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStats {
    pub last: RatingSnapshot,
    pub best: Option<RatingSnapshot>,
    pub record: Option<Record>,
}

/// Current stats of a player, keyed by category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerStats {
    categories: HashMap<Category, CategoryStats>,
}

impl PlayerStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category, stats: CategoryStats) -> Self {
        self.insert(category, stats);
        self
    }

    pub fn insert(&mut self, category: Category, stats: CategoryStats) {
        self.categories.insert(category, stats);
    }

    pub fn get(&self, category: Category) -> Option<&CategoryStats> {
        self.categories.get(&category)
    }

    /// Most recent rating in the category
    pub fn current_rating(&self, category: Category) -> Option<i32> {
        self.get(category).map(|stats| stats.last.rating)
    }
}

/// One side of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSide {
    pub username: String,
    pub rating: i32,
}

impl PlayerSide {
    pub fn is_played_by(&self, username: &str) -> bool {
        self.username.eq_ignore_ascii_case(username)
    }
}

/// Completed game from the monthly archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Unix seconds
    pub end_time: i64,
    pub category: String,
    pub white: PlayerSide,
    pub black: PlayerSide,
}

impl GameRecord {
    pub fn is_category(&self, category: Category) -> bool {
        self.category == category.time_class()
    }
}

/// Current rating and its change over the lookback window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDelta {
    pub current: i32,
    pub change: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RatingReport {
    pub rapid: Option<CategoryDelta>,
    pub blitz: Option<CategoryDelta>,
}

impl RatingReport {
    pub fn get(&self, category: Category) -> Option<CategoryDelta> {
        match category {
            Category::Rapid => self.rapid,
            Category::Blitz => self.blitz,
        }
    }

    pub fn set(&mut self, category: Category, delta: Option<CategoryDelta>) {
        match category {
            Category::Rapid => self.rapid = delta,
            Category::Blitz => self.blitz = delta,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rapid.is_none() && self.blitz.is_none()
    }
}
