pub mod delta;
pub mod history;
pub mod resolver;

pub use delta::{category_delta, format_change, NEUTRAL_CHANGE};
pub use history::{find_rating_at, latest_game_before};
pub use resolver::{cutoff_timestamp, RatingHistoryResolver, LOOKBACK_DAYS};
