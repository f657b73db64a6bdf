use log::warn;

use crate::domain::{Category, GameRecord};

/// Most recent game of the category that ended at or before `cutoff`
pub fn latest_game_before(
    games: &[GameRecord],
    category: Category,
    cutoff: i64,
) -> Option<&GameRecord> {
    games
        .iter()
        .filter(|game| game.is_category(category) && game.end_time <= cutoff)
        .max_by_key(|game| game.end_time)
}

/// Rating the player held in the category at `cutoff`, taken from their own
/// side of the latest game ending at or before it
pub fn find_rating_at(
    games: &[GameRecord],
    category: Category,
    cutoff: i64,
    username: &str,
) -> Option<i32> {
    latest_game_before(games, category, cutoff).map(|game| player_side_rating(game, username))
}

/// Falls back to the black side when the player is on neither side
fn player_side_rating(game: &GameRecord, username: &str) -> i32 {
    if game.white.is_played_by(username) {
        return game.white.rating;
    }

    if !game.black.is_played_by(username) {
        warn!(
            "{} played neither side of the {} game ending at {} ({} vs {}), using black rating",
            username, game.category, game.end_time, game.white.username, game.black.username
        );
    }
    game.black.rating
}
