use std::cmp::Ordering;

use crate::domain::CategoryDelta;

/// Shown instead of a signed zero
pub const NEUTRAL_CHANGE: &str = "–";

/// Delta against the historical rating; no history counts as no change
pub fn category_delta(current: i32, historical: Option<i32>) -> CategoryDelta {
    let change = historical.map_or(0, |old| current - old);
    CategoryDelta { current, change }
}

/// `+N` for gains, `-N` for losses, [`NEUTRAL_CHANGE`] for zero
pub fn format_change(change: i32) -> String {
    match change.cmp(&0) {
        Ordering::Greater => format!("+{}", change),
        Ordering::Less => change.to_string(),
        Ordering::Equal => NEUTRAL_CHANGE.to_string(),
    }
}
