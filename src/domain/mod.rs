pub mod models;
pub mod sources;

pub use models::*;
pub use sources::{GameHistorySource, StatsSource};
