use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::api::models::ChessWidgetResponse;
use crate::domain::{GameHistorySource, StatsSource};
use crate::rating::RatingHistoryResolver;

pub struct AppState {
    pub stats: Arc<dyn StatsSource>,
    pub history: Arc<dyn GameHistorySource>,
    pub username: String,
}

/// Always answers 200; an unavailable upstream shows up as null categories
pub async fn get_chess(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let resolver = RatingHistoryResolver::new(
        state.stats.as_ref(),
        state.history.as_ref(),
        &state.username,
    );
    let report = resolver.resolve().await;

    Json(ChessWidgetResponse::from(&report))
}

pub async fn health() -> impl IntoResponse {
    "ok"
}
