use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{get_chess, health, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/chess", get(get_chess))
        .route("/health", get(health))
        .with_state(state)
}
