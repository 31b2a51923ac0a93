use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/progress", get(handlers::get_progress))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/toggle", post(handlers::toggle_day))
        .route("/api/reset", post(handlers::reset))
        .route("/api/export", get(handlers::export_json))
        .route("/api/export/pdf", get(handlers::export_pdf))
        .with_state(state)
}
