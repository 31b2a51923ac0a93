use crate::errors::AppError;
use crate::models::{
    DayStatusResponse, ProgressResponse, StatsResponse, ToggleRequest, TOTAL_DAYS,
};
use crate::report::render_report;
use crate::state::AppState;
use crate::stats::{build_export, build_stats};
use crate::storage::{delete_progress, persist_progress};
use crate::ui::render_index;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::Local;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let progress = state.progress.lock().await;
    Html(render_index(&build_stats(&progress)))
}

pub async fn get_progress(State(state): State<AppState>) -> Result<Json<ProgressResponse>, AppError> {
    let progress = state.progress.lock().await;
    Ok(Json(ProgressResponse {
        completed_days: progress.days.iter().copied().collect(),
    }))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let progress = state.progress.lock().await;
    Ok(Json(build_stats(&progress)))
}

pub async fn toggle_day(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<DayStatusResponse>, AppError> {
    if !(1..=TOTAL_DAYS).contains(&payload.day) {
        return Err(AppError::bad_request(format!(
            "day must be between 1 and {TOTAL_DAYS}"
        )));
    }

    let mut progress = state.progress.lock().await;
    let completed = progress.toggle(payload.day);
    persist_progress(&state.data_path, &progress).await?;

    Ok(Json(DayStatusResponse {
        day: payload.day,
        completed,
    }))
}

pub async fn reset(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let mut progress = state.progress.lock().await;
    progress.clear();
    delete_progress(&state.data_path).await?;
    Ok(Json(build_stats(&progress)))
}

pub async fn export_json(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let progress = state.progress.lock().await;
    let record = build_export(&progress);
    let body = serde_json::to_string_pretty(&record).map_err(AppError::internal)?;
    let filename = format!("roadmap-progress-{}.json", Local::now().date_naive());

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}

pub async fn export_pdf(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let progress = state.progress.lock().await;
    let bytes = render_report(&progress)?;
    let filename = format!("Class12-Roadmap-Report-{}.pdf", Local::now().date_naive());

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    ))
}
