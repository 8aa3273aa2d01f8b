use attendly_core::{SaveWeekRequest, Summary, WeeklyRecord};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tokio::task::spawn_blocking;
use tracing::debug;

use super::error::AppError;
use super::state::AppState;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WeekQuery {
    week_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub message: String,
    pub week_id: String,
}

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn get_data_handler(
    State(state): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<WeeklyRecord>, AppError> {
    const CONTEXT: &str = "Server error fetching weekly data";
    debug!(week_id = ?query.week_id, "GET /data");

    let service = state.service.clone();
    let view = spawn_blocking(move || service.get_week(query.week_id.as_deref()))
        .await
        .map_err(|e| AppError::join(e, CONTEXT))?
        .map_err(|e| AppError::from_service(e, CONTEXT))?;

    Ok(Json(view.record))
}

pub async fn save_data_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveWeekRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    const CONTEXT: &str = "Server error saving data";
    let Json(request) = payload?;
    debug!(week_id = ?request.week_id, "POST /data");

    let service = state.service.clone();
    let record = spawn_blocking(move || service.save_week(request))
        .await
        .map_err(|e| AppError::join(e, CONTEXT))?
        .map_err(|e| AppError::from_service(e, CONTEXT))?;

    Ok(Json(SaveResponse {
        message: "Data saved successfully".to_string(),
        week_id: record.week_id,
    }))
}

pub async fn summary_handler(State(state): State<AppState>) -> Result<Json<Summary>, AppError> {
    const CONTEXT: &str = "Server error fetching summary data";

    let today = Local::now().date_naive();
    let service = state.service.clone();
    let summary = spawn_blocking(move || service.summary(today))
        .await
        .map_err(|e| AppError::join(e, CONTEXT))?
        .map_err(|e| AppError::from_service(e, CONTEXT))?;

    debug!(%today, ?summary, "GET /summary");
    Ok(Json(summary))
}
