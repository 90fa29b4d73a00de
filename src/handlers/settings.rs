//! System settings handlers
//!
//! GET /api/settings - current snapshot (defaults if never saved)
//! PUT /api/settings - replace the singleton

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

use crate::models::common::ErrorResponse;
use crate::models::settings::{SettingsResponse, UpdateSettings};
use crate::services::system_settings::{self, submission_window, SettingsSnapshot};
use crate::AppState;

fn db_error(err: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(format!("Database error: {}", err))),
    )
}

/// Handler for GET /api/settings
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let snapshot = system_settings::load_settings(&state.db)
        .await
        .map_err(db_error)?;
    let window = submission_window(&snapshot, Utc::now().naive_utc());
    Ok(Json(SettingsResponse {
        settings: snapshot,
        window,
    }))
}

/// Handler for PUT /api/settings
pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettings>,
) -> Result<Json<SettingsSnapshot>, (StatusCode, Json<ErrorResponse>)> {
    if payload.settings.cutoff_hour > 23
        || payload.settings.cutoff_minute > 59
        || payload.settings.business_hours_start > 23
        || payload.settings.business_hours_start_minute > 59
    {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new("Cutoff and opening times must be a valid wall-clock time")),
        ));
    }

    let stored = system_settings::save_settings(&state.db, &payload.settings, payload.admin_id)
        .await
        .map_err(db_error)?;

    Ok(Json(SettingsSnapshot::from(&stored)))
}
