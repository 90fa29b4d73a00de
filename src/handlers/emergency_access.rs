//! Emergency access handlers
//!
//! POST /api/emergency-access              - agent files a request
//! GET  /api/emergency-access/pending      - admin review queue
//! POST /api/emergency-access/{id}/review  - approve or deny

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::entities::emergency_access_requests;
use crate::handlers::cash_request::workflow_error;
use crate::models::common::ErrorResponse;
use crate::models::emergency_access::{RequestEmergencyAccess, ReviewEmergencyAccess};
use crate::services::emergency_access;
use crate::services::system_settings;
use crate::AppState;

fn db_error(err: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(format!("Database error: {}", err))),
    )
}

/// Handler for POST /api/emergency-access
pub async fn request_emergency_access(
    State(state): State<AppState>,
    Json(payload): Json<RequestEmergencyAccess>,
) -> Result<Json<emergency_access_requests::Model>, (StatusCode, Json<ErrorResponse>)> {
    payload.validate().map_err(|fields| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::validation(fields)),
        )
    })?;

    let request = emergency_access::request_access(
        &state.db,
        payload.agent_id,
        payload.location_id,
        payload.reason,
    )
    .await
    .map_err(db_error)?;

    Ok(Json(request))
}

/// Handler for GET /api/emergency-access/pending
pub async fn list_pending_emergency_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<emergency_access_requests::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let requests = emergency_access::pending_requests(&state.db)
        .await
        .map_err(db_error)?;
    Ok(Json(requests))
}

/// Handler for POST /api/emergency-access/{id}/review
pub async fn review_emergency_request(
    State(state): State<AppState>,
    Path(request_id): Path<i32>,
    Json(payload): Json<ReviewEmergencyAccess>,
) -> Result<Json<emergency_access_requests::Model>, (StatusCode, Json<ErrorResponse>)> {
    let approve = match payload.action.as_str() {
        "approve" => true,
        "deny" => false,
        other => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!(
                    "Unknown action '{}'; expected approve or deny",
                    other
                ))),
            ));
        }
    };

    let settings = system_settings::load_settings(&state.db)
        .await
        .map_err(db_error)?;

    let request = emergency_access::review_access(
        &state.db,
        request_id,
        payload.admin_id,
        approve,
        &settings,
    )
    .await
    .map_err(workflow_error)?;

    Ok(Json(request))
}
