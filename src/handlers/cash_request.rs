//! Cash request workflow handlers
//!
//! POST /api/cash-requests            - agent submits a request
//! GET  /api/cash-requests            - list, filterable by location/status
//! POST /api/cash-requests/{id}/approve
//! POST /api/cash-requests/{id}/reject
//! POST /api/deliveries/{id}/verify   - receiving agent confirms the cash

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::{cash_requests, prelude::*};
use crate::models::cash_request::{
    ApprovalResponse, ApproveCashRequest, ListCashRequestsQuery, RejectCashRequest,
    SubmitCashRequest, VerifyDeliveryRequest,
};
use crate::models::common::{ErrorResponse, FieldError};
use crate::services::cash_request::{self, WorkflowError};
use crate::services::courier;
use crate::services::emergency_access;
use crate::services::system_settings::{self, submission_window};
use crate::AppState;

/// Map a workflow failure onto the HTTP surface.
pub(crate) fn workflow_error(err: WorkflowError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        WorkflowError::NotFound(_) => StatusCode::NOT_FOUND,
        WorkflowError::InvalidState(_) => StatusCode::CONFLICT,
        WorkflowError::LocationMismatch(_) => StatusCode::FORBIDDEN,
        WorkflowError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse::new(err.to_string())))
}

fn db_error(err: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(format!("Database error: {}", err))),
    )
}

/// Reject agent submissions outside the cutoff window unless the agent
/// holds an active emergency grant.
pub(crate) async fn enforce_submission_window(
    state: &AppState,
    agent_id: i32,
) -> Result<(), (StatusCode, Json<ErrorResponse>)> {
    let settings = system_settings::load_settings(&state.db)
        .await
        .map_err(db_error)?;

    let now = Utc::now();
    let window = submission_window(&settings, now.naive_utc());
    if window.open {
        return Ok(());
    }

    let grant = emergency_access::active_grant(&state.db, agent_id, now.into())
        .await
        .map_err(db_error)?;
    if grant.is_some() {
        return Ok(());
    }

    Err((
        StatusCode::FORBIDDEN,
        Json(ErrorResponse::new(
            "Submissions are closed outside business hours; request emergency access if this cannot wait",
        )),
    ))
}

/// Handler for POST /api/cash-requests
pub async fn submit_cash_request(
    State(state): State<AppState>,
    Json(payload): Json<SubmitCashRequest>,
) -> Result<Json<cash_requests::Model>, (StatusCode, Json<ErrorResponse>)> {
    let (jmd, usd, request_type) = payload.resolve_notes().map_err(|fields| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::validation(fields)),
        )
    })?;

    enforce_submission_window(&state, payload.agent_id).await?;

    let request = cash_request::submit_cash_request(
        &state.db,
        payload.location_id,
        request_type,
        payload.delivery_date,
        &jmd,
        &usd,
    )
    .await
    .map_err(workflow_error)?;

    Ok(Json(request))
}

/// Handler for GET /api/cash-requests
pub async fn list_cash_requests(
    State(state): State<AppState>,
    Query(query): Query<ListCashRequestsQuery>,
) -> Result<Json<Vec<cash_requests::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let mut find = CashRequests::find();
    if let Some(location_id) = query.location_id {
        find = find.filter(cash_requests::Column::LocationId.eq(location_id));
    }
    if let Some(status) = &query.status {
        find = find.filter(cash_requests::Column::Status.eq(status));
    }

    let requests = find
        .order_by_desc(cash_requests::Column::RequestDate)
        .all(&state.db)
        .await
        .map_err(db_error)?;

    Ok(Json(requests))
}

/// Handler for POST /api/cash-requests/{id}/approve
pub async fn approve_cash_request(
    State(state): State<AppState>,
    Path(request_id): Path<i32>,
    Json(payload): Json<ApproveCashRequest>,
) -> Result<Json<ApprovalResponse>, (StatusCode, Json<ErrorResponse>)> {
    if payload.approved_jmd_amount.is_sign_negative()
        || payload.approved_usd_amount.is_sign_negative()
    {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::validation(vec![FieldError::new(
                "approved_jmd_amount",
                "Approved amounts must not be negative",
            )])),
        ));
    }

    let (request, delivery) = cash_request::approve_cash_request(
        &state.db,
        request_id,
        payload.admin_id,
        payload.approved_jmd_amount,
        payload.approved_usd_amount,
        payload.delivery_date,
    )
    .await
    .map_err(workflow_error)?;

    // Outbound dispatch is fire-and-forget; approval already committed
    if !courier::send_to_courier(request.id).await {
        tracing::warn!("Courier dispatch failed for cash request #{}", request.id);
    }

    Ok(Json(ApprovalResponse { request, delivery }))
}

/// Handler for POST /api/cash-requests/{id}/reject
pub async fn reject_cash_request(
    State(state): State<AppState>,
    Path(request_id): Path<i32>,
    Json(payload): Json<RejectCashRequest>,
) -> Result<Json<cash_requests::Model>, (StatusCode, Json<ErrorResponse>)> {
    let request = cash_request::reject_cash_request(&state.db, request_id, payload.admin_id)
        .await
        .map_err(workflow_error)?;
    Ok(Json(request))
}

/// Handler for POST /api/deliveries/{id}/verify
pub async fn verify_cash_delivery(
    State(state): State<AppState>,
    Path(delivery_id): Path<i32>,
    Json(payload): Json<VerifyDeliveryRequest>,
) -> Result<Json<crate::entities::cash_deliveries::Model>, (StatusCode, Json<ErrorResponse>)> {
    if !payload.confirmed {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::validation(vec![FieldError::new(
                "confirmed",
                "Receipt of the cash must be confirmed",
            )])),
        ));
    }

    let delivery = cash_request::verify_cash_delivery(
        &state.db,
        delivery_id,
        payload.agent_id,
        payload.location_id,
    )
    .await
    .map_err(workflow_error)?;

    Ok(Json(delivery))
}
