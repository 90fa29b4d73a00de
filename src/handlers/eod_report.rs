//! EOD report handlers
//!
//! POST /api/eod-reports       - submit or resubmit a report
//! GET  /api/eod-reports       - list, newest processing date first
//! GET  /api/eod-reports/{id}  - report with all line items

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde_json::json;

use crate::entities::{
    adjustments, denomination_breakdowns, eod_reports, prelude::*, teller_balances,
    teller_variances,
};
use crate::handlers::cash_request::enforce_submission_window;
use crate::models::common::ErrorResponse;
use crate::models::eod_report::{EodReportDetailResponse, ListEodReportsQuery, SubmitEodReport};
use crate::services::courier;
use crate::services::eod_report;
use crate::AppState;

fn db_error(err: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(format!("Database error: {}", err))),
    )
}

/// Handler for POST /api/eod-reports
pub async fn submit_eod_report(
    State(state): State<AppState>,
    Json(payload): Json<SubmitEodReport>,
) -> Result<Json<eod_reports::Model>, (StatusCode, Json<ErrorResponse>)> {
    payload.validate().map_err(|fields| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::validation(fields)),
        )
    })?;

    enforce_submission_window(&state, payload.agent_id).await?;

    let report = eod_report::submit_eod_report(&state.db, &payload)
        .await
        .map_err(db_error)?;

    // Mirror the reconciliation upstream; failures only get logged
    courier::upload_to_eft(&json!({
        "location_id": report.location_id,
        "processing_date": report.processing_date,
        "closing_balance": report.closing_balance,
        "total_variance": report.total_variance,
    }))
    .await;

    Ok(Json(report))
}

/// Handler for GET /api/eod-reports
pub async fn list_eod_reports(
    State(state): State<AppState>,
    Query(query): Query<ListEodReportsQuery>,
) -> Result<Json<Vec<eod_reports::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let mut find = EodReports::find();
    if let Some(location_id) = query.location_id {
        find = find.filter(eod_reports::Column::LocationId.eq(location_id));
    }
    if let Some(agent_id) = query.agent_id {
        find = find.filter(eod_reports::Column::AgentId.eq(agent_id));
    }

    let reports = find
        .order_by_desc(eod_reports::Column::ProcessingDate)
        .all(&state.db)
        .await
        .map_err(db_error)?;

    Ok(Json(reports))
}

/// Handler for GET /api/eod-reports/{id}
pub async fn get_eod_report(
    State(state): State<AppState>,
    Path(report_id): Path<i32>,
) -> Result<Json<EodReportDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let report = EodReports::find_by_id(report_id)
        .one(&state.db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(format!("EOD report {} not found", report_id))),
            )
        })?;

    let denomination_breakdowns = DenominationBreakdowns::find()
        .filter(denomination_breakdowns::Column::EodReportId.eq(report_id))
        .all(&state.db)
        .await
        .map_err(db_error)?;

    let teller_balances = TellerBalances::find()
        .filter(teller_balances::Column::EodReportId.eq(report_id))
        .all(&state.db)
        .await
        .map_err(db_error)?;

    let teller_variances = TellerVariances::find()
        .filter(teller_variances::Column::EodReportId.eq(report_id))
        .all(&state.db)
        .await
        .map_err(db_error)?;

    let adjustments = Adjustments::find()
        .filter(adjustments::Column::EodReportId.eq(report_id))
        .all(&state.db)
        .await
        .map_err(db_error)?;

    Ok(Json(EodReportDetailResponse {
        report,
        denomination_breakdowns,
        teller_balances,
        teller_variances,
        adjustments,
    }))
}
