//! Daily position handlers
//!
//! POST /api/daily-position/calculate - run the calculator for one location
//! GET  /api/daily-position           - dashboard row for (location, date)

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use crate::entities::{daily_agent_data, prelude::*};
use crate::models::common::ErrorResponse;
use crate::models::daily_position::{
    CalculatePositionRequest, DailyPositionQuery, DailyPositionResponse,
};
use crate::services::daily_position;
use crate::services::limits;
use crate::AppState;

fn db_error(err: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(format!("Database error: {}", err))),
    )
}

/// Handler for POST /api/daily-position/calculate
pub async fn calculate_daily_position(
    State(state): State<AppState>,
    Json(payload): Json<CalculatePositionRequest>,
) -> Result<Json<daily_agent_data::Model>, (StatusCode, Json<ErrorResponse>)> {
    let location = Locations::find_by_id(payload.location_id)
        .one(&state.db)
        .await
        .map_err(db_error)?;
    if location.is_none() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(format!(
                "Location {} not found",
                payload.location_id
            ))),
        ));
    }

    let date = payload.date.unwrap_or_else(|| Utc::now().date_naive());
    let row = daily_position::update_daily_agent_data(
        &state.db,
        &state.providers,
        payload.location_id,
        date,
    )
    .await
    .map_err(db_error)?;

    Ok(Json(row))
}

/// Handler for GET /api/daily-position
///
/// With `against_closing=true` the response also carries breach flags
/// re-evaluated against the closing balance; the stored flags always
/// reflect the projected next-day amount.
pub async fn get_daily_position(
    State(state): State<AppState>,
    Query(query): Query<DailyPositionQuery>,
) -> Result<Json<DailyPositionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());

    let row = DailyAgentData::find()
        .filter(daily_agent_data::Column::LocationId.eq(query.location_id))
        .filter(daily_agent_data::Column::Date.eq(date))
        .one(&state.db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(format!(
                    "No daily data for location {} on {}",
                    query.location_id, date
                ))),
            )
        })?;

    let closing_breaches = if query.against_closing {
        let limit_set = limits::limits_for_location(&state.db, query.location_id)
            .await
            .map_err(db_error)?;
        Some(limits::evaluate(row.closing_balance, limit_set.as_ref()))
    } else {
        None
    };

    Ok(Json(DailyPositionResponse {
        expected_closing_balance: row.expected_closing_balance(),
        data: row,
        closing_breaches,
    }))
}
