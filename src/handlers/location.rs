//! Location and limit configuration handlers
//!
//! GET /api/locations
//! GET /api/locations/{id}/limits
//! PUT /api/locations/{id}/limits

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::entities::{location_limits, locations, prelude::*};
use crate::models::common::ErrorResponse;
use crate::models::location::UpdateLocationLimits;
use crate::AppState;

fn db_error(err: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(format!("Database error: {}", err))),
    )
}

fn location_not_found(location_id: i32) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(format!("Location {} not found", location_id))),
    )
}

/// Handler for GET /api/locations
pub async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<locations::Model>>, (StatusCode, Json<ErrorResponse>)> {
    let locations = Locations::find()
        .order_by_asc(locations::Column::Name)
        .all(&state.db)
        .await
        .map_err(db_error)?;
    Ok(Json(locations))
}

/// Handler for GET /api/locations/{id}/limits
pub async fn get_location_limits(
    State(state): State<AppState>,
    Path(location_id): Path<i32>,
) -> Result<Json<location_limits::Model>, (StatusCode, Json<ErrorResponse>)> {
    let limits = LocationLimits::find()
        .filter(location_limits::Column::LocationId.eq(location_id))
        .one(&state.db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(format!(
                    "No limits configured for location {}",
                    location_id
                ))),
            )
        })?;
    Ok(Json(limits))
}

/// Handler for PUT /api/locations/{id}/limits
pub async fn update_location_limits(
    State(state): State<AppState>,
    Path(location_id): Path<i32>,
    Json(payload): Json<UpdateLocationLimits>,
) -> Result<Json<location_limits::Model>, (StatusCode, Json<ErrorResponse>)> {
    let location = Locations::find_by_id(location_id)
        .one(&state.db)
        .await
        .map_err(db_error)?;
    if location.is_none() {
        return Err(location_not_found(location_id));
    }

    let existing = LocationLimits::find()
        .filter(location_limits::Column::LocationId.eq(location_id))
        .one(&state.db)
        .await
        .map_err(db_error)?;

    let stored = match existing {
        Some(row) => {
            let mut active: location_limits::ActiveModel = row.into();
            active.insurance_limit = Set(payload.insurance_limit);
            active.eod_vault_limit = Set(payload.eod_vault_limit);
            active.working_day_limit = Set(payload.working_day_limit);
            active.update(&state.db).await.map_err(db_error)?
        }
        None => {
            let row = location_limits::ActiveModel {
                location_id: Set(location_id),
                insurance_limit: Set(payload.insurance_limit),
                eod_vault_limit: Set(payload.eod_vault_limit),
                working_day_limit: Set(payload.working_day_limit),
                ..Default::default()
            };
            row.insert(&state.db).await.map_err(db_error)?
        }
    };

    Ok(Json(stored))
}
