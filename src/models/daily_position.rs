//! Daily position calculation and dashboard models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::daily_agent_data;
use crate::services::limits::LimitBreaches;

#[derive(Debug, Clone, Deserialize)]
pub struct CalculatePositionRequest {
    pub location_id: i32,
    /// Defaults to today
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyPositionQuery {
    pub location_id: i32,
    /// Defaults to today
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Also evaluate the limits against the closing balance instead of the
    /// stored projected-amount flags
    #[serde(default)]
    pub against_closing: bool,
}

#[derive(Debug, Serialize)]
pub struct DailyPositionResponse {
    pub data: daily_agent_data::Model,
    /// What the branch should close with if the 3pm payout were final
    pub expected_closing_balance: Decimal,
    /// Present when the caller asked for re-evaluation against the closing
    /// balance; computed on the fly, never stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_breaches: Option<LimitBreaches>,
}
