//! Location and limit configuration models

use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLocationLimits {
    pub insurance_limit: Decimal,
    pub eod_vault_limit: Decimal,
    pub working_day_limit: Decimal,
}
