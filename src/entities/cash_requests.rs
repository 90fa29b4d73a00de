//! SeaORM Entity for cash requests
//!
//! Status flow: pending -> approved -> delivered, or pending -> rejected.
//! total_jmd/total_usd are always recomputed from the note counts before a
//! row is persisted; they are never taken from the caller.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "cash_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub location_id: i32,
    /// "regular" or "urgent"
    pub request_type: String,
    /// "pending", "approved", "delivered" or "rejected"
    pub status: String,
    pub request_date: DateTimeWithTimeZone,
    pub delivery_date: Date,
    pub jmd_5000: i32,
    pub jmd_2000: i32,
    pub jmd_1000: i32,
    pub jmd_500: i32,
    pub jmd_100: i32,
    pub jmd_50: i32,
    pub usd_100: i32,
    pub usd_50: i32,
    pub usd_20: i32,
    pub usd_10: i32,
    pub usd_1: i32,
    pub total_jmd: Decimal,
    pub total_usd: Decimal,
    pub approved_by: Option<i32>,
    pub approved_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
