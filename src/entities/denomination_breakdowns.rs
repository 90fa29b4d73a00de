//! SeaORM Entity for counted note denominations on an EOD report
//!
//! One row per (report, currency). JMD rows use the jmd_* counts plus
//! coins_amount; USD rows use the usd_* counts plus small_bills_coins_amount.
//! The other currency's fields stay at zero and are ignored when totalling.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "denomination_breakdowns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub eod_report_id: i32,
    /// "JMD" or "USD"
    pub currency: String,
    pub jmd_5000_count: i32,
    pub jmd_1000_count: i32,
    pub jmd_500_count: i32,
    pub jmd_100_count: i32,
    pub jmd_50_count: i32,
    pub coins_amount: Decimal,
    pub usd_100_count: i32,
    pub usd_50_count: i32,
    pub usd_20_count: i32,
    pub usd_10_count: i32,
    pub small_bills_coins_amount: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
