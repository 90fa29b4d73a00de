//! SeaORM Entity for cash deliveries
//!
//! Created when a cash request is approved. A delivery only counts toward
//! position calculations once the receiving agent has verified it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "cash_deliveries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub location_id: i32,
    /// Originating request; one-to-one, unique when set
    pub cash_request_id: Option<i32>,
    pub date: Date,
    pub jmd_amount: Decimal,
    pub usd_amount: Decimal,
    pub verified: bool,
    pub verified_by: Option<i32>,
    pub verification_date: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
