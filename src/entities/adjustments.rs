//! SeaORM Entity for cash adjustments attached to an EOD report

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "adjustments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub eod_report_id: i32,
    /// "denomination", "overage" or "shortage"
    pub kind: String,
    pub description: String,
    pub count: i32,
    /// Signed amount in the adjustment's currency
    pub amount: Decimal,
    /// "JMD" or "USD"
    pub currency: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
