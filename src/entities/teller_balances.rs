//! SeaORM Entity for per-teller closing balances on an EOD report
//!
//! Replaced wholesale on every resubmission of the parent report.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "teller_balances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub eod_report_id: i32,
    pub teller_name: String,
    pub jmd_amount: Decimal,
    pub usd_amount: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
