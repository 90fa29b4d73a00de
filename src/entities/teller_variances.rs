//! SeaORM Entity for per-teller variances on an EOD report
//!
//! Only populated when the report says not all tellers balanced; the parent
//! report's total_variance is the sum of these rows.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "teller_variances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub eod_report_id: i32,
    pub teller_number: String,
    /// Signed; shortages are negative, overages positive
    pub variance: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
