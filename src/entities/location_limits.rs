//! SeaORM Entity for per-location cash limits
//!
//! At most one row per location (unique index). A location without a row has
//! breach detection disabled.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "location_limits")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub location_id: i32,
    /// Ceiling covered by the branch insurance policy
    pub insurance_limit: Decimal,
    /// Maximum cash that may stay in the vault overnight
    pub eod_vault_limit: Decimal,
    /// Maximum cash on hand during the working day
    pub working_day_limit: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
