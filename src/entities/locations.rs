//! SeaORM Entity for branch locations
//!
//! Root entity; limits, deliveries, requests, daily data and EOD reports all
//! hang off a location by id.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
    /// Identifier of this branch in the EFT ledger system
    pub eft_system_name: Option<String>,
    /// Identifier of this branch in the remote disbursement system
    pub remote_services_name: Option<String>,
    /// Name under which this branch is insured
    pub insurance_limit_name: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
