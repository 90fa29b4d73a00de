//! SeaORM Entity for emergency access requests
//!
//! A grant is active iff status is "approved" and the wall clock has not
//! passed access_granted_until. Expiry is a read-time check only; lapsed
//! grants keep their stored status.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "emergency_access_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub agent_id: i32,
    pub location_id: i32,
    pub requested_at: DateTimeWithTimeZone,
    pub reason: String,
    /// "pending", "approved", "denied" or "expired"
    pub status: String,
    pub reviewed_by: Option<i32>,
    pub reviewed_at: Option<DateTimeWithTimeZone>,
    pub access_granted_until: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
