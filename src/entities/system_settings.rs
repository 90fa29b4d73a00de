//! SeaORM Entity for the system settings singleton (id = 1)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "system_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    /// Toggle for the submission cutoff window
    pub cutoff_window_enabled: bool,
    /// Cutoff time, 24-hour wall clock
    pub cutoff_hour: i32,
    pub cutoff_minute: i32,
    pub business_hours_start: i32,
    pub business_hours_start_minute: i32,
    /// Minutes an emergency access grant stays active
    pub emergency_access_duration: i32,
    pub updated_by: Option<i32>,
    pub last_updated: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
