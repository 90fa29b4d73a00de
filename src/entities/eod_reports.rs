//! SeaORM Entity for end-of-day reconciliation reports
//!
//! One row per (agent, location, processing_date); resubmission overwrites
//! the prior values for that key. Courier fields are NULL unless cash was
//! sent to the courier that day.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "eod_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub agent_id: i32,
    pub location_id: i32,
    pub processing_date: Date,
    pub closing_balance: Decimal,
    pub funds_from_bxp_webex: Decimal,
    pub cash_sent_to_courier: bool,
    pub courier_usd_amount: Option<Decimal>,
    pub courier_usd_receipt: Option<String>,
    pub courier_jmd_amount: Option<Decimal>,
    pub courier_jmd_receipt: Option<String>,
    pub all_tellers_balanced: bool,
    /// Sum of teller variances; 0 while all tellers balance
    pub total_variance: Decimal,
    pub notes: String,
    pub confirmation: bool,
    pub submitted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
