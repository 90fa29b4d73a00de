//! SeaORM Entity for the daily cash position of a location
//!
//! One row per (location, date). The position calculator owns every derived
//! field; the EOD submission flow only writes closing_balance.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "daily_agent_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub location_id: i32,
    pub date: Date,
    /// EFT ledger balance at close of the previous day
    pub previous_day_balance: Decimal,
    /// Verified delivery amount for this date, 0 when none
    pub cash_delivered_today: Decimal,
    /// Payout as of 3pm from the remote disbursement system
    pub payout_at_3pm: Decimal,
    pub cash_position_at_3pm: Decimal,
    pub projected_ending_position: Decimal,
    pub projected_next_day_amount: Decimal,
    /// Copied from the EOD report when one is submitted for this date
    pub closing_balance: Decimal,
    pub variance: Decimal,
    pub exceeds_insurance_limit: bool,
    pub exceeds_eod_limit: bool,
    pub exceeds_working_day_limit: bool,
}

impl Model {
    /// Balance the branch should close with if the 3pm payout were final
    pub fn expected_closing_balance(&self) -> Decimal {
        self.previous_day_balance + self.cash_delivered_today - self.payout_at_3pm
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
