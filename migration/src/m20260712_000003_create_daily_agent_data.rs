//! Migration to create daily_agent_data
//!
//! One row per (location, date), written by the position calculator and by
//! the EOD submission flow (closing_balance only).

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DailyAgentData::Table)
                    .if_not_exists()
                    .col(pk_auto(DailyAgentData::Id))
                    .col(integer(DailyAgentData::LocationId))
                    .col(date(DailyAgentData::Date))
                    .col(decimal_len(DailyAgentData::PreviousDayBalance, 15, 2).default(0))
                    .col(decimal_len(DailyAgentData::CashDeliveredToday, 15, 2).default(0))
                    .col(decimal_len(DailyAgentData::PayoutAt3pm, 15, 2).default(0))
                    .col(decimal_len(DailyAgentData::CashPositionAt3pm, 15, 2).default(0))
                    .col(decimal_len(DailyAgentData::ProjectedEndingPosition, 15, 2).default(0))
                    .col(decimal_len(DailyAgentData::ProjectedNextDayAmount, 15, 2).default(0))
                    .col(decimal_len(DailyAgentData::ClosingBalance, 15, 2).default(0))
                    .col(decimal_len(DailyAgentData::Variance, 15, 2).default(0))
                    .col(boolean(DailyAgentData::ExceedsInsuranceLimit).default(false))
                    .col(boolean(DailyAgentData::ExceedsEodLimit).default(false))
                    .col(boolean(DailyAgentData::ExceedsWorkingDayLimit).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_daily_agent_data_location_date")
                    .table(DailyAgentData::Table)
                    .col(DailyAgentData::LocationId)
                    .col(DailyAgentData::Date)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DailyAgentData::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DailyAgentData {
    Table,
    Id,
    LocationId,
    Date,
    PreviousDayBalance,
    CashDeliveredToday,
    PayoutAt3pm,
    CashPositionAt3pm,
    ProjectedEndingPosition,
    ProjectedNextDayAmount,
    ClosingBalance,
    Variance,
    ExceedsInsuranceLimit,
    ExceedsEodLimit,
    ExceedsWorkingDayLimit,
}
