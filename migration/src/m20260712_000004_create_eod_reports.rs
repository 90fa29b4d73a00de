//! Migration to create eod_reports and its child tables
//!
//! teller_balances, teller_variances and adjustments are replaced wholesale
//! on every resubmission; denomination_breakdowns is upserted per currency.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EodReports::Table)
                    .if_not_exists()
                    .col(pk_auto(EodReports::Id))
                    .col(integer(EodReports::AgentId))
                    .col(integer(EodReports::LocationId))
                    .col(date(EodReports::ProcessingDate))
                    .col(decimal_len(EodReports::ClosingBalance, 15, 2).default(0))
                    .col(decimal_len(EodReports::FundsFromBxpWebex, 15, 2).default(0))
                    .col(boolean(EodReports::CashSentToCourier).default(false))
                    .col(decimal_len_null(EodReports::CourierUsdAmount, 15, 2))
                    .col(string_null(EodReports::CourierUsdReceipt))
                    .col(decimal_len_null(EodReports::CourierJmdAmount, 15, 2))
                    .col(string_null(EodReports::CourierJmdReceipt))
                    .col(boolean(EodReports::AllTellersBalanced).default(true))
                    .col(decimal_len(EodReports::TotalVariance, 15, 2).default(0))
                    .col(text(EodReports::Notes).default(""))
                    .col(boolean(EodReports::Confirmation).default(false))
                    .col(boolean(EodReports::Submitted).default(false))
                    .col(timestamp_with_time_zone(EodReports::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(EodReports::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_eod_reports_agent_location_date")
                    .table(EodReports::Table)
                    .col(EodReports::AgentId)
                    .col(EodReports::LocationId)
                    .col(EodReports::ProcessingDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TellerBalances::Table)
                    .if_not_exists()
                    .col(pk_auto(TellerBalances::Id))
                    .col(integer(TellerBalances::EodReportId))
                    .col(string(TellerBalances::TellerName))
                    .col(decimal_len(TellerBalances::JmdAmount, 15, 2).default(0))
                    .col(decimal_len(TellerBalances::UsdAmount, 15, 2).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teller_balances_report")
                    .table(TellerBalances::Table)
                    .col(TellerBalances::EodReportId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TellerVariances::Table)
                    .if_not_exists()
                    .col(pk_auto(TellerVariances::Id))
                    .col(integer(TellerVariances::EodReportId))
                    .col(string(TellerVariances::TellerNumber))
                    .col(decimal_len(TellerVariances::Variance, 15, 2).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teller_variances_report")
                    .table(TellerVariances::Table)
                    .col(TellerVariances::EodReportId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DenominationBreakdowns::Table)
                    .if_not_exists()
                    .col(pk_auto(DenominationBreakdowns::Id))
                    .col(integer(DenominationBreakdowns::EodReportId))
                    .col(string(DenominationBreakdowns::Currency))
                    .col(integer(DenominationBreakdowns::Jmd5000Count).default(0))
                    .col(integer(DenominationBreakdowns::Jmd1000Count).default(0))
                    .col(integer(DenominationBreakdowns::Jmd500Count).default(0))
                    .col(integer(DenominationBreakdowns::Jmd100Count).default(0))
                    .col(integer(DenominationBreakdowns::Jmd50Count).default(0))
                    .col(decimal_len(DenominationBreakdowns::CoinsAmount, 15, 2).default(0))
                    .col(integer(DenominationBreakdowns::Usd100Count).default(0))
                    .col(integer(DenominationBreakdowns::Usd50Count).default(0))
                    .col(integer(DenominationBreakdowns::Usd20Count).default(0))
                    .col(integer(DenominationBreakdowns::Usd10Count).default(0))
                    .col(decimal_len(DenominationBreakdowns::SmallBillsCoinsAmount, 15, 2).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_denomination_breakdowns_report_currency")
                    .table(DenominationBreakdowns::Table)
                    .col(DenominationBreakdowns::EodReportId)
                    .col(DenominationBreakdowns::Currency)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Adjustments::Table)
                    .if_not_exists()
                    .col(pk_auto(Adjustments::Id))
                    .col(integer(Adjustments::EodReportId))
                    .col(string(Adjustments::Kind).default("denomination"))
                    .col(string(Adjustments::Description).default(""))
                    .col(integer(Adjustments::Count).default(1))
                    .col(decimal_len(Adjustments::Amount, 15, 2).default(0))
                    .col(string(Adjustments::Currency).default("JMD"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_adjustments_report")
                    .table(Adjustments::Table)
                    .col(Adjustments::EodReportId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Adjustments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DenominationBreakdowns::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TellerVariances::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TellerBalances::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EodReports::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum EodReports {
    Table,
    Id,
    AgentId,
    LocationId,
    ProcessingDate,
    ClosingBalance,
    FundsFromBxpWebex,
    CashSentToCourier,
    CourierUsdAmount,
    CourierUsdReceipt,
    CourierJmdAmount,
    CourierJmdReceipt,
    AllTellersBalanced,
    TotalVariance,
    Notes,
    Confirmation,
    Submitted,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum TellerBalances {
    Table,
    Id,
    EodReportId,
    TellerName,
    JmdAmount,
    UsdAmount,
}

#[derive(Iden)]
enum TellerVariances {
    Table,
    Id,
    EodReportId,
    TellerNumber,
    Variance,
}

#[derive(Iden)]
enum DenominationBreakdowns {
    Table,
    Id,
    EodReportId,
    Currency,
    Jmd5000Count,
    Jmd1000Count,
    Jmd500Count,
    Jmd100Count,
    Jmd50Count,
    CoinsAmount,
    Usd100Count,
    Usd50Count,
    Usd20Count,
    Usd10Count,
    SmallBillsCoinsAmount,
}

#[derive(Iden)]
enum Adjustments {
    Table,
    Id,
    EodReportId,
    Kind,
    Description,
    Count,
    Amount,
    Currency,
}
