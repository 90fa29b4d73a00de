//! Migration to create cash_requests and cash_deliveries
//!
//! A delivery is created when a request is approved; the two stay linked
//! one-to-one through cash_deliveries.cash_request_id.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CashRequests::Table)
                    .if_not_exists()
                    .col(pk_auto(CashRequests::Id))
                    .col(integer(CashRequests::LocationId))
                    .col(string(CashRequests::RequestType).default("regular"))
                    .col(string(CashRequests::Status).default("pending"))
                    .col(timestamp_with_time_zone(CashRequests::RequestDate).default(Expr::current_timestamp()))
                    .col(date(CashRequests::DeliveryDate))
                    .col(integer(CashRequests::Jmd5000).default(0))
                    .col(integer(CashRequests::Jmd2000).default(0))
                    .col(integer(CashRequests::Jmd1000).default(0))
                    .col(integer(CashRequests::Jmd500).default(0))
                    .col(integer(CashRequests::Jmd100).default(0))
                    .col(integer(CashRequests::Jmd50).default(0))
                    .col(integer(CashRequests::Usd100).default(0))
                    .col(integer(CashRequests::Usd50).default(0))
                    .col(integer(CashRequests::Usd20).default(0))
                    .col(integer(CashRequests::Usd10).default(0))
                    .col(integer(CashRequests::Usd1).default(0))
                    .col(decimal_len(CashRequests::TotalJmd, 15, 2).default(0))
                    .col(decimal_len(CashRequests::TotalUsd, 15, 2).default(0))
                    .col(integer_null(CashRequests::ApprovedBy))
                    .col(timestamp_with_time_zone_null(CashRequests::ApprovedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cash_requests_location_status")
                    .table(CashRequests::Table)
                    .col(CashRequests::LocationId)
                    .col(CashRequests::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CashDeliveries::Table)
                    .if_not_exists()
                    .col(pk_auto(CashDeliveries::Id))
                    .col(integer(CashDeliveries::LocationId))
                    .col(integer_null(CashDeliveries::CashRequestId))
                    .col(date(CashDeliveries::Date))
                    .col(decimal_len(CashDeliveries::JmdAmount, 15, 2).default(0))
                    .col(decimal_len(CashDeliveries::UsdAmount, 15, 2).default(0))
                    .col(boolean(CashDeliveries::Verified).default(false))
                    .col(integer_null(CashDeliveries::VerifiedBy))
                    .col(timestamp_with_time_zone_null(CashDeliveries::VerificationDate))
                    .to_owned(),
            )
            .await?;

        // One delivery per approved request
        manager
            .create_index(
                Index::create()
                    .name("idx_cash_deliveries_request")
                    .table(CashDeliveries::Table)
                    .col(CashDeliveries::CashRequestId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cash_deliveries_location_date")
                    .table(CashDeliveries::Table)
                    .col(CashDeliveries::LocationId)
                    .col(CashDeliveries::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CashDeliveries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CashRequests::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CashRequests {
    Table,
    Id,
    LocationId,
    RequestType,
    Status,
    RequestDate,
    DeliveryDate,
    Jmd5000,
    Jmd2000,
    Jmd1000,
    Jmd500,
    Jmd100,
    Jmd50,
    Usd100,
    Usd50,
    Usd20,
    Usd10,
    Usd1,
    TotalJmd,
    TotalUsd,
    ApprovedBy,
    ApprovedAt,
}

#[derive(Iden)]
enum CashDeliveries {
    Table,
    Id,
    LocationId,
    CashRequestId,
    Date,
    JmdAmount,
    UsdAmount,
    Verified,
    VerifiedBy,
    VerificationDate,
}
