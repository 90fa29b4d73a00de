//! Migration to create the locations table and per-location cash limits

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(pk_auto(Locations::Id))
                    .col(string(Locations::Name))
                    .col(text(Locations::Address).default(""))
                    .col(string_null(Locations::EftSystemName))
                    .col(string_null(Locations::RemoteServicesName))
                    .col(string_null(Locations::InsuranceLimitName))
                    .col(timestamp_with_time_zone(Locations::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Locations::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LocationLimits::Table)
                    .if_not_exists()
                    .col(pk_auto(LocationLimits::Id))
                    .col(integer(LocationLimits::LocationId))
                    .col(decimal_len(LocationLimits::InsuranceLimit, 15, 2))
                    .col(decimal_len(LocationLimits::EodVaultLimit, 15, 2))
                    .col(decimal_len(LocationLimits::WorkingDayLimit, 15, 2))
                    .to_owned(),
            )
            .await?;

        // One limits row per location
        manager
            .create_index(
                Index::create()
                    .name("idx_location_limits_location")
                    .table(LocationLimits::Table)
                    .col(LocationLimits::LocationId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LocationLimits::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Locations {
    Table,
    Id,
    Name,
    Address,
    EftSystemName,
    RemoteServicesName,
    InsuranceLimitName,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum LocationLimits {
    Table,
    Id,
    LocationId,
    InsuranceLimit,
    EodVaultLimit,
    WorkingDayLimit,
}
