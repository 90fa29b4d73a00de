//! Migration to create the system_settings singleton table
//!
//! Single row (id = 1); readers fall back to defaults when it is absent.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SystemSettings::Table)
                    .if_not_exists()
                    .col(integer(SystemSettings::Id).primary_key())
                    .col(boolean(SystemSettings::CutoffWindowEnabled).default(true))
                    .col(integer(SystemSettings::CutoffHour).default(15))
                    .col(integer(SystemSettings::CutoffMinute).default(0))
                    .col(integer(SystemSettings::BusinessHoursStart).default(8))
                    .col(integer(SystemSettings::BusinessHoursStartMinute).default(0))
                    .col(integer(SystemSettings::EmergencyAccessDuration).default(30))
                    .col(integer_null(SystemSettings::UpdatedBy))
                    .col(timestamp_with_time_zone(SystemSettings::LastUpdated).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SystemSettings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SystemSettings {
    Table,
    Id,
    CutoffWindowEnabled,
    CutoffHour,
    CutoffMinute,
    BusinessHoursStart,
    BusinessHoursStartMinute,
    EmergencyAccessDuration,
    UpdatedBy,
    LastUpdated,
}
