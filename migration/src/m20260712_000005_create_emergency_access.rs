//! Migration to create emergency_access_requests

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmergencyAccessRequests::Table)
                    .if_not_exists()
                    .col(pk_auto(EmergencyAccessRequests::Id))
                    .col(integer(EmergencyAccessRequests::AgentId))
                    .col(integer(EmergencyAccessRequests::LocationId))
                    .col(timestamp_with_time_zone(EmergencyAccessRequests::RequestedAt).default(Expr::current_timestamp()))
                    .col(text(EmergencyAccessRequests::Reason))
                    .col(string(EmergencyAccessRequests::Status).default("pending"))
                    .col(integer_null(EmergencyAccessRequests::ReviewedBy))
                    .col(timestamp_with_time_zone_null(EmergencyAccessRequests::ReviewedAt))
                    .col(timestamp_with_time_zone_null(EmergencyAccessRequests::AccessGrantedUntil))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_emergency_access_agent_status")
                    .table(EmergencyAccessRequests::Table)
                    .col(EmergencyAccessRequests::AgentId)
                    .col(EmergencyAccessRequests::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmergencyAccessRequests::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum EmergencyAccessRequests {
    Table,
    Id,
    AgentId,
    LocationId,
    RequestedAt,
    Reason,
    Status,
    ReviewedBy,
    ReviewedAt,
    AccessGrantedUntil,
}
