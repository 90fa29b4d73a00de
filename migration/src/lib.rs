pub use sea_orm_migration::prelude::*;

mod m20260712_000001_create_locations;
mod m20260712_000002_create_cash_requests;
mod m20260712_000003_create_daily_agent_data;
mod m20260712_000004_create_eod_reports;
mod m20260712_000005_create_emergency_access;
mod m20260712_000006_create_system_settings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260712_000001_create_locations::Migration),
            Box::new(m20260712_000002_create_cash_requests::Migration),
            Box::new(m20260712_000003_create_daily_agent_data::Migration),
            Box::new(m20260712_000004_create_eod_reports::Migration),
            Box::new(m20260712_000005_create_emergency_access::Migration),
            Box::new(m20260712_000006_create_system_settings::Migration),
        ]
    }
}
