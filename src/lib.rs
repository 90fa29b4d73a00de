// src/lib.rs

use sea_orm::DatabaseConnection;
use services::providers::ProviderService;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub providers: ProviderService,
}

pub mod entities {
    pub mod prelude;
    pub mod adjustments;
    pub mod cash_deliveries;
    pub mod cash_requests;
    pub mod daily_agent_data;
    pub mod denomination_breakdowns;
    pub mod emergency_access_requests;
    pub mod eod_reports;
    pub mod location_limits;
    pub mod locations;
    pub mod system_settings;
    pub mod teller_balances;
    pub mod teller_variances;
}

pub mod services {
    pub mod cash_request;
    pub mod courier;
    pub mod daily_position;
    pub mod denominations;
    pub mod emergency_access;
    pub mod eod_report;
    pub mod limits;
    pub mod providers;
    pub mod system_settings;
}

pub mod models {
    pub mod cash_request;
    pub mod common;
    pub mod daily_position;
    pub mod emergency_access;
    pub mod eod_report;
    pub mod location;
    pub mod settings;
}

pub mod handlers {
    pub mod cash_request;
    pub mod daily_position;
    pub mod emergency_access;
    pub mod eod_report;
    pub mod location;
    pub mod settings;
}

pub mod jobs;
