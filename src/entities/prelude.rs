pub use super::adjustments::Entity as Adjustments;
pub use super::cash_deliveries::Entity as CashDeliveries;
pub use super::cash_requests::Entity as CashRequests;
pub use super::daily_agent_data::Entity as DailyAgentData;
pub use super::denomination_breakdowns::Entity as DenominationBreakdowns;
pub use super::emergency_access_requests::Entity as EmergencyAccessRequests;
pub use super::eod_reports::Entity as EodReports;
pub use super::location_limits::Entity as LocationLimits;
pub use super::locations::Entity as Locations;
pub use super::system_settings::Entity as SystemSettings;
pub use super::teller_balances::Entity as TellerBalances;
pub use super::teller_variances::Entity as TellerVariances;
