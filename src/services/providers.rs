//! Clients for the external balance and payout systems
//!
//! Three lookups feed the daily position calculation: the EFT ledger balance,
//! the 3pm payout from Remote Services, and the historical average payout.
//! Each returns a single decimal figure for a location and date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default trailing window for the average payout, in days
pub const AVERAGE_PAYOUT_WINDOW_DAYS: u16 = 90;

#[derive(Clone)]
pub struct ProviderService {
    /// Unused until the stubbed lookups below make real HTTP calls
    #[allow(dead_code)]
    client: reqwest::Client,
    eft_base_url: String,
    remote_services_base_url: String,
}

impl ProviderService {
    pub fn new(eft_base_url: String, remote_services_base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            eft_base_url,
            remote_services_base_url,
        }
    }

    /// Build from EFT_BASE_URL / REMOTE_SERVICES_BASE_URL environment
    /// variables, with staging endpoints as fallback.
    pub fn from_env() -> Self {
        let eft_base_url = std::env::var("EFT_BASE_URL")
            .unwrap_or_else(|_| "https://eft.example.internal".to_string());
        let remote_services_base_url = std::env::var("REMOTE_SERVICES_BASE_URL")
            .unwrap_or_else(|_| "https://remote-services.example.internal".to_string());
        Self::new(eft_base_url, remote_services_base_url)
    }

    /// End-of-day balance for a location from the EFT ledger.
    ///
    /// TODO: wire up GET {eft_base_url}/balances/{location}/{date} once the
    /// EFT gateway is reachable from this network; fixed figure until then.
    pub async fn eft_balance(&self, location_id: i32, date: NaiveDate) -> Decimal {
        tracing::debug!(
            "EFT balance lookup for location {} on {} via {} (stub)",
            location_id,
            date,
            self.eft_base_url
        );
        dec!(10000.00)
    }

    /// Payout as of 3pm from the Remote Services disbursement system.
    pub async fn payout_at_3pm(&self, location_id: i32, date: NaiveDate) -> Decimal {
        tracing::debug!(
            "3pm payout lookup for location {} on {} via {} (stub)",
            location_id,
            date,
            self.remote_services_base_url
        );
        dec!(5000.00)
    }

    /// Trailing average payout for a location.
    ///
    /// `seasonal` switches to the same calendar window of the previous year
    /// instead of the trailing window.
    pub async fn average_payout(
        &self,
        location_id: i32,
        date: NaiveDate,
        window_days: u16,
        seasonal: bool,
    ) -> Decimal {
        if seasonal {
            tracing::debug!(
                "Seasonal average payout lookup for location {} around {} (stub)",
                location_id,
                date
            );
        } else {
            tracing::debug!(
                "{}-day average payout lookup for location {} up to {} (stub)",
                window_days,
                location_id,
                date
            );
        }
        dec!(7500.00)
    }
}
