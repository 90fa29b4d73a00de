//! EOD report submission request and response models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::{
    adjustments, denomination_breakdowns, eod_reports, teller_balances, teller_variances,
};
use crate::models::common::FieldError;

fn default_true() -> bool {
    true
}

/// Counted JMD notes on the submitted report
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct JmdBreakdownInput {
    #[serde(default)]
    pub jmd_5000_count: i32,
    #[serde(default)]
    pub jmd_1000_count: i32,
    #[serde(default)]
    pub jmd_500_count: i32,
    #[serde(default)]
    pub jmd_100_count: i32,
    #[serde(default)]
    pub jmd_50_count: i32,
    #[serde(default)]
    pub coins_amount: Decimal,
}

/// Counted USD notes on the submitted report
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct UsdBreakdownInput {
    #[serde(default)]
    pub usd_100_count: i32,
    #[serde(default)]
    pub usd_50_count: i32,
    #[serde(default)]
    pub usd_20_count: i32,
    #[serde(default)]
    pub usd_10_count: i32,
    #[serde(default)]
    pub small_bills_coins_amount: Decimal,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TellerBalanceInput {
    pub teller_name: String,
    #[serde(default)]
    pub jmd_amount: Decimal,
    #[serde(default)]
    pub usd_amount: Decimal,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TellerVarianceInput {
    pub teller_number: String,
    pub variance: Decimal,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdjustmentInput {
    /// "denomination", "overage" or "shortage"
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_count")]
    pub count: i32,
    pub amount: Decimal,
    /// "JMD" or "USD"
    pub currency: String,
}

fn default_count() -> i32 {
    1
}

/// Full EOD report submission; resubmitting for the same
/// (agent, location, processing_date) overwrites the earlier report.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitEodReport {
    pub agent_id: i32,
    pub location_id: i32,
    pub processing_date: NaiveDate,
    pub closing_balance: Decimal,
    #[serde(default)]
    pub funds_from_bxp_webex: Decimal,
    #[serde(default)]
    pub cash_sent_to_courier: bool,
    #[serde(default)]
    pub courier_usd_amount: Option<Decimal>,
    #[serde(default)]
    pub courier_usd_receipt: Option<String>,
    #[serde(default)]
    pub courier_jmd_amount: Option<Decimal>,
    #[serde(default)]
    pub courier_jmd_receipt: Option<String>,
    #[serde(default = "default_true")]
    pub all_tellers_balanced: bool,
    #[serde(default)]
    pub notes: String,
    /// "The information provided is accurate" checkbox; required
    #[serde(default)]
    pub confirmation: bool,
    #[serde(default)]
    pub jmd_breakdown: JmdBreakdownInput,
    #[serde(default)]
    pub usd_breakdown: UsdBreakdownInput,
    #[serde(default)]
    pub teller_balances: Vec<TellerBalanceInput>,
    #[serde(default)]
    pub teller_variances: Vec<TellerVarianceInput>,
    #[serde(default)]
    pub adjustments: Vec<AdjustmentInput>,
}

impl SubmitEodReport {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if !self.confirmation {
            errors.push(FieldError::new(
                "confirmation",
                "The report must be confirmed before submission",
            ));
        }
        if self.closing_balance.is_sign_negative() {
            errors.push(FieldError::new(
                "closing_balance",
                "Closing balance must not be negative",
            ));
        }

        let counts = [
            ("jmd_5000_count", self.jmd_breakdown.jmd_5000_count),
            ("jmd_1000_count", self.jmd_breakdown.jmd_1000_count),
            ("jmd_500_count", self.jmd_breakdown.jmd_500_count),
            ("jmd_100_count", self.jmd_breakdown.jmd_100_count),
            ("jmd_50_count", self.jmd_breakdown.jmd_50_count),
            ("usd_100_count", self.usd_breakdown.usd_100_count),
            ("usd_50_count", self.usd_breakdown.usd_50_count),
            ("usd_20_count", self.usd_breakdown.usd_20_count),
            ("usd_10_count", self.usd_breakdown.usd_10_count),
        ];
        for (field, count) in counts {
            if count < 0 {
                errors.push(FieldError::new(field, "Note count must not be negative"));
            }
        }

        for adjustment in &self.adjustments {
            if !matches!(adjustment.kind.as_str(), "denomination" | "overage" | "shortage") {
                errors.push(FieldError::new(
                    "adjustments",
                    format!("Unknown adjustment kind '{}'", adjustment.kind),
                ));
            }
            if !matches!(adjustment.currency.as_str(), "JMD" | "USD") {
                errors.push(FieldError::new(
                    "adjustments",
                    format!("Unknown adjustment currency '{}'", adjustment.currency),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListEodReportsQuery {
    #[serde(default)]
    pub location_id: Option<i32>,
    #[serde(default)]
    pub agent_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct EodReportDetailResponse {
    pub report: eod_reports::Model,
    pub denomination_breakdowns: Vec<denomination_breakdowns::Model>,
    pub teller_balances: Vec<teller_balances::Model>,
    pub teller_variances: Vec<teller_variances::Model>,
    pub adjustments: Vec<adjustments::Model>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn submission() -> SubmitEodReport {
        SubmitEodReport {
            agent_id: 1,
            location_id: 1,
            processing_date: NaiveDate::from_ymd_opt(2026, 7, 13).unwrap(),
            closing_balance: dec!(150000),
            funds_from_bxp_webex: Decimal::ZERO,
            cash_sent_to_courier: false,
            courier_usd_amount: None,
            courier_usd_receipt: None,
            courier_jmd_amount: None,
            courier_jmd_receipt: None,
            all_tellers_balanced: true,
            notes: String::new(),
            confirmation: true,
            jmd_breakdown: JmdBreakdownInput::default(),
            usd_breakdown: UsdBreakdownInput::default(),
            teller_balances: vec![],
            teller_variances: vec![],
            adjustments: vec![],
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(submission().validate().is_ok());
    }

    #[test]
    fn test_unconfirmed_submission_fails() {
        let mut sub = submission();
        sub.confirmation = false;
        let errors = sub.validate().unwrap_err();
        assert_eq!(errors[0].field, "confirmation");
    }

    #[test]
    fn test_negative_count_fails() {
        let mut sub = submission();
        sub.jmd_breakdown.jmd_500_count = -1;
        let errors = sub.validate().unwrap_err();
        assert_eq!(errors[0].field, "jmd_500_count");
    }

    #[test]
    fn test_unknown_adjustment_kind_fails() {
        let mut sub = submission();
        sub.adjustments.push(AdjustmentInput {
            kind: "rounding".to_string(),
            description: String::new(),
            count: 1,
            amount: dec!(5),
            currency: "JMD".to_string(),
        });
        assert!(sub.validate().is_err());
    }
}
