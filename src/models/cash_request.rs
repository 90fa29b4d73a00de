//! Cash request submission/approval request and response models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::{cash_deliveries, cash_requests};
use crate::models::common::FieldError;
use crate::services::denominations::{self, JmdNotes, UsdNotes};
use crate::services::cash_request::RequestType;

/// Request to submit a new cash request.
///
/// Denominations arrive either as note counts or as currency values per
/// denomination (the paper form asks for values); a value field always wins
/// over its count and must be an exact multiple of the face value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitCashRequest {
    pub location_id: i32,
    /// Agent submitting the request
    pub agent_id: i32,
    #[serde(default)]
    pub request_type: Option<String>,
    pub delivery_date: NaiveDate,

    #[serde(flatten)]
    pub jmd: JmdNotes,
    #[serde(flatten)]
    pub usd: UsdNotes,

    #[serde(default)]
    pub jmd_5000_value: Option<Decimal>,
    #[serde(default)]
    pub jmd_2000_value: Option<Decimal>,
    #[serde(default)]
    pub jmd_1000_value: Option<Decimal>,
    #[serde(default)]
    pub jmd_500_value: Option<Decimal>,
    #[serde(default)]
    pub jmd_100_value: Option<Decimal>,
    #[serde(default)]
    pub jmd_50_value: Option<Decimal>,
    #[serde(default)]
    pub usd_100_value: Option<Decimal>,
    #[serde(default)]
    pub usd_50_value: Option<Decimal>,
    #[serde(default)]
    pub usd_20_value: Option<Decimal>,
    #[serde(default)]
    pub usd_10_value: Option<Decimal>,
    #[serde(default)]
    pub usd_1_value: Option<Decimal>,
}

impl SubmitCashRequest {
    /// Resolve submitted values/counts into validated note counts.
    ///
    /// Field-level errors for any value that is not a multiple of its face
    /// value, and a form-level error when no denomination was specified at
    /// all. Nothing is persisted when this fails.
    pub fn resolve_notes(&self) -> Result<(JmdNotes, UsdNotes, RequestType), Vec<FieldError>> {
        let mut errors = Vec::new();
        let mut jmd = self.jmd;
        let mut usd = self.usd;

        let mut resolve = |field: &str, value: Option<Decimal>, face: i64, count: &mut i32| {
            if let Some(value) = value {
                match denominations::note_count_from_value(value, face) {
                    Ok(resolved) => *count = resolved,
                    Err(message) => errors.push(FieldError::new(field, message)),
                }
            } else if *count < 0 {
                errors.push(FieldError::new(field, "Count must not be negative"));
            }
        };

        resolve("jmd_5000_value", self.jmd_5000_value, 5000, &mut jmd.jmd_5000);
        resolve("jmd_2000_value", self.jmd_2000_value, 2000, &mut jmd.jmd_2000);
        resolve("jmd_1000_value", self.jmd_1000_value, 1000, &mut jmd.jmd_1000);
        resolve("jmd_500_value", self.jmd_500_value, 500, &mut jmd.jmd_500);
        resolve("jmd_100_value", self.jmd_100_value, 100, &mut jmd.jmd_100);
        resolve("jmd_50_value", self.jmd_50_value, 50, &mut jmd.jmd_50);
        resolve("usd_100_value", self.usd_100_value, 100, &mut usd.usd_100);
        resolve("usd_50_value", self.usd_50_value, 50, &mut usd.usd_50);
        resolve("usd_20_value", self.usd_20_value, 20, &mut usd.usd_20);
        resolve("usd_10_value", self.usd_10_value, 10, &mut usd.usd_10);
        resolve("usd_1_value", self.usd_1_value, 1, &mut usd.usd_1);

        let request_type = match self.request_type.as_deref() {
            None | Some("") => RequestType::Regular,
            Some(raw) => match RequestType::from_str(raw) {
                Some(parsed) => parsed,
                None => {
                    errors.push(FieldError::new("request_type", "Must be regular or urgent"));
                    RequestType::Regular
                }
            },
        };

        if errors.is_empty() && jmd.total() == Decimal::ZERO && usd.total() == Decimal::ZERO {
            errors.push(FieldError::new(
                "denominations",
                "Please specify at least one denomination",
            ));
        }

        if errors.is_empty() {
            Ok((jmd, usd, request_type))
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApproveCashRequest {
    pub admin_id: i32,
    pub approved_jmd_amount: Decimal,
    pub approved_usd_amount: Decimal,
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RejectCashRequest {
    pub admin_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyDeliveryRequest {
    pub agent_id: i32,
    /// The verifying agent's own location; must match the delivery
    pub location_id: i32,
    /// The "I have counted the received cash" checkbox
    pub confirmed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListCashRequestsQuery {
    #[serde(default)]
    pub location_id: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApprovalResponse {
    pub request: cash_requests::Model,
    pub delivery: cash_deliveries::Model,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_values_resolve_to_counts() {
        let submit = SubmitCashRequest {
            location_id: 1,
            agent_id: 1,
            delivery_date: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
            jmd_5000_value: Some(dec!(25000)),
            jmd_1000_value: Some(dec!(3000)),
            ..Default::default()
        };
        let (jmd, usd, request_type) = submit.resolve_notes().unwrap();
        assert_eq!(jmd.jmd_5000, 5);
        assert_eq!(jmd.jmd_1000, 3);
        assert_eq!(usd, UsdNotes::default());
        assert_eq!(request_type, RequestType::Regular);
    }

    #[test]
    fn test_non_multiple_value_is_a_field_error() {
        let submit = SubmitCashRequest {
            location_id: 1,
            agent_id: 1,
            delivery_date: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
            jmd_5000_value: Some(dec!(5500)),
            usd_20_value: Some(dec!(40)),
            ..Default::default()
        };
        let errors = submit.resolve_notes().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "jmd_5000_value");
    }

    #[test]
    fn test_empty_request_is_rejected() {
        let submit = SubmitCashRequest {
            location_id: 1,
            agent_id: 1,
            delivery_date: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
            ..Default::default()
        };
        let errors = submit.resolve_notes().unwrap_err();
        assert_eq!(errors[0].field, "denominations");
    }

    #[test]
    fn test_counts_accepted_without_values() {
        let submit = SubmitCashRequest {
            location_id: 1,
            agent_id: 1,
            delivery_date: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
            jmd: JmdNotes {
                jmd_500: 10,
                ..Default::default()
            },
            ..Default::default()
        };
        let (jmd, _, _) = submit.resolve_notes().unwrap();
        assert_eq!(jmd.total(), dec!(5000));
    }

    #[test]
    fn test_unknown_request_type_is_rejected() {
        let submit = SubmitCashRequest {
            location_id: 1,
            agent_id: 1,
            delivery_date: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
            request_type: Some("sameday".to_string()),
            jmd_50_value: Some(dec!(100)),
            ..Default::default()
        };
        let errors = submit.resolve_notes().unwrap_err();
        assert_eq!(errors[0].field, "request_type");
    }
}
