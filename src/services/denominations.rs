//! Note denomination tables and face-value arithmetic
//!
//! Two note sets are in circulation: JMD (5000/2000/1000/500/100/50) and
//! USD (100/50/20/10/1). Request totals are always Σ count × face value,
//! recomputed before every persist.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::denomination_breakdowns;

pub const CURRENCY_JMD: &str = "JMD";
pub const CURRENCY_USD: &str = "USD";

/// JMD note counts on a cash request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JmdNotes {
    #[serde(default)]
    pub jmd_5000: i32,
    #[serde(default)]
    pub jmd_2000: i32,
    #[serde(default)]
    pub jmd_1000: i32,
    #[serde(default)]
    pub jmd_500: i32,
    #[serde(default)]
    pub jmd_100: i32,
    #[serde(default)]
    pub jmd_50: i32,
}

impl JmdNotes {
    pub fn total(&self) -> Decimal {
        Decimal::from(
            self.jmd_5000 as i64 * 5000
                + self.jmd_2000 as i64 * 2000
                + self.jmd_1000 as i64 * 1000
                + self.jmd_500 as i64 * 500
                + self.jmd_100 as i64 * 100
                + self.jmd_50 as i64 * 50,
        )
    }
}

/// USD note counts on a cash request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsdNotes {
    #[serde(default)]
    pub usd_100: i32,
    #[serde(default)]
    pub usd_50: i32,
    #[serde(default)]
    pub usd_20: i32,
    #[serde(default)]
    pub usd_10: i32,
    #[serde(default)]
    pub usd_1: i32,
}

impl UsdNotes {
    pub fn total(&self) -> Decimal {
        Decimal::from(
            self.usd_100 as i64 * 100
                + self.usd_50 as i64 * 50
                + self.usd_20 as i64 * 20
                + self.usd_10 as i64 * 10
                + self.usd_1 as i64,
        )
    }
}

/// Convert a submitted denomination value into a note count.
///
/// The value must be an exact non-negative multiple of the face value;
/// anything else is reported back against the submitting field.
pub fn note_count_from_value(value: Decimal, face_value: i64) -> Result<i32, String> {
    let face = Decimal::from(face_value);
    if value.is_sign_negative() {
        return Err(format!("Value must not be negative (got {})", value));
    }
    if value % face != Decimal::ZERO {
        return Err(format!("Value must be a multiple of ${}", face_value));
    }
    let count = value / face;
    Ok(count.to_i32().unwrap_or(i32::MAX))
}

/// Face-value total of a counted breakdown, in the breakdown's own currency.
///
/// JMD rows sum the jmd_* counts plus coins; USD rows sum the usd_* counts
/// plus small bills and coins. Fields of the other currency are ignored.
pub fn breakdown_total(breakdown: &denomination_breakdowns::Model) -> Decimal {
    match breakdown.currency.as_str() {
        CURRENCY_JMD => {
            Decimal::from(
                breakdown.jmd_5000_count as i64 * 5000
                    + breakdown.jmd_1000_count as i64 * 1000
                    + breakdown.jmd_500_count as i64 * 500
                    + breakdown.jmd_100_count as i64 * 100
                    + breakdown.jmd_50_count as i64 * 50,
            ) + breakdown.coins_amount
        }
        CURRENCY_USD => {
            Decimal::from(
                breakdown.usd_100_count as i64 * 100
                    + breakdown.usd_50_count as i64 * 50
                    + breakdown.usd_20_count as i64 * 20
                    + breakdown.usd_10_count as i64 * 10,
            ) + breakdown.small_bills_coins_amount
        }
        _ => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn breakdown(currency: &str) -> denomination_breakdowns::Model {
        denomination_breakdowns::Model {
            id: 1,
            eod_report_id: 1,
            currency: currency.to_string(),
            jmd_5000_count: 2,
            jmd_1000_count: 1,
            jmd_500_count: 0,
            jmd_100_count: 3,
            jmd_50_count: 0,
            coins_amount: dec!(25.50),
            usd_100_count: 4,
            usd_50_count: 0,
            usd_20_count: 2,
            usd_10_count: 1,
            small_bills_coins_amount: dec!(7.25),
        }
    }

    #[test]
    fn test_jmd_request_total() {
        let notes = JmdNotes {
            jmd_5000: 2,
            jmd_1000: 3,
            ..Default::default()
        };
        assert_eq!(notes.total(), dec!(13000));
    }

    #[test]
    fn test_usd_request_total() {
        let notes = UsdNotes {
            usd_100: 1,
            usd_20: 2,
            usd_1: 5,
            ..Default::default()
        };
        assert_eq!(notes.total(), dec!(145));
    }

    #[test]
    fn test_empty_totals_are_zero() {
        assert_eq!(JmdNotes::default().total(), Decimal::ZERO);
        assert_eq!(UsdNotes::default().total(), Decimal::ZERO);
    }

    #[test]
    fn test_note_count_from_value() {
        assert_eq!(note_count_from_value(dec!(25000), 5000), Ok(5));
        assert_eq!(note_count_from_value(dec!(0), 1000), Ok(0));
    }

    #[test]
    fn test_note_count_rejects_non_multiple() {
        assert!(note_count_from_value(dec!(5500), 5000).is_err());
        assert!(note_count_from_value(dec!(0.50), 1).is_err());
    }

    #[test]
    fn test_note_count_rejects_negative() {
        assert!(note_count_from_value(dec!(-5000), 5000).is_err());
    }

    #[test]
    fn test_jmd_breakdown_total_ignores_usd_fields() {
        // 2x5000 + 1x1000 + 3x100 + coins
        assert_eq!(breakdown_total(&breakdown(CURRENCY_JMD)), dec!(11325.50));
    }

    #[test]
    fn test_usd_breakdown_total_ignores_jmd_fields() {
        // 4x100 + 2x20 + 1x10 + small bills
        assert_eq!(breakdown_total(&breakdown(CURRENCY_USD)), dec!(457.25));
    }

    #[test]
    fn test_unknown_currency_totals_zero() {
        assert_eq!(breakdown_total(&breakdown("GBP")), Decimal::ZERO);
    }
}
