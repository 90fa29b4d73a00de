//! Limit evaluation against a location's configured thresholds
//!
//! A balance is compliant while it is at or below a limit; only a strictly
//! greater amount trips the flag. Locations without a limits row have breach
//! detection disabled entirely.

use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Serialize;

use crate::entities::{location_limits, prelude::*};

/// The three configured thresholds for one location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitSet {
    pub insurance_limit: Decimal,
    pub eod_vault_limit: Decimal,
    pub working_day_limit: Decimal,
}

impl From<&location_limits::Model> for LimitSet {
    fn from(model: &location_limits::Model) -> Self {
        Self {
            insurance_limit: model.insurance_limit,
            eod_vault_limit: model.eod_vault_limit,
            working_day_limit: model.working_day_limit,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LimitBreaches {
    pub exceeds_insurance_limit: bool,
    pub exceeds_eod_limit: bool,
    pub exceeds_working_day_limit: bool,
}

/// Evaluate an amount against a location's limits.
///
/// Callers decide which balance they are evaluating (projected next-day
/// amount at calculation time, closing balance on dashboard reads) and pass
/// it explicitly.
pub fn evaluate(amount: Decimal, limits: Option<&LimitSet>) -> LimitBreaches {
    match limits {
        Some(limits) => LimitBreaches {
            exceeds_insurance_limit: amount > limits.insurance_limit,
            exceeds_eod_limit: amount > limits.eod_vault_limit,
            exceeds_working_day_limit: amount > limits.working_day_limit,
        },
        None => LimitBreaches::default(),
    }
}

/// Fetch a location's limits, or None when breach detection is unconfigured.
/// Read-only; never creates the row.
pub async fn limits_for_location(
    db: &DatabaseConnection,
    location_id: i32,
) -> Result<Option<LimitSet>, Box<dyn std::error::Error + Send + Sync>> {
    let row = LocationLimits::find()
        .filter(location_limits::Column::LocationId.eq(location_id))
        .one(db)
        .await?;

    Ok(row.as_ref().map(LimitSet::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn limits() -> LimitSet {
        LimitSet {
            insurance_limit: dec!(5000000),
            eod_vault_limit: dec!(3000000),
            working_day_limit: dec!(2000000),
        }
    }

    #[test]
    fn test_no_limits_means_no_breaches() {
        let breaches = evaluate(dec!(99999999), None);
        assert_eq!(breaches, LimitBreaches::default());
    }

    #[test]
    fn test_amount_below_all_limits() {
        let breaches = evaluate(dec!(1000000), Some(&limits()));
        assert!(!breaches.exceeds_insurance_limit);
        assert!(!breaches.exceeds_eod_limit);
        assert!(!breaches.exceeds_working_day_limit);
    }

    #[test]
    fn test_amount_between_limits() {
        let breaches = evaluate(dec!(2500000), Some(&limits()));
        assert!(!breaches.exceeds_insurance_limit);
        assert!(!breaches.exceeds_eod_limit);
        assert!(breaches.exceeds_working_day_limit);
    }

    #[test]
    fn test_amount_above_all_limits() {
        let breaches = evaluate(dec!(5000000.01), Some(&limits()));
        assert!(breaches.exceeds_insurance_limit);
        assert!(breaches.exceeds_eod_limit);
        assert!(breaches.exceeds_working_day_limit);
    }

    #[test]
    fn test_equal_to_limit_is_compliant() {
        let breaches = evaluate(dec!(5000000), Some(&limits()));
        assert!(!breaches.exceeds_insurance_limit);
        let breaches = evaluate(dec!(2000000), Some(&limits()));
        assert!(!breaches.exceeds_working_day_limit);
    }

    #[test]
    fn test_negative_amount_is_compliant() {
        let breaches = evaluate(dec!(-10000), Some(&limits()));
        assert_eq!(breaches, LimitBreaches::default());
    }
}
