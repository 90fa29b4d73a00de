//! End-of-day reconciliation recording
//!
//! Reports are keyed by (agent, location, processing_date); a resubmission
//! overwrites the stored report and replaces its line items. Concurrent
//! submissions for the same key race last-write-wins; that gap is accepted.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use crate::entities::{
    adjustments, daily_agent_data, denomination_breakdowns, eod_reports, prelude::*,
    teller_balances, teller_variances,
};
use crate::models::eod_report::{SubmitEodReport, TellerVarianceInput};
use crate::services::denominations::{CURRENCY_JMD, CURRENCY_USD};

/// Sum of the submitted teller variances (signed). Entries without a teller
/// number are not stored and do not count.
pub fn total_variance(variances: &[TellerVarianceInput]) -> Decimal {
    variances
        .iter()
        .filter(|v| !v.teller_number.trim().is_empty())
        .map(|v| v.variance)
        .fold(Decimal::ZERO, |acc, v| acc + v)
}

/// Record an EOD report and its line items.
///
/// Validation happens before this is called; from here on every write goes
/// through. Returns the stored report row.
pub async fn submit_eod_report(
    db: &DatabaseConnection,
    submission: &SubmitEodReport,
) -> Result<eod_reports::Model, Box<dyn std::error::Error + Send + Sync>> {
    let now = Utc::now();

    // Courier figures are only meaningful when cash actually left the branch
    let (courier_usd_amount, courier_usd_receipt, courier_jmd_amount, courier_jmd_receipt) =
        if submission.cash_sent_to_courier {
            (
                submission.courier_usd_amount,
                submission.courier_usd_receipt.clone(),
                submission.courier_jmd_amount,
                submission.courier_jmd_receipt.clone(),
            )
        } else {
            (None, None, None, None)
        };

    let existing = EodReports::find()
        .filter(eod_reports::Column::AgentId.eq(submission.agent_id))
        .filter(eod_reports::Column::LocationId.eq(submission.location_id))
        .filter(eod_reports::Column::ProcessingDate.eq(submission.processing_date))
        .one(db)
        .await?;
    let resubmission = existing.is_some();

    let report = match existing {
        Some(row) => {
            let mut active: eod_reports::ActiveModel = row.into();
            active.closing_balance = Set(submission.closing_balance);
            active.funds_from_bxp_webex = Set(submission.funds_from_bxp_webex);
            active.cash_sent_to_courier = Set(submission.cash_sent_to_courier);
            active.courier_usd_amount = Set(courier_usd_amount);
            active.courier_usd_receipt = Set(courier_usd_receipt);
            active.courier_jmd_amount = Set(courier_jmd_amount);
            active.courier_jmd_receipt = Set(courier_jmd_receipt);
            active.all_tellers_balanced = Set(submission.all_tellers_balanced);
            active.notes = Set(submission.notes.clone());
            active.confirmation = Set(submission.confirmation);
            active.submitted = Set(true);
            active.updated_at = Set(now.into());
            active.update(db).await?
        }
        None => {
            let row = eod_reports::ActiveModel {
                agent_id: Set(submission.agent_id),
                location_id: Set(submission.location_id),
                processing_date: Set(submission.processing_date),
                closing_balance: Set(submission.closing_balance),
                funds_from_bxp_webex: Set(submission.funds_from_bxp_webex),
                cash_sent_to_courier: Set(submission.cash_sent_to_courier),
                courier_usd_amount: Set(courier_usd_amount),
                courier_usd_receipt: Set(courier_usd_receipt),
                courier_jmd_amount: Set(courier_jmd_amount),
                courier_jmd_receipt: Set(courier_jmd_receipt),
                all_tellers_balanced: Set(submission.all_tellers_balanced),
                total_variance: Set(Decimal::ZERO),
                notes: Set(submission.notes.clone()),
                confirmation: Set(submission.confirmation),
                submitted: Set(true),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
                ..Default::default()
            };
            row.insert(db).await?
        }
    };

    upsert_breakdowns(db, report.id, submission).await?;
    replace_teller_balances(db, report.id, submission).await?;
    replace_adjustments(db, report.id, submission).await?;

    // Variance bookkeeping only runs when tellers did not balance; a
    // balanced resubmission keeps the previously stored total.
    let report = if submission.all_tellers_balanced {
        report
    } else {
        TellerVariances::delete_many()
            .filter(teller_variances::Column::EodReportId.eq(report.id))
            .exec(db)
            .await?;
        for variance in &submission.teller_variances {
            if variance.teller_number.trim().is_empty() {
                continue;
            }
            let row = teller_variances::ActiveModel {
                eod_report_id: Set(report.id),
                teller_number: Set(variance.teller_number.clone()),
                variance: Set(variance.variance),
                ..Default::default()
            };
            row.insert(db).await?;
        }

        let total = total_variance(&submission.teller_variances);
        let mut active: eod_reports::ActiveModel = report.into();
        active.total_variance = Set(total);
        active.update(db).await?
    };

    copy_closing_balance_to_daily_data(db, submission).await?;

    tracing::info!(
        "EOD report #{} {} for location {} on {} (agent {})",
        report.id,
        if resubmission { "updated" } else { "submitted" },
        report.location_id,
        report.processing_date,
        report.agent_id
    );
    Ok(report)
}

async fn upsert_breakdowns(
    db: &DatabaseConnection,
    report_id: i32,
    submission: &SubmitEodReport,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    for currency in [CURRENCY_JMD, CURRENCY_USD] {
        let existing = DenominationBreakdowns::find()
            .filter(denomination_breakdowns::Column::EodReportId.eq(report_id))
            .filter(denomination_breakdowns::Column::Currency.eq(currency))
            .one(db)
            .await?;

        let mut active: denomination_breakdowns::ActiveModel = match existing {
            Some(row) => row.into(),
            None => denomination_breakdowns::ActiveModel {
                eod_report_id: Set(report_id),
                currency: Set(currency.to_string()),
                ..Default::default()
            },
        };

        if currency == CURRENCY_JMD {
            let jmd = &submission.jmd_breakdown;
            active.jmd_5000_count = Set(jmd.jmd_5000_count);
            active.jmd_1000_count = Set(jmd.jmd_1000_count);
            active.jmd_500_count = Set(jmd.jmd_500_count);
            active.jmd_100_count = Set(jmd.jmd_100_count);
            active.jmd_50_count = Set(jmd.jmd_50_count);
            active.coins_amount = Set(jmd.coins_amount);
            active.usd_100_count = Set(0);
            active.usd_50_count = Set(0);
            active.usd_20_count = Set(0);
            active.usd_10_count = Set(0);
            active.small_bills_coins_amount = Set(Decimal::ZERO);
        } else {
            let usd = &submission.usd_breakdown;
            active.jmd_5000_count = Set(0);
            active.jmd_1000_count = Set(0);
            active.jmd_500_count = Set(0);
            active.jmd_100_count = Set(0);
            active.jmd_50_count = Set(0);
            active.coins_amount = Set(Decimal::ZERO);
            active.usd_100_count = Set(usd.usd_100_count);
            active.usd_50_count = Set(usd.usd_50_count);
            active.usd_20_count = Set(usd.usd_20_count);
            active.usd_10_count = Set(usd.usd_10_count);
            active.small_bills_coins_amount = Set(usd.small_bills_coins_amount);
        }

        active.save(db).await?;
    }
    Ok(())
}

async fn replace_teller_balances(
    db: &DatabaseConnection,
    report_id: i32,
    submission: &SubmitEodReport,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    TellerBalances::delete_many()
        .filter(teller_balances::Column::EodReportId.eq(report_id))
        .exec(db)
        .await?;

    for teller in &submission.teller_balances {
        if teller.teller_name.trim().is_empty() {
            continue;
        }
        let row = teller_balances::ActiveModel {
            eod_report_id: Set(report_id),
            teller_name: Set(teller.teller_name.clone()),
            jmd_amount: Set(teller.jmd_amount),
            usd_amount: Set(teller.usd_amount),
            ..Default::default()
        };
        row.insert(db).await?;
    }
    Ok(())
}

async fn replace_adjustments(
    db: &DatabaseConnection,
    report_id: i32,
    submission: &SubmitEodReport,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    Adjustments::delete_many()
        .filter(adjustments::Column::EodReportId.eq(report_id))
        .exec(db)
        .await?;

    for adjustment in &submission.adjustments {
        let row = adjustments::ActiveModel {
            eod_report_id: Set(report_id),
            kind: Set(adjustment.kind.clone()),
            description: Set(adjustment.description.clone()),
            count: Set(adjustment.count),
            amount: Set(adjustment.amount),
            currency: Set(adjustment.currency.clone()),
            ..Default::default()
        };
        row.insert(db).await?;
    }
    Ok(())
}

/// When today's report comes in, mirror the closing balance onto the daily
/// position row. Derived fields are left alone.
async fn copy_closing_balance_to_daily_data(
    db: &DatabaseConnection,
    submission: &SubmitEodReport,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if submission.processing_date != Utc::now().date_naive() {
        return Ok(());
    }

    let daily = DailyAgentData::find()
        .filter(daily_agent_data::Column::LocationId.eq(submission.location_id))
        .filter(daily_agent_data::Column::Date.eq(submission.processing_date))
        .one(db)
        .await?;

    if let Some(row) = daily {
        let mut active: daily_agent_data::ActiveModel = row.into();
        active.closing_balance = Set(submission.closing_balance);
        active.update(db).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn variance(teller: &str, amount: Decimal) -> TellerVarianceInput {
        TellerVarianceInput {
            teller_number: teller.to_string(),
            variance: amount,
        }
    }

    #[test]
    fn test_total_variance_sums_signed_amounts() {
        let variances = vec![variance("01", dec!(-50.00)), variance("02", dec!(75.00))];
        assert_eq!(total_variance(&variances), dec!(25.00));
    }

    #[test]
    fn test_total_variance_empty_is_zero() {
        assert_eq!(total_variance(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_total_variance_all_shortages() {
        let variances = vec![variance("01", dec!(-10.25)), variance("02", dec!(-0.75))];
        assert_eq!(total_variance(&variances), dec!(-11.00));
    }
}
