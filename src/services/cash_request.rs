//! Cash request workflow
//!
//! pending -> approved -> delivered, or pending -> rejected. Approval writes
//! the status change and the new delivery record in one transaction so a
//! request can never end up approved without its delivery.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

use crate::entities::{cash_deliveries, cash_requests, prelude::*};
use crate::services::denominations::{JmdNotes, UsdNotes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Delivered,
    Rejected,
}

impl RequestStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(RequestStatus::Pending),
            "approved" => Some(RequestStatus::Approved),
            "delivered" => Some(RequestStatus::Delivered),
            "rejected" => Some(RequestStatus::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Delivered => "delivered",
            RequestStatus::Rejected => "rejected",
        }
    }

    /// Allowed transitions; approved/delivered/rejected are otherwise final.
    pub fn can_become(&self, next: RequestStatus) -> bool {
        matches!(
            (self, next),
            (RequestStatus::Pending, RequestStatus::Approved)
                | (RequestStatus::Pending, RequestStatus::Rejected)
                | (RequestStatus::Approved, RequestStatus::Delivered)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    Regular,
    Urgent,
}

impl RequestType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "regular" => Some(RequestType::Regular),
            "urgent" => Some(RequestType::Urgent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Regular => "regular",
            RequestType::Urgent => "urgent",
        }
    }
}

#[derive(Debug)]
pub enum WorkflowError {
    NotFound(String),
    InvalidState(String),
    LocationMismatch(String),
    Database(String),
}

impl std::fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowError::NotFound(msg) => write!(f, "Not found: {}", msg),
            WorkflowError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            WorkflowError::LocationMismatch(msg) => write!(f, "Location mismatch: {}", msg),
            WorkflowError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for WorkflowError {}

impl From<sea_orm::DbErr> for WorkflowError {
    fn from(err: sea_orm::DbErr) -> Self {
        WorkflowError::Database(err.to_string())
    }
}

/// Persist a new cash request.
///
/// Totals are recomputed from the note counts here; whatever totals the
/// caller may have sent are ignored.
pub async fn submit_cash_request(
    db: &DatabaseConnection,
    location_id: i32,
    request_type: RequestType,
    delivery_date: NaiveDate,
    jmd: &JmdNotes,
    usd: &UsdNotes,
) -> Result<cash_requests::Model, WorkflowError> {
    let request = cash_requests::ActiveModel {
        location_id: Set(location_id),
        request_type: Set(request_type.as_str().to_string()),
        status: Set(RequestStatus::Pending.as_str().to_string()),
        request_date: Set(Utc::now().into()),
        delivery_date: Set(delivery_date),
        jmd_5000: Set(jmd.jmd_5000),
        jmd_2000: Set(jmd.jmd_2000),
        jmd_1000: Set(jmd.jmd_1000),
        jmd_500: Set(jmd.jmd_500),
        jmd_100: Set(jmd.jmd_100),
        jmd_50: Set(jmd.jmd_50),
        usd_100: Set(usd.usd_100),
        usd_50: Set(usd.usd_50),
        usd_20: Set(usd.usd_20),
        usd_10: Set(usd.usd_10),
        usd_1: Set(usd.usd_1),
        total_jmd: Set(jmd.total()),
        total_usd: Set(usd.total()),
        ..Default::default()
    };

    let stored = request.insert(db).await?;
    tracing::info!(
        "Cash request #{} submitted for location {} (JMD {}, USD {})",
        stored.id,
        location_id,
        stored.total_jmd,
        stored.total_usd
    );
    Ok(stored)
}

/// Approve a pending request and schedule its delivery.
///
/// Both writes happen in one transaction; on any failure the request stays
/// pending and no delivery exists.
pub async fn approve_cash_request(
    db: &DatabaseConnection,
    request_id: i32,
    admin_id: i32,
    approved_jmd_amount: Decimal,
    approved_usd_amount: Decimal,
    delivery_date: Option<NaiveDate>,
) -> Result<(cash_requests::Model, cash_deliveries::Model), WorkflowError> {
    let txn = db.begin().await?;

    let request = CashRequests::find_by_id(request_id)
        .one(&txn)
        .await?
        .ok_or_else(|| WorkflowError::NotFound(format!("cash request {}", request_id)))?;

    let status = RequestStatus::from_str(&request.status)
        .ok_or_else(|| WorkflowError::InvalidState(format!("unknown status '{}'", request.status)))?;
    if !status.can_become(RequestStatus::Approved) {
        return Err(WorkflowError::InvalidState(format!(
            "cash request {} is {}, only pending requests can be approved",
            request_id, request.status
        )));
    }

    let delivery_date = delivery_date.unwrap_or(request.delivery_date);
    let location_id = request.location_id;

    let mut active: cash_requests::ActiveModel = request.into();
    active.status = Set(RequestStatus::Approved.as_str().to_string());
    active.delivery_date = Set(delivery_date);
    active.approved_by = Set(Some(admin_id));
    active.approved_at = Set(Some(Utc::now().into()));
    let request = active.update(&txn).await?;

    let delivery = cash_deliveries::ActiveModel {
        location_id: Set(location_id),
        cash_request_id: Set(Some(request.id)),
        date: Set(delivery_date),
        jmd_amount: Set(approved_jmd_amount),
        usd_amount: Set(approved_usd_amount),
        verified: Set(false),
        ..Default::default()
    };
    let delivery = delivery.insert(&txn).await?;

    txn.commit().await?;

    tracing::info!(
        "Cash request #{} approved by admin {}; delivery #{} scheduled for {}",
        request.id,
        admin_id,
        delivery.id,
        delivery_date
    );
    Ok((request, delivery))
}

/// Reject a pending request. Terminal; no delivery is created.
pub async fn reject_cash_request(
    db: &DatabaseConnection,
    request_id: i32,
    admin_id: i32,
) -> Result<cash_requests::Model, WorkflowError> {
    let request = CashRequests::find_by_id(request_id)
        .one(db)
        .await?
        .ok_or_else(|| WorkflowError::NotFound(format!("cash request {}", request_id)))?;

    let status = RequestStatus::from_str(&request.status)
        .ok_or_else(|| WorkflowError::InvalidState(format!("unknown status '{}'", request.status)))?;
    if !status.can_become(RequestStatus::Rejected) {
        return Err(WorkflowError::InvalidState(format!(
            "cash request {} is {}, only pending requests can be rejected",
            request_id, request.status
        )));
    }

    let mut active: cash_requests::ActiveModel = request.into();
    active.status = Set(RequestStatus::Rejected.as_str().to_string());
    active.approved_by = Set(Some(admin_id));
    active.approved_at = Set(Some(Utc::now().into()));
    let request = active.update(db).await?;

    tracing::info!("Cash request #{} rejected by admin {}", request.id, admin_id);
    Ok(request)
}

/// Confirm receipt of a delivery.
///
/// Only an agent of the delivery's own location may verify. Marks the
/// delivery verified and moves the originating request to delivered.
pub async fn verify_cash_delivery(
    db: &DatabaseConnection,
    delivery_id: i32,
    agent_id: i32,
    agent_location_id: i32,
) -> Result<cash_deliveries::Model, WorkflowError> {
    let txn = db.begin().await?;

    let delivery = CashDeliveries::find_by_id(delivery_id)
        .one(&txn)
        .await?
        .ok_or_else(|| WorkflowError::NotFound(format!("cash delivery {}", delivery_id)))?;

    if delivery.location_id != agent_location_id {
        return Err(WorkflowError::LocationMismatch(
            "deliveries can only be verified by an agent of the receiving location".to_string(),
        ));
    }
    if delivery.verified {
        return Err(WorkflowError::InvalidState(format!(
            "cash delivery {} is already verified",
            delivery_id
        )));
    }

    let request_id = delivery.cash_request_id;

    let mut active: cash_deliveries::ActiveModel = delivery.into();
    active.verified = Set(true);
    active.verified_by = Set(Some(agent_id));
    active.verification_date = Set(Some(Utc::now().into()));
    let delivery = active.update(&txn).await?;

    if let Some(request_id) = request_id {
        if let Some(request) = CashRequests::find_by_id(request_id).one(&txn).await? {
            let status = RequestStatus::from_str(&request.status);
            if status.is_some_and(|s| s.can_become(RequestStatus::Delivered)) {
                let mut active: cash_requests::ActiveModel = request.into();
                active.status = Set(RequestStatus::Delivered.as_str().to_string());
                active.update(&txn).await?;
            }
        }
    }

    txn.commit().await?;

    tracing::info!(
        "Cash delivery #{} verified by agent {}",
        delivery.id,
        agent_id
    );
    Ok(delivery)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_round_trip() {
        for status in [
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Delivered,
            RequestStatus::Rejected,
        ] {
            assert_eq!(RequestStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(RequestStatus::from_str("cancelled"), None);
    }

    #[test]
    fn test_allowed_transitions() {
        assert!(RequestStatus::Pending.can_become(RequestStatus::Approved));
        assert!(RequestStatus::Pending.can_become(RequestStatus::Rejected));
        assert!(RequestStatus::Approved.can_become(RequestStatus::Delivered));
    }

    #[test]
    fn test_terminal_states_stay_terminal() {
        assert!(!RequestStatus::Rejected.can_become(RequestStatus::Approved));
        assert!(!RequestStatus::Rejected.can_become(RequestStatus::Pending));
        assert!(!RequestStatus::Delivered.can_become(RequestStatus::Approved));
        assert!(!RequestStatus::Approved.can_become(RequestStatus::Pending));
        assert!(!RequestStatus::Approved.can_become(RequestStatus::Rejected));
        assert!(!RequestStatus::Pending.can_become(RequestStatus::Delivered));
    }

    #[test]
    fn test_request_totals_are_pure_functions_of_counts() {
        let jmd = JmdNotes {
            jmd_5000: 2,
            jmd_1000: 3,
            ..Default::default()
        };
        let usd = UsdNotes {
            usd_100: 1,
            usd_10: 4,
            ..Default::default()
        };
        assert_eq!(jmd.total(), dec!(13000));
        assert_eq!(usd.total(), dec!(140));
    }
}
