//! Emergency access grants
//!
//! Agents locked out by the cutoff window can ask for a time-boxed override.
//! Expiry is a read-time wall-clock check; a lapsed grant keeps its stored
//! "approved" status and simply stops being active.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::{emergency_access_requests, prelude::*};
use crate::services::cash_request::WorkflowError;
use crate::services::system_settings::SettingsSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    Pending,
    Approved,
    Denied,
    Expired,
}

impl AccessStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(AccessStatus::Pending),
            "approved" => Some(AccessStatus::Approved),
            "denied" => Some(AccessStatus::Denied),
            "expired" => Some(AccessStatus::Expired),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessStatus::Pending => "pending",
            AccessStatus::Approved => "approved",
            AccessStatus::Denied => "denied",
            AccessStatus::Expired => "expired",
        }
    }
}

/// Whether a grant is usable at `now`.
pub fn is_active(request: &emergency_access_requests::Model, now: DateTime<FixedOffset>) -> bool {
    request.status == AccessStatus::Approved.as_str()
        && request
            .access_granted_until
            .map(|until| now <= until)
            .unwrap_or(false)
}

/// File a new pending request.
pub async fn request_access(
    db: &DatabaseConnection,
    agent_id: i32,
    location_id: i32,
    reason: String,
) -> Result<emergency_access_requests::Model, Box<dyn std::error::Error + Send + Sync>> {
    let row = emergency_access_requests::ActiveModel {
        agent_id: Set(agent_id),
        location_id: Set(location_id),
        requested_at: Set(Utc::now().into()),
        reason: Set(reason),
        status: Set(AccessStatus::Pending.as_str().to_string()),
        ..Default::default()
    };
    let stored = row.insert(db).await?;
    tracing::info!(
        "Emergency access request #{} filed by agent {}",
        stored.id,
        stored.agent_id
    );
    Ok(stored)
}

/// Approve or deny a pending request. Approval grants access for the
/// configured duration starting now.
pub async fn review_access(
    db: &DatabaseConnection,
    request_id: i32,
    admin_id: i32,
    approve: bool,
    settings: &SettingsSnapshot,
) -> Result<emergency_access_requests::Model, WorkflowError> {
    let request = EmergencyAccessRequests::find_by_id(request_id)
        .one(db)
        .await?
        .ok_or_else(|| WorkflowError::NotFound(format!("emergency access request {}", request_id)))?;

    if request.status != AccessStatus::Pending.as_str() {
        return Err(WorkflowError::InvalidState(format!(
            "emergency access request {} has already been reviewed ({})",
            request_id, request.status
        )));
    }

    let now = Utc::now();
    let mut active: emergency_access_requests::ActiveModel = request.into();
    active.reviewed_by = Set(Some(admin_id));
    active.reviewed_at = Set(Some(now.into()));
    if approve {
        active.status = Set(AccessStatus::Approved.as_str().to_string());
        active.access_granted_until =
            Set(Some((now + Duration::minutes(settings.emergency_access_duration)).into()));
    } else {
        active.status = Set(AccessStatus::Denied.as_str().to_string());
    }
    let stored = active.update(db).await?;

    tracing::info!(
        "Emergency access request #{} {} by admin {}",
        stored.id,
        if approve { "approved" } else { "denied" },
        admin_id
    );
    Ok(stored)
}

/// The agent's currently usable grant, if any.
pub async fn active_grant(
    db: &DatabaseConnection,
    agent_id: i32,
    now: DateTime<FixedOffset>,
) -> Result<Option<emergency_access_requests::Model>, Box<dyn std::error::Error + Send + Sync>> {
    let grant = EmergencyAccessRequests::find()
        .filter(emergency_access_requests::Column::AgentId.eq(agent_id))
        .filter(emergency_access_requests::Column::Status.eq(AccessStatus::Approved.as_str()))
        .filter(emergency_access_requests::Column::AccessGrantedUntil.gte(now))
        .order_by_desc(emergency_access_requests::Column::AccessGrantedUntil)
        .one(db)
        .await?;
    Ok(grant)
}

/// Pending requests awaiting administrator review, oldest first.
pub async fn pending_requests(
    db: &DatabaseConnection,
) -> Result<Vec<emergency_access_requests::Model>, Box<dyn std::error::Error + Send + Sync>> {
    let rows = EmergencyAccessRequests::find()
        .filter(emergency_access_requests::Column::Status.eq(AccessStatus::Pending.as_str()))
        .order_by_asc(emergency_access_requests::Column::RequestedAt)
        .all(db)
        .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(status: &str, granted_until: Option<DateTime<FixedOffset>>) -> emergency_access_requests::Model {
        emergency_access_requests::Model {
            id: 1,
            agent_id: 7,
            location_id: 3,
            requested_at: DateTime::from_timestamp(1_750_000_000, 0).unwrap().into(),
            reason: "till recount after closing".to_string(),
            status: status.to_string(),
            reviewed_by: None,
            reviewed_at: None,
            access_granted_until: granted_until,
        }
    }

    fn ts(secs: i64) -> DateTime<FixedOffset> {
        DateTime::from_timestamp(secs, 0).unwrap().into()
    }

    #[test]
    fn test_approved_grant_is_active_until_expiry() {
        let grant = request("approved", Some(ts(1_750_003_600)));
        assert!(is_active(&grant, ts(1_750_000_000)));
        // the boundary instant still counts
        assert!(is_active(&grant, ts(1_750_003_600)));
        assert!(!is_active(&grant, ts(1_750_003_601)));
    }

    #[test]
    fn test_unapproved_requests_are_never_active() {
        for status in ["pending", "denied", "expired"] {
            let grant = request(status, Some(ts(2_000_000_000)));
            assert!(!is_active(&grant, ts(1_750_000_000)));
        }
    }

    #[test]
    fn test_approved_without_deadline_is_inactive() {
        let grant = request("approved", None);
        assert!(!is_active(&grant, ts(1_750_000_000)));
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            AccessStatus::Pending,
            AccessStatus::Approved,
            AccessStatus::Denied,
            AccessStatus::Expired,
        ] {
            assert_eq!(AccessStatus::from_str(status.as_str()), Some(status));
        }
    }
}
