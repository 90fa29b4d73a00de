//! Emergency access request/review models

use serde::Deserialize;

use crate::models::common::FieldError;

#[derive(Debug, Clone, Deserialize)]
pub struct RequestEmergencyAccess {
    pub agent_id: i32,
    pub location_id: i32,
    pub reason: String,
}

impl RequestEmergencyAccess {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        if self.reason.trim().is_empty() {
            return Err(vec![FieldError::new(
                "reason",
                "Please explain why you need emergency access",
            )]);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewEmergencyAccess {
    pub admin_id: i32,
    /// "approve" or "deny"
    pub action: String,
}
