//! System settings request/response models

use serde::{Deserialize, Serialize};

use crate::services::system_settings::{SettingsSnapshot, WindowStatus};

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSettings {
    pub admin_id: i32,
    #[serde(flatten)]
    pub settings: SettingsSnapshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsResponse {
    pub settings: SettingsSnapshot,
    /// Whether submissions are open right now, and how long until cutoff
    pub window: WindowStatus,
}
