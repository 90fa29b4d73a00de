//! System settings snapshot and the submission cutoff window
//!
//! Settings live in a single row (id = 1). Operations load a snapshot up
//! front and pass it around as a value; a missing row falls back to defaults
//! without writing anything.

use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::{Deserialize, Serialize};

use crate::entities::{prelude::*, system_settings};

const SETTINGS_ROW_ID: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    pub cutoff_window_enabled: bool,
    pub cutoff_hour: u32,
    pub cutoff_minute: u32,
    pub business_hours_start: u32,
    pub business_hours_start_minute: u32,
    /// Minutes an emergency access grant stays active
    pub emergency_access_duration: i64,
}

impl Default for SettingsSnapshot {
    fn default() -> Self {
        Self {
            cutoff_window_enabled: true,
            cutoff_hour: 15,
            cutoff_minute: 0,
            business_hours_start: 8,
            business_hours_start_minute: 0,
            emergency_access_duration: 30,
        }
    }
}

impl From<&system_settings::Model> for SettingsSnapshot {
    fn from(model: &system_settings::Model) -> Self {
        Self {
            cutoff_window_enabled: model.cutoff_window_enabled,
            cutoff_hour: model.cutoff_hour.clamp(0, 23) as u32,
            cutoff_minute: model.cutoff_minute.clamp(0, 59) as u32,
            business_hours_start: model.business_hours_start.clamp(0, 23) as u32,
            business_hours_start_minute: model.business_hours_start_minute.clamp(0, 59) as u32,
            emergency_access_duration: model.emergency_access_duration.max(0) as i64,
        }
    }
}

/// Load the settings snapshot, falling back to defaults when the singleton
/// row has not been created. Read-only.
pub async fn load_settings(
    db: &DatabaseConnection,
) -> Result<SettingsSnapshot, Box<dyn std::error::Error + Send + Sync>> {
    let row = SystemSettings::find_by_id(SETTINGS_ROW_ID).one(db).await?;
    Ok(row.as_ref().map(SettingsSnapshot::from).unwrap_or_default())
}

/// Persist the settings singleton (insert on first save, update after).
pub async fn save_settings(
    db: &DatabaseConnection,
    snapshot: &SettingsSnapshot,
    admin_id: i32,
) -> Result<system_settings::Model, Box<dyn std::error::Error + Send + Sync>> {
    let now = chrono::Utc::now().into();
    let existing = SystemSettings::find_by_id(SETTINGS_ROW_ID).one(db).await?;

    let stored = match existing {
        Some(row) => {
            let mut active: system_settings::ActiveModel = row.into();
            active.cutoff_window_enabled = Set(snapshot.cutoff_window_enabled);
            active.cutoff_hour = Set(snapshot.cutoff_hour as i32);
            active.cutoff_minute = Set(snapshot.cutoff_minute as i32);
            active.business_hours_start = Set(snapshot.business_hours_start as i32);
            active.business_hours_start_minute = Set(snapshot.business_hours_start_minute as i32);
            active.emergency_access_duration = Set(snapshot.emergency_access_duration as i32);
            active.updated_by = Set(Some(admin_id));
            active.last_updated = Set(now);
            active.update(db).await?
        }
        None => {
            let row = system_settings::ActiveModel {
                id: Set(SETTINGS_ROW_ID),
                cutoff_window_enabled: Set(snapshot.cutoff_window_enabled),
                cutoff_hour: Set(snapshot.cutoff_hour as i32),
                cutoff_minute: Set(snapshot.cutoff_minute as i32),
                business_hours_start: Set(snapshot.business_hours_start as i32),
                business_hours_start_minute: Set(snapshot.business_hours_start_minute as i32),
                emergency_access_duration: Set(snapshot.emergency_access_duration as i32),
                updated_by: Set(Some(admin_id)),
                last_updated: Set(now),
            };
            row.insert(db).await?
        }
    };

    Ok(stored)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowStatus {
    pub open: bool,
    pub minutes_to_cutoff: i64,
}

/// Whether submissions are currently accepted under the cutoff window.
///
/// Open between business-hours start and the cutoff time on the same day;
/// always open while the window toggle is off. Emergency access overrides
/// are the caller's concern.
pub fn submission_window(settings: &SettingsSnapshot, now: NaiveDateTime) -> WindowStatus {
    let opening = now
        .date()
        .and_hms_opt(settings.business_hours_start, settings.business_hours_start_minute, 0)
        .unwrap_or(now);
    let cutoff = now
        .date()
        .and_hms_opt(settings.cutoff_hour, settings.cutoff_minute, 0)
        .unwrap_or(now);

    let open = if settings.cutoff_window_enabled {
        opening <= now && now <= cutoff
    } else {
        true
    };

    let minutes_to_cutoff = if now < cutoff {
        (cutoff - now).num_minutes()
    } else {
        0
    };

    WindowStatus {
        open,
        minutes_to_cutoff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 7, 14)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_window_open_during_business_hours() {
        let settings = SettingsSnapshot::default();
        let status = submission_window(&settings, at(10, 30));
        assert!(status.open);
        assert_eq!(status.minutes_to_cutoff, 4 * 60 + 30);
    }

    #[test]
    fn test_window_closed_before_opening() {
        let settings = SettingsSnapshot::default();
        let status = submission_window(&settings, at(7, 59));
        assert!(!status.open);
    }

    #[test]
    fn test_window_closed_after_cutoff() {
        let settings = SettingsSnapshot::default();
        let status = submission_window(&settings, at(15, 1));
        assert!(!status.open);
        assert_eq!(status.minutes_to_cutoff, 0);
    }

    #[test]
    fn test_cutoff_moment_is_still_open() {
        let settings = SettingsSnapshot::default();
        let status = submission_window(&settings, at(15, 0));
        assert!(status.open);
    }

    #[test]
    fn test_disabled_window_is_always_open() {
        let settings = SettingsSnapshot {
            cutoff_window_enabled: false,
            ..Default::default()
        };
        assert!(submission_window(&settings, at(3, 0)).open);
        assert!(submission_window(&settings, at(23, 0)).open);
    }

    #[test]
    fn test_snapshot_clamps_out_of_range_settings() {
        let model = system_settings::Model {
            id: 1,
            cutoff_window_enabled: true,
            cutoff_hour: 99,
            cutoff_minute: -5,
            business_hours_start: 8,
            business_hours_start_minute: 0,
            emergency_access_duration: -10,
            updated_by: None,
            last_updated: chrono::DateTime::from_timestamp(0, 0).unwrap().into(),
        };
        let snapshot = SettingsSnapshot::from(&model);
        assert_eq!(snapshot.cutoff_hour, 23);
        assert_eq!(snapshot.cutoff_minute, 0);
        assert_eq!(snapshot.emergency_access_duration, 0);
    }
}
