use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::settings::{Language, SystemSettings};
use serde::{Deserialize, Serialize};

/// The settings record is replaced whole: every field is required on
/// update, so an unknown or missing key can never slip through.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateSystemSettingsRequest {
    #[garde(skip)]
    pub default_language: Language,
    #[garde(skip)]
    pub ai_suggestions_enabled: bool,
    #[garde(skip)]
    pub last_backup_time: Option<DateTime<Utc>>,
}

impl From<UpdateSystemSettingsRequest> for SystemSettings {
    fn from(value: UpdateSystemSettingsRequest) -> Self {
        let UpdateSystemSettingsRequest {
            default_language,
            ai_suggestions_enabled,
            last_backup_time,
        } = value;
        SystemSettings {
            default_language,
            ai_suggestions_enabled,
            last_backup_time,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettingsResponse {
    pub default_language: Language,
    pub ai_suggestions_enabled: bool,
    pub last_backup_time: Option<DateTime<Utc>>,
}

impl From<SystemSettings> for SystemSettingsResponse {
    fn from(value: SystemSettings) -> Self {
        let SystemSettings {
            default_language,
            ai_suggestions_enabled,
            last_backup_time,
        } = value;
        Self {
            default_language,
            ai_suggestions_enabled,
            last_backup_time,
        }
    }
}
