use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

/// System configuration as an explicit record. Every field is enumerated
/// and validated at the boundary; unknown keys are rejected instead of
/// being carried along in a catch-all map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSettings {
    pub default_language: Language,
    pub ai_suggestions_enabled: bool,
    pub last_backup_time: Option<DateTime<Utc>>,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            ai_suggestions_enabled: false,
            last_backup_time: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Ar => write!(f, "ar"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(AppError::ConversionEntityError(format!(
                "unknown language: {other}"
            ))),
        }
    }
}
