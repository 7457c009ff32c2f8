use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::settings::SystemSettings;

#[async_trait]
pub trait SystemSettingsRepository: Send + Sync {
    async fn get(&self) -> AppResult<SystemSettings>;
    // Replaces the whole record; all keys are written in one transaction.
    async fn update(&self, settings: SystemSettings) -> AppResult<SystemSettings>;
}
