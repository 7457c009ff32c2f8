use async_trait::async_trait;
use derive_new::new;
use kernel::model::settings::SystemSettings;
use kernel::repository::settings::SystemSettingsRepository;
use shared::error::AppResult;

use super::InMemoryStore;

#[derive(new)]
pub struct InMemorySystemSettingsRepository {
    store: InMemoryStore,
}

#[async_trait]
impl SystemSettingsRepository for InMemorySystemSettingsRepository {
    async fn get(&self) -> AppResult<SystemSettings> {
        let state = self.store.lock().await;
        Ok(state.settings.clone())
    }

    async fn update(&self, settings: SystemSettings) -> AppResult<SystemSettings> {
        let mut state = self.store.lock().await;
        state.settings = settings.clone();

        tracing::info!("Updated system settings");
        Ok(settings)
    }
}
