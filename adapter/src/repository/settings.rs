use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_new::new;
use kernel::model::settings::SystemSettings;
use kernel::repository::settings::SystemSettingsRepository;
use shared::error::{AppError, AppResult};

use crate::database::ConnectionPool;

const KEY_DEFAULT_LANGUAGE: &str = "default_language";
const KEY_AI_SUGGESTIONS: &str = "ai_suggestions";
const KEY_LAST_BACKUP_TIME: &str = "last_backup_time";

/// Settings persist as key/value rows but cross the boundary only as the
/// typed [`SystemSettings`] record; unknown keys in the table are ignored,
/// missing keys fall back to the defaults.
#[derive(new)]
pub struct SystemSettingsRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SystemSettingsRepository for SystemSettingsRepositoryImpl {
    async fn get(&self) -> AppResult<SystemSettings> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT key, value FROM system_settings")
                .fetch_all(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        let mut settings = SystemSettings::default();
        for (key, value) in rows {
            match key.as_str() {
                KEY_DEFAULT_LANGUAGE => settings.default_language = value.parse()?,
                KEY_AI_SUGGESTIONS => settings.ai_suggestions_enabled = value == "true",
                KEY_LAST_BACKUP_TIME => {
                    settings.last_backup_time = Some(
                        value
                            .parse::<DateTime<Utc>>()
                            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
                    )
                }
                _ => {}
            }
        }
        Ok(settings)
    }

    async fn update(&self, settings: SystemSettings) -> AppResult<SystemSettings> {
        let mut tx = self.db.begin().await?;

        let mut pairs = vec![
            (KEY_DEFAULT_LANGUAGE, settings.default_language.to_string()),
            (
                KEY_AI_SUGGESTIONS,
                settings.ai_suggestions_enabled.to_string(),
            ),
        ];
        match settings.last_backup_time {
            Some(last_backup_time) => {
                pairs.push((KEY_LAST_BACKUP_TIME, last_backup_time.to_rfc3339()))
            }
            // A cleared backup time must not resurrect the old row on the
            // next read.
            None => {
                sqlx::query("DELETE FROM system_settings WHERE key = $1")
                    .bind(KEY_LAST_BACKUP_TIME)
                    .execute(&mut *tx)
                    .await
                    .map_err(AppError::SpecificOperationError)?;
            }
        }

        for (key, value) in pairs {
            sqlx::query(
                r#"
                    INSERT INTO system_settings (key, value)
                    VALUES ($1, $2)
                    ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value
                "#,
            )
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!("Updated system settings");
        Ok(settings)
    }
}
