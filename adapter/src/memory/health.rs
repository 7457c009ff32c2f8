use async_trait::async_trait;
use derive_new::new;
use kernel::repository::health::HealthCheckRepository;

use super::InMemoryStore;

#[derive(new)]
pub struct InMemoryHealthCheckRepository {
    #[allow(dead_code)]
    store: InMemoryStore,
}

#[async_trait]
impl HealthCheckRepository for InMemoryHealthCheckRepository {
    async fn check_db(&self) -> bool {
        true
    }
}
