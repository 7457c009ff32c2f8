use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::hosting::event::{CreateHosting, UpdateHosting};
use crate::model::hosting::Hosting;
use crate::model::id::HostingId;

#[async_trait]
pub trait HostingRepository: Send + Sync {
    /// Creates the hosting and, when the employee is actively housed, adds
    /// the guest count to that room's occupancy. The guest path performs
    /// no capacity check and never changes the room status.
    async fn create(&self, event: CreateHosting) -> AppResult<Hosting>;
    async fn find_all(&self) -> AppResult<Vec<Hosting>>;
    async fn find_by_id(&self, hosting_id: HostingId) -> AppResult<Option<Hosting>>;
    /// The first transition to `Completed` gives the applied guest count
    /// back to the host room; repeat completions adjust nothing.
    async fn update(&self, event: UpdateHosting) -> AppResult<Hosting>;
    async fn delete(&self, hosting_id: HostingId) -> AppResult<()>;
}
