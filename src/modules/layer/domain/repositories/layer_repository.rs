use super::super::entities::layer::Layer;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait LayerRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Layer>>;
    /// Layers ordered by creation time, newest first
    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Layer>>;
    async fn count(&self) -> AppResult<u64>;
    /// Upsert by id; a save is always a single-row write
    async fn save(&self, layer: &Layer) -> AppResult<Layer>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}
