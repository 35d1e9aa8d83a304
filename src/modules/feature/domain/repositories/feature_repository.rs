use super::super::entities::feature::Feature;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait FeatureRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Feature>>;
    /// Features ordered by creation time, newest first
    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Feature>>;
    async fn count(&self) -> AppResult<u64>;
    /// Upsert by id; a save is always a single-row write
    async fn save(&self, feature: &Feature) -> AppResult<Feature>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}
