use super::super::entities::content::Content;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Content>>;
    /// Upsert by id; a save is always a single-row write
    async fn save(&self, content: &Content) -> AppResult<Content>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}
