use super::super::domain::{
    entities::content::Content, entities::content_block::ContentBlock,
    repositories::ContentRepository,
};
use crate::modules::layer::domain::repositories::LayerRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{merge_request_fields, Validator};
use crate::{log_debug, log_info};
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

/// Request-body keys that only server-side code may set on a Content.
/// Feature associations change through link/unlink, never through an
/// update body.
const PROTECTED_FIELDS: [&str; 5] = ["id", "creator", "layer", "features", "createdAt"];

pub struct ContentService {
    content_repo: Arc<dyn ContentRepository>,
    layer_repo: Arc<dyn LayerRepository>,
}

impl ContentService {
    pub fn new(content_repo: Arc<dyn ContentRepository>, layer_repo: Arc<dyn LayerRepository>) -> Self {
        Self {
            content_repo,
            layer_repo,
        }
    }

    pub async fn get_content(&self, id: &Uuid) -> AppResult<Content> {
        self.content_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Content not found.".to_string()))
    }

    /// Create a content attached to its originating layer.
    ///
    /// The layer is saved first, already holding the new content id; every
    /// later step that fails (block normalization, the content save) leaves
    /// that reference dangling. There is no rollback.
    pub async fn create_content(
        &self,
        layer_id: &Uuid,
        title: String,
        raw_blocks: Option<Value>,
        requested_features: Option<Vec<Uuid>>,
        creator_id: Uuid,
    ) -> AppResult<Content> {
        Validator::validate_content_title(&title)?;

        let mut layer = self
            .layer_repo
            .find_by_id(layer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Layer not found.".to_string()))?;

        let mut content = Content::new(title, layer.id, creator_id);

        layer.add_content(content.id);
        self.layer_repo.save(&layer).await?;

        if let Some(raw) = &raw_blocks {
            content.set_blocks(ContentBlock::parse_payload(raw)?);
        }
        if let Some(features) = &requested_features {
            content.sync_features(features);
        }

        let saved = self.content_repo.save(&content).await?;
        log_info!("Created content {} in layer {}", saved.id, layer.id);

        Ok(saved)
    }

    /// Update an existing content: shallow field merge (protected keys
    /// stripped), then block normalization, then one save. Associations
    /// are untouched by this path.
    pub async fn update_content(
        &self,
        id: &Uuid,
        body: Map<String, Value>,
        raw_blocks: Option<Value>,
    ) -> AppResult<Content> {
        let content = self.get_content(id).await?;

        let mut merged: Content = merge_request_fields(&content, body, &PROTECTED_FIELDS)?;
        Validator::validate_content_title(&merged.title)?;

        if let Some(raw) = &raw_blocks {
            merged.set_blocks(ContentBlock::parse_payload(raw)?);
        }

        self.content_repo.save(&merged).await
    }

    /// Detach a content from its layer and delete it.
    ///
    /// The layer stops referencing the content before the row is deleted;
    /// if the delete then fails the content stays alive but orphaned.
    pub async fn delete_content(&self, id: &Uuid) -> AppResult<()> {
        let content = self.get_content(id).await?;

        log_debug!(
            "Detaching content {} from layer {}",
            content.id,
            content.layer_id
        );

        let mut layer = self
            .layer_repo
            .find_by_id(&content.layer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Layer not found.".to_string()))?;

        layer.remove_content(&content.id);
        self.layer_repo.save(&layer).await?;

        self.content_repo.delete(&content.id).await
    }
}
