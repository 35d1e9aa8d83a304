use super::super::domain::{entities::layer::Layer, repositories::LayerRepository};
use crate::modules::feature::domain::repositories::FeatureRepository;
use crate::shared::application::PaginationParams;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{merge_request_fields, Validator};
use crate::{log_debug, log_info};
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

/// Request-body keys that only server-side code may set on a Layer.
/// Reference sets and contributors change through their own operations.
const PROTECTED_FIELDS: [&str; 6] = [
    "id",
    "creator",
    "contributors",
    "features",
    "contents",
    "createdAt",
];

pub struct LayerService {
    layer_repo: Arc<dyn LayerRepository>,
    feature_repo: Arc<dyn FeatureRepository>,
}

impl LayerService {
    pub fn new(
        layer_repo: Arc<dyn LayerRepository>,
        feature_repo: Arc<dyn FeatureRepository>,
    ) -> Self {
        Self {
            layer_repo,
            feature_repo,
        }
    }

    pub async fn create_layer(
        &self,
        title: String,
        description: Option<String>,
        draft: Option<bool>,
        creator_id: Uuid,
    ) -> AppResult<Layer> {
        Validator::validate_layer_title(&title)?;

        let mut layer = Layer::new(title, creator_id);
        if let Some(desc) = description {
            layer = layer.with_description(desc);
        }
        if let Some(draft) = draft {
            layer.draft = draft;
        }

        let saved = self.layer_repo.save(&layer).await?;
        log_info!("Created layer {} for user {}", saved.id, creator_id);

        Ok(saved)
    }

    pub async fn get_layer(&self, id: &Uuid) -> AppResult<Layer> {
        self.layer_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Layer not found.".to_string()))
    }

    pub async fn list_layers(&self, params: &PaginationParams) -> AppResult<(Vec<Layer>, u64)> {
        Validator::validate_pagination(params.page, params.per_page)?;

        let layers = self.layer_repo.list(params.offset(), params.limit()).await?;
        let total = self.layer_repo.count().await?;

        Ok((layers, total))
    }

    pub async fn update_layer(&self, id: &Uuid, body: Map<String, Value>) -> AppResult<Layer> {
        let layer = self.get_layer(id).await?;

        let merged: Layer = merge_request_fields(&layer, body, &PROTECTED_FIELDS)?;
        Validator::validate_layer_title(&merged.title)?;

        self.layer_repo.save(&merged).await
    }

    /// Deleting a layer does not cascade into its features or contents;
    /// their back-references simply stop resolving.
    pub async fn delete_layer(&self, id: &Uuid) -> AppResult<()> {
        let _ = self.get_layer(id).await?;
        self.layer_repo.delete(id).await
    }

    pub async fn add_contributor(&self, layer_id: &Uuid, user_id: Uuid) -> AppResult<Layer> {
        let mut layer = self.get_layer(layer_id).await?;

        layer.add_contributor(user_id);
        self.layer_repo.save(&layer).await
    }

    pub async fn remove_contributor(&self, layer_id: &Uuid, user_id: &Uuid) -> AppResult<Layer> {
        let mut layer = self.get_layer(layer_id).await?;

        if *user_id == layer.creator_id {
            return Err(AppError::validation(
                "contributors",
                "Layer owner cannot be removed from contributors",
            ));
        }

        layer.remove_contributor(user_id);
        self.layer_repo.save(&layer).await
    }

    /// Mirror the feature into the layer's set and re-stamp the feature's
    /// owning layer. Feature is persisted first; if the layer save fails
    /// the feature keeps its new back-reference and the chain stops.
    pub async fn attach_feature(&self, layer_id: &Uuid, feature_id: &Uuid) -> AppResult<()> {
        log_debug!("Attaching feature {} to layer {}", feature_id, layer_id);

        let mut layer = self.get_layer(layer_id).await?;
        let mut feature = self
            .feature_repo
            .find_by_id(feature_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Feature not found.".to_string()))?;

        feature.layer_id = layer.id;
        layer.add_feature(feature.id);

        self.feature_repo.save(&feature).await?;
        self.layer_repo.save(&layer).await?;

        Ok(())
    }

    /// Drops the id from the layer's set only; the feature itself is left
    /// untouched (no cascade).
    pub async fn detach_feature(&self, layer_id: &Uuid, feature_id: &Uuid) -> AppResult<()> {
        let mut layer = self.get_layer(layer_id).await?;

        layer.remove_feature(feature_id);
        self.layer_repo.save(&layer).await?;

        Ok(())
    }
}
