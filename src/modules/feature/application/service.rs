use super::super::domain::{entities::feature::Feature, repositories::FeatureRepository};
use crate::modules::content::domain::repositories::ContentRepository;
use crate::modules::layer::domain::repositories::LayerRepository;
use crate::shared::application::PaginationParams;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{merge_request_fields, Validator};
use crate::{log_debug, log_info};
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

/// Request-body keys that only server-side code may set on a Feature.
/// Content associations change through link/unlink, never through update.
const PROTECTED_FIELDS: [&str; 5] = ["id", "creator", "layer", "contents", "createdAt"];

#[derive(Debug, Clone)]
pub struct FeaturePayload {
    pub title: String,
    pub description: Option<String>,
    pub geometry: Value,
    pub properties: Option<Value>,
}

pub struct FeatureService {
    feature_repo: Arc<dyn FeatureRepository>,
    layer_repo: Arc<dyn LayerRepository>,
    content_repo: Arc<dyn ContentRepository>,
}

impl FeatureService {
    pub fn new(
        feature_repo: Arc<dyn FeatureRepository>,
        layer_repo: Arc<dyn LayerRepository>,
        content_repo: Arc<dyn ContentRepository>,
    ) -> Self {
        Self {
            feature_repo,
            layer_repo,
            content_repo,
        }
    }

    /// Create a feature inside a layer. The feature row is durable before
    /// the layer references it; a failing layer save leaves the feature
    /// persisted but unreferenced.
    pub async fn create_feature(
        &self,
        layer_id: &Uuid,
        payload: FeaturePayload,
        creator_id: Uuid,
    ) -> AppResult<Feature> {
        let mut layer = self
            .layer_repo
            .find_by_id(layer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Layer not found.".to_string()))?;

        Validator::validate_feature_title(&payload.title)?;
        Validator::validate_geometry(&payload.geometry)?;

        let mut feature = Feature::new(payload.title, payload.geometry, layer.id, creator_id);
        feature.description = payload.description;
        if let Some(properties) = payload.properties {
            feature.properties = properties;
        }

        let feature = self.feature_repo.save(&feature).await?;

        layer.add_feature(feature.id);
        self.layer_repo.save(&layer).await?;

        log_info!("Created feature {} in layer {}", feature.id, layer.id);
        Ok(feature)
    }

    pub async fn get_feature(&self, id: &Uuid) -> AppResult<Feature> {
        self.feature_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Feature not found.".to_string()))
    }

    pub async fn list_features(
        &self,
        params: &PaginationParams,
    ) -> AppResult<(Vec<Feature>, u64)> {
        Validator::validate_pagination(params.page, params.per_page)?;

        let features = self
            .feature_repo
            .list(params.offset(), params.limit())
            .await?;
        let total = self.feature_repo.count().await?;

        Ok((features, total))
    }

    pub async fn update_feature(&self, id: &Uuid, body: Map<String, Value>) -> AppResult<Feature> {
        let feature = self.get_feature(id).await?;

        let merged: Feature = merge_request_fields(&feature, body, &PROTECTED_FIELDS)?;
        Validator::validate_feature_title(&merged.title)?;
        Validator::validate_geometry(&merged.geometry)?;

        self.feature_repo.save(&merged).await
    }

    /// Mirror the ids into both reference sets, then persist Content
    /// first and Feature second. The adds are no-ops when the link is
    /// already present. A failure between the two saves leaves the
    /// one-sided link in place; nothing is undone.
    pub async fn link_content(&self, feature_id: &Uuid, content_id: &Uuid) -> AppResult<()> {
        log_debug!("Linking content {} to feature {}", content_id, feature_id);

        let mut feature = self.get_feature(feature_id).await?;
        let mut content = self
            .content_repo
            .find_by_id(content_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Content not found.".to_string()))?;

        feature.add_content(content.id);
        content.add_feature(feature.id);

        self.content_repo.save(&content).await?;
        self.feature_repo.save(&feature).await?;

        Ok(())
    }

    /// Remove each id from the other's set (no-op when absent), then
    /// persist Content first and Feature second, with the same
    /// asymmetric-failure window as linking.
    pub async fn unlink_content(&self, feature_id: &Uuid, content_id: &Uuid) -> AppResult<()> {
        let mut feature = self.get_feature(feature_id).await?;
        let mut content = self
            .content_repo
            .find_by_id(content_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Content not found.".to_string()))?;

        feature.remove_content(&content.id);
        content.remove_feature(&feature.id);

        self.content_repo.save(&content).await?;
        self.feature_repo.save(&feature).await?;

        Ok(())
    }
}
