use crate::modules::feature::domain::{
    entities::feature::Feature, repositories::FeatureRepository,
};
use crate::modules::layer::domain::repositories::LayerRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};
use futures::future;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// One feature payload inside a batch import request. Order in the
/// request body is the caller's; completion order is not guaranteed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureImportItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub geometry: Value,
    #[serde(default)]
    pub properties: Option<Value>,
}

pub struct ImportService {
    feature_repo: Arc<dyn FeatureRepository>,
    layer_repo: Arc<dyn LayerRepository>,
}

impl ImportService {
    pub fn new(
        feature_repo: Arc<dyn FeatureRepository>,
        layer_repo: Arc<dyn LayerRepository>,
    ) -> Self {
        Self {
            feature_repo,
            layer_repo,
        }
    }

    /// Batch-create features inside one layer.
    ///
    /// Item creations fan out concurrently, one save per item, ids staged
    /// in memory. The first failing item (in request order) becomes the
    /// whole batch's error; features persisted by the other tasks are not
    /// rolled back. Only when every item succeeded is the layer re-read,
    /// its feature set extended with the staged ids, and saved exactly
    /// once. The re-read narrows the window for losing a concurrent
    /// update to the layer; it does not close it.
    pub async fn import_features(
        &self,
        layer_id: &Uuid,
        items: Vec<FeatureImportItem>,
        creator_id: Uuid,
    ) -> AppResult<Vec<Uuid>> {
        let layer = self
            .layer_repo
            .find_by_id(layer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Layer not found.".to_string()))?;

        log_info!(
            "Importing {} features into layer {} for user {}",
            items.len(),
            layer.id,
            creator_id
        );

        let mut tasks = Vec::with_capacity(items.len());
        for item in items {
            let feature_repo = Arc::clone(&self.feature_repo);
            let layer_id = layer.id;

            tasks.push(async move {
                Validator::validate_feature_title(&item.title)?;
                Validator::validate_geometry(&item.geometry)?;

                let mut feature = Feature::new(item.title, item.geometry, layer_id, creator_id);
                feature.description = item.description;
                if let Some(properties) = item.properties {
                    feature.properties = properties;
                }

                let saved = feature_repo.save(&feature).await?;
                log_debug!("Imported feature {}", saved.id);
                Ok::<Uuid, AppError>(saved.id)
            });
        }

        // every item runs to completion; the join is the only barrier
        let results = future::join_all(tasks).await;

        let mut staged = Vec::with_capacity(results.len());
        for result in results {
            staged.push(result?);
        }

        // fan-in: append to the layer's latest persisted state, save once
        let mut layer = self
            .layer_repo
            .find_by_id(layer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Layer not found.".to_string()))?;

        for feature_id in staged {
            layer.add_feature(feature_id);
        }

        let layer = self.layer_repo.save(&layer).await?;
        log_info!(
            "Import into layer {} finished with {} features referenced",
            layer.id,
            layer.feature_ids.len()
        );

        Ok(layer.feature_ids)
    }
}
