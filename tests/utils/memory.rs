/// In-memory repository implementations backing the end-to-end service
/// tests. Each save replaces the stored row wholesale, mirroring the
/// single-row upsert the real store performs.
use async_trait::async_trait;
use mapcolab::modules::content::{Content, ContentRepository};
use mapcolab::modules::feature::{Feature, FeatureRepository};
use mapcolab::modules::layer::{Layer, LayerRepository};
use mapcolab::shared::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryLayerRepository {
    rows: Mutex<HashMap<Uuid, Layer>>,
}

impl InMemoryLayerRepository {
    pub fn get(&self, id: &Uuid) -> Option<Layer> {
        self.rows.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl LayerRepository for InMemoryLayerRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Layer>> {
        Ok(self.rows.lock().unwrap().get(id).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Layer>> {
        let mut layers: Vec<Layer> = self.rows.lock().unwrap().values().cloned().collect();
        layers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(layers
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }

    async fn save(&self, layer: &Layer) -> AppResult<Layer> {
        self.rows
            .lock()
            .unwrap()
            .insert(layer.id, layer.clone());
        Ok(layer.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Layer not found.".to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryFeatureRepository {
    rows: Mutex<HashMap<Uuid, Feature>>,
}

impl InMemoryFeatureRepository {
    pub fn get(&self, id: &Uuid) -> Option<Feature> {
        self.rows.lock().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl FeatureRepository for InMemoryFeatureRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Feature>> {
        Ok(self.rows.lock().unwrap().get(id).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Feature>> {
        let mut features: Vec<Feature> = self.rows.lock().unwrap().values().cloned().collect();
        features.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(features
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }

    async fn save(&self, feature: &Feature) -> AppResult<Feature> {
        self.rows
            .lock()
            .unwrap()
            .insert(feature.id, feature.clone());
        Ok(feature.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Feature not found.".to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryContentRepository {
    rows: Mutex<HashMap<Uuid, Content>>,
}

impl InMemoryContentRepository {
    pub fn get(&self, id: &Uuid) -> Option<Content> {
        self.rows.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Content>> {
        Ok(self.rows.lock().unwrap().get(id).cloned())
    }

    async fn save(&self, content: &Content) -> AppResult<Content> {
        self.rows
            .lock()
            .unwrap()
            .insert(content.id, content.clone());
        Ok(content.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Content not found.".to_string()))
    }
}
