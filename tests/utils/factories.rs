use super::memory::{
    InMemoryContentRepository, InMemoryFeatureRepository, InMemoryLayerRepository,
};
use mapcolab::modules::content::application::service::ContentService;
use mapcolab::modules::feature::application::service::{FeaturePayload, FeatureService};
use mapcolab::modules::import::application::service::{FeatureImportItem, ImportService};
use mapcolab::modules::layer::application::service::LayerService;
use serde_json::{json, Value};
use std::sync::Arc;

/// Services wired onto shared in-memory stores, with the concrete store
/// handles kept around for direct state assertions.
pub struct TestServices {
    pub layer_service: LayerService,
    pub feature_service: FeatureService,
    pub content_service: ContentService,
    pub import_service: ImportService,
    pub layer_repo: Arc<InMemoryLayerRepository>,
    pub feature_repo: Arc<InMemoryFeatureRepository>,
    pub content_repo: Arc<InMemoryContentRepository>,
}

pub fn build_test_services() -> TestServices {
    let layer_repo = Arc::new(InMemoryLayerRepository::default());
    let feature_repo = Arc::new(InMemoryFeatureRepository::default());
    let content_repo = Arc::new(InMemoryContentRepository::default());

    TestServices {
        layer_service: LayerService::new(layer_repo.clone(), feature_repo.clone()),
        feature_service: FeatureService::new(
            feature_repo.clone(),
            layer_repo.clone(),
            content_repo.clone(),
        ),
        content_service: ContentService::new(content_repo.clone(), layer_repo.clone()),
        import_service: ImportService::new(feature_repo.clone(), layer_repo.clone()),
        layer_repo,
        feature_repo,
        content_repo,
    }
}

pub fn point_geometry() -> Value {
    json!({"type": "Point", "coordinates": [-70.6483, -33.4569]})
}

pub fn feature_payload(title: &str) -> FeaturePayload {
    FeaturePayload {
        title: title.to_string(),
        description: None,
        geometry: point_geometry(),
        properties: None,
    }
}

pub fn import_item(title: &str) -> FeatureImportItem {
    FeatureImportItem {
        title: title.to_string(),
        description: None,
        geometry: point_geometry(),
        properties: None,
    }
}

pub fn block_payload() -> Value {
    json!({
        "data": [
            {"type": "heading", "data": {"text": "La Chimba"}},
            {"type": "text", "data": {"text": "North of the river."}},
        ]
    })
}
