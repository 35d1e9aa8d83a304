use crate::modules::content::application::service::ContentService;
use crate::modules::feature::application::service::FeatureService;
use crate::modules::import::application::service::ImportService;
use crate::modules::layer::application::service::LayerService;
use crate::modules::{content, feature, import, layer};
use axum::routing::{delete, get, post, put};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub layer_service: Arc<LayerService>,
    pub feature_service: Arc<FeatureService>,
    pub content_service: Arc<ContentService>,
    pub import_service: Arc<ImportService>,
}

/// Route table mirroring the public REST surface: layers own features
/// and contents, associations live under the owning resource's path.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/layers",
            get(layer::handlers::index).post(layer::handlers::create),
        )
        .route(
            "/layers/{layer_id}",
            get(layer::handlers::show)
                .put(layer::handlers::update)
                .delete(layer::handlers::destroy),
        )
        .route(
            "/layers/{layer_id}/contributors/add",
            put(layer::handlers::add_contributor),
        )
        .route(
            "/layers/{layer_id}/contributors/remove",
            delete(layer::handlers::remove_contributor),
        )
        .route(
            "/layers/{layer_id}/features",
            post(feature::handlers::create),
        )
        .route(
            "/layers/{layer_id}/features/import",
            post(import::handlers::import_features),
        )
        .route(
            "/layers/{layer_id}/features/{feature_id}",
            put(layer::handlers::attach_feature).delete(layer::handlers::detach_feature),
        )
        .route("/features", get(feature::handlers::index))
        .route(
            "/features/{feature_id}",
            get(feature::handlers::show).put(feature::handlers::update),
        )
        .route(
            "/features/{feature_id}/contents/{content_id}",
            put(feature::handlers::add_content).delete(feature::handlers::remove_content),
        )
        .route("/contents", post(content::handlers::create))
        .route(
            "/contents/{content_id}",
            get(content::handlers::show)
                .put(content::handlers::update)
                .delete(content::handlers::destroy),
        );

    Router::new()
        .nest("/api/v1", api)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
