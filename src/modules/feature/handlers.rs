use super::application::service::FeaturePayload;
use super::domain::entities::feature::Feature;
use crate::api::auth::CurrentUser;
use crate::api::responses::MessageBody;
use crate::api::router::AppState;
use crate::shared::application::PaginationParams;
use crate::shared::errors::AppResult;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeatureRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub geometry: Value,
    #[serde(default)]
    pub properties: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureIndexResponse {
    pub options: PaginationParams,
    pub features_total: u64,
    pub features: Vec<Feature>,
}

pub async fn index(
    State(state): State<AppState>,
    Query(options): Query<PaginationParams>,
) -> AppResult<Json<FeatureIndexResponse>> {
    let (features, features_total) = state.feature_service.list_features(&options).await?;
    Ok(Json(FeatureIndexResponse {
        options,
        features_total,
        features,
    }))
}

pub async fn show(
    State(state): State<AppState>,
    Path(feature_id): Path<Uuid>,
) -> AppResult<Json<Feature>> {
    let feature = state.feature_service.get_feature(&feature_id).await?;
    Ok(Json(feature))
}

pub async fn create(
    State(state): State<AppState>,
    Path(layer_id): Path<Uuid>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<CreateFeatureRequest>,
) -> AppResult<Json<Feature>> {
    let payload = FeaturePayload {
        title: request.title,
        description: request.description,
        geometry: request.geometry,
        properties: request.properties,
    };
    let feature = state
        .feature_service
        .create_feature(&layer_id, payload, user_id)
        .await?;
    Ok(Json(feature))
}

pub async fn update(
    State(state): State<AppState>,
    Path(feature_id): Path<Uuid>,
    CurrentUser(_user_id): CurrentUser,
    Json(body): Json<Map<String, Value>>,
) -> AppResult<Json<Feature>> {
    let feature = state
        .feature_service
        .update_feature(&feature_id, body)
        .await?;
    Ok(Json(feature))
}

pub async fn add_content(
    State(state): State<AppState>,
    Path((feature_id, content_id)): Path<(Uuid, Uuid)>,
    CurrentUser(_user_id): CurrentUser,
) -> AppResult<Json<MessageBody>> {
    state
        .feature_service
        .link_content(&feature_id, &content_id)
        .await?;
    Ok(Json(MessageBody::ok("Content added successfully.")))
}

pub async fn remove_content(
    State(state): State<AppState>,
    Path((feature_id, content_id)): Path<(Uuid, Uuid)>,
    CurrentUser(_user_id): CurrentUser,
) -> AppResult<Json<MessageBody>> {
    state
        .feature_service
        .unlink_content(&feature_id, &content_id)
        .await?;
    Ok(Json(MessageBody::ok("Content removed successfully.")))
}
