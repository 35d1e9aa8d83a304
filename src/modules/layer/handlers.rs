use super::domain::entities::layer::Layer;
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
pub struct CreateLayerRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub draft: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorRequest {
    pub user: Uuid,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerIndexResponse {
    pub options: PaginationParams,
    pub layers_total: u64,
    pub layers: Vec<Layer>,
}

pub async fn index(
    State(state): State<AppState>,
    Query(options): Query<PaginationParams>,
) -> AppResult<Json<LayerIndexResponse>> {
    let (layers, layers_total) = state.layer_service.list_layers(&options).await?;
    Ok(Json(LayerIndexResponse {
        options,
        layers_total,
        layers,
    }))
}

pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<CreateLayerRequest>,
) -> AppResult<Json<Layer>> {
    let layer = state
        .layer_service
        .create_layer(request.title, request.description, request.draft, user_id)
        .await?;
    Ok(Json(layer))
}

pub async fn show(
    State(state): State<AppState>,
    Path(layer_id): Path<Uuid>,
) -> AppResult<Json<Layer>> {
    let layer = state.layer_service.get_layer(&layer_id).await?;
    Ok(Json(layer))
}

pub async fn update(
    State(state): State<AppState>,
    Path(layer_id): Path<Uuid>,
    CurrentUser(_user_id): CurrentUser,
    Json(body): Json<Map<String, Value>>,
) -> AppResult<Json<Layer>> {
    let layer = state.layer_service.update_layer(&layer_id, body).await?;
    Ok(Json(layer))
}

pub async fn destroy(
    State(state): State<AppState>,
    Path(layer_id): Path<Uuid>,
    CurrentUser(_user_id): CurrentUser,
) -> AppResult<Json<MessageBody>> {
    state.layer_service.delete_layer(&layer_id).await?;
    Ok(Json(MessageBody::ok("Layer removed successfully.")))
}

pub async fn add_contributor(
    State(state): State<AppState>,
    Path(layer_id): Path<Uuid>,
    CurrentUser(_user_id): CurrentUser,
    Json(request): Json<ContributorRequest>,
) -> AppResult<Json<Layer>> {
    let layer = state
        .layer_service
        .add_contributor(&layer_id, request.user)
        .await?;
    Ok(Json(layer))
}

pub async fn remove_contributor(
    State(state): State<AppState>,
    Path(layer_id): Path<Uuid>,
    CurrentUser(_user_id): CurrentUser,
    Json(request): Json<ContributorRequest>,
) -> AppResult<Json<Layer>> {
    let layer = state
        .layer_service
        .remove_contributor(&layer_id, &request.user)
        .await?;
    Ok(Json(layer))
}

pub async fn attach_feature(
    State(state): State<AppState>,
    Path((layer_id, feature_id)): Path<(Uuid, Uuid)>,
    CurrentUser(_user_id): CurrentUser,
) -> AppResult<Json<MessageBody>> {
    state
        .layer_service
        .attach_feature(&layer_id, &feature_id)
        .await?;
    Ok(Json(MessageBody::ok("Feature added successfully.")))
}

pub async fn detach_feature(
    State(state): State<AppState>,
    Path((layer_id, feature_id)): Path<(Uuid, Uuid)>,
    CurrentUser(_user_id): CurrentUser,
) -> AppResult<Json<MessageBody>> {
    state
        .layer_service
        .detach_feature(&layer_id, &feature_id)
        .await?;
    Ok(Json(MessageBody::ok("Feature removed successfully.")))
}
