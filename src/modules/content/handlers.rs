use super::domain::entities::content::Content;
use crate::api::auth::CurrentUser;
use crate::api::responses::MessageBody;
use crate::api::router::AppState;
use crate::shared::errors::AppResult;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentRequest {
    pub layer: Uuid,
    pub title: String,
    #[serde(default)]
    pub blocks: Option<Value>,
    #[serde(default)]
    pub features: Option<Vec<Uuid>>,
}

/// Update body: `blocks` drives normalization, everything else is a loose
/// field map that gets shallow-merged (protected keys stripped serverside).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContentRequest {
    #[serde(default)]
    pub blocks: Option<Value>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

pub async fn show(
    State(state): State<AppState>,
    Path(content_id): Path<Uuid>,
) -> AppResult<Json<Content>> {
    let content = state.content_service.get_content(&content_id).await?;
    Ok(Json(content))
}

pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<CreateContentRequest>,
) -> AppResult<Json<Content>> {
    let content = state
        .content_service
        .create_content(
            &request.layer,
            request.title,
            request.blocks,
            request.features,
            user_id,
        )
        .await?;
    Ok(Json(content))
}

pub async fn update(
    State(state): State<AppState>,
    Path(content_id): Path<Uuid>,
    CurrentUser(_user_id): CurrentUser,
    Json(request): Json<UpdateContentRequest>,
) -> AppResult<Json<Content>> {
    let content = state
        .content_service
        .update_content(&content_id, request.fields, request.blocks)
        .await?;
    Ok(Json(content))
}

pub async fn destroy(
    State(state): State<AppState>,
    Path(content_id): Path<Uuid>,
    CurrentUser(_user_id): CurrentUser,
) -> AppResult<Json<MessageBody>> {
    state.content_service.delete_content(&content_id).await?;
    Ok(Json(MessageBody::ok("Content removed successfully.")))
}
