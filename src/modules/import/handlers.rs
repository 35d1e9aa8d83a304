use super::application::service::FeatureImportItem;
use crate::api::auth::CurrentUser;
use crate::api::router::AppState;
use crate::shared::errors::AppResult;
use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

/// Batch import: the body is an ordered collection of feature payloads,
/// the response is the layer's full feature reference list after its
/// single save.
pub async fn import_features(
    State(state): State<AppState>,
    Path(layer_id): Path<Uuid>,
    CurrentUser(user_id): CurrentUser,
    Json(items): Json<Vec<FeatureImportItem>>,
) -> AppResult<Json<Vec<Uuid>>> {
    let feature_ids = state
        .import_service
        .import_features(&layer_id, items, user_id)
        .await?;
    Ok(Json(feature_ids))
}
