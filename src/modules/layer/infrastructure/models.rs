use crate::modules::layer::domain::entities::layer::Layer;
use crate::schema::layers;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

// For reading from database
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = layers)]
pub struct LayerModel {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub creator_id: Uuid,
    pub contributor_ids: Value,
    pub feature_ids: Value,
    pub content_ids: Value,
    pub draft: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new layers
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = layers)]
pub struct NewLayer {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub creator_id: Uuid,
    pub contributor_ids: Value,
    pub feature_ids: Value,
    pub content_ids: Value,
    pub draft: bool,
}

// For updating existing layers (excludes id, creator and created_at)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = layers)]
pub struct LayerChangeset {
    pub title: String,
    pub description: Option<String>,
    pub contributor_ids: Value,
    pub feature_ids: Value,
    pub content_ids: Value,
    pub draft: bool,
    pub updated_at: DateTime<Utc>,
}

impl LayerModel {
    pub fn into_entity(self) -> Layer {
        Layer {
            id: self.id,
            title: self.title,
            description: self.description,
            creator_id: self.creator_id,
            contributor_ids: ids_from_json(self.contributor_ids),
            feature_ids: ids_from_json(self.feature_ids),
            content_ids: ids_from_json(self.content_ids),
            draft: self.draft,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<&Layer> for NewLayer {
    fn from(layer: &Layer) -> Self {
        Self {
            id: layer.id,
            title: layer.title.clone(),
            description: layer.description.clone(),
            creator_id: layer.creator_id,
            contributor_ids: ids_to_json(&layer.contributor_ids),
            feature_ids: ids_to_json(&layer.feature_ids),
            content_ids: ids_to_json(&layer.content_ids),
            draft: layer.draft,
        }
    }
}

impl From<&Layer> for LayerChangeset {
    fn from(layer: &Layer) -> Self {
        Self {
            title: layer.title.clone(),
            description: layer.description.clone(),
            contributor_ids: ids_to_json(&layer.contributor_ids),
            feature_ids: ids_to_json(&layer.feature_ids),
            content_ids: ids_to_json(&layer.content_ids),
            draft: layer.draft,
            updated_at: Utc::now(),
        }
    }
}

fn ids_to_json(ids: &[Uuid]) -> Value {
    serde_json::json!(ids)
}

fn ids_from_json(value: Value) -> Vec<Uuid> {
    serde_json::from_value(value).unwrap_or_default()
}
