use crate::modules::feature::domain::entities::feature::Feature;
use crate::schema::features;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

// For reading from database
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = features)]
pub struct FeatureModel {
    pub id: Uuid,
    pub layer_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub geometry: Value,
    pub properties: Value,
    pub content_ids: Value,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new features
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = features)]
pub struct NewFeature {
    pub id: Uuid,
    pub layer_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub geometry: Value,
    pub properties: Value,
    pub content_ids: Value,
    pub creator_id: Uuid,
}

// For updating existing features (excludes id, creator and created_at)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = features)]
pub struct FeatureChangeset {
    pub layer_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub geometry: Value,
    pub properties: Value,
    pub content_ids: Value,
    pub updated_at: DateTime<Utc>,
}

impl FeatureModel {
    pub fn into_entity(self) -> Feature {
        Feature {
            id: self.id,
            title: self.title,
            description: self.description,
            geometry: self.geometry,
            properties: self.properties,
            layer_id: self.layer_id,
            content_ids: ids_from_json(self.content_ids),
            creator_id: self.creator_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<&Feature> for NewFeature {
    fn from(feature: &Feature) -> Self {
        Self {
            id: feature.id,
            layer_id: feature.layer_id,
            title: feature.title.clone(),
            description: feature.description.clone(),
            geometry: feature.geometry.clone(),
            properties: feature.properties.clone(),
            content_ids: ids_to_json(&feature.content_ids),
            creator_id: feature.creator_id,
        }
    }
}

impl From<&Feature> for FeatureChangeset {
    fn from(feature: &Feature) -> Self {
        Self {
            layer_id: feature.layer_id,
            title: feature.title.clone(),
            description: feature.description.clone(),
            geometry: feature.geometry.clone(),
            properties: feature.properties.clone(),
            content_ids: ids_to_json(&feature.content_ids),
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
