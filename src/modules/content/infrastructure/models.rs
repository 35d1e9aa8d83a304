use crate::modules::content::domain::entities::content::Content;
use crate::modules::content::domain::entities::content_block::ContentBlock;
use crate::schema::contents;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

// For reading from database
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = contents)]
pub struct ContentModel {
    pub id: Uuid,
    pub layer_id: Uuid,
    pub title: String,
    pub blocks: Value,
    pub feature_ids: Value,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new contents
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = contents)]
pub struct NewContent {
    pub id: Uuid,
    pub layer_id: Uuid,
    pub title: String,
    pub blocks: Value,
    pub feature_ids: Value,
    pub creator_id: Uuid,
}

// For updating existing contents (excludes id, layer, creator and created_at)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = contents)]
pub struct ContentChangeset {
    pub title: String,
    pub blocks: Value,
    pub feature_ids: Value,
    pub updated_at: DateTime<Utc>,
}

impl ContentModel {
    pub fn into_entity(self) -> Content {
        Content {
            id: self.id,
            title: self.title,
            layer_id: self.layer_id,
            blocks: blocks_from_json(self.blocks),
            feature_ids: ids_from_json(self.feature_ids),
            creator_id: self.creator_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<&Content> for NewContent {
    fn from(content: &Content) -> Self {
        Self {
            id: content.id,
            layer_id: content.layer_id,
            title: content.title.clone(),
            blocks: blocks_to_json(&content.blocks),
            feature_ids: ids_to_json(&content.feature_ids),
            creator_id: content.creator_id,
        }
    }
}

impl From<&Content> for ContentChangeset {
    fn from(content: &Content) -> Self {
        Self {
            title: content.title.clone(),
            blocks: blocks_to_json(&content.blocks),
            feature_ids: ids_to_json(&content.feature_ids),
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

fn blocks_to_json(blocks: &[ContentBlock]) -> Value {
    serde_json::json!(blocks)
}

fn blocks_from_json(value: Value) -> Vec<ContentBlock> {
    serde_json::from_value(value).unwrap_or_default()
}
