use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Geographic entity. Belongs to exactly one layer; the content id set
/// mirrors `Content::feature_ids` and is only consistent immediately
/// after a successful two-sided save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// GeoJSON geometry, stored as given
    pub geometry: Value,
    pub properties: Value,
    #[serde(rename = "layer")]
    pub layer_id: Uuid,
    #[serde(rename = "contents")]
    pub content_ids: Vec<Uuid>,
    #[serde(rename = "creator")]
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Feature {
    pub fn new(title: String, geometry: Value, layer_id: Uuid, creator_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description: None,
            geometry,
            properties: Value::Object(serde_json::Map::new()),
            layer_id,
            content_ids: Vec::new(),
            creator_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_content(&mut self, content_id: Uuid) -> bool {
        if !self.content_ids.contains(&content_id) {
            self.content_ids.push(content_id);
            self.touch();
            true
        } else {
            false
        }
    }

    pub fn remove_content(&mut self, content_id: &Uuid) -> bool {
        let original_len = self.content_ids.len();
        self.content_ids.retain(|id| id != content_id);

        if self.content_ids.len() < original_len {
            self.touch();
            true
        } else {
            false
        }
    }

    pub fn contains_content(&self, content_id: &Uuid) -> bool {
        self.content_ids.contains(content_id)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
