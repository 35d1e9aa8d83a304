use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grouping aggregate. Feature and Content references are mirrored id
/// sets kept best-effort; the entity methods below are the only mutation
/// path, so the vectors never hold duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "creator")]
    pub creator_id: Uuid,
    #[serde(rename = "contributors")]
    pub contributor_ids: Vec<Uuid>,
    #[serde(rename = "features")]
    pub feature_ids: Vec<Uuid>,
    #[serde(rename = "contents")]
    pub content_ids: Vec<Uuid>,
    pub draft: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Layer {
    pub fn new(title: String, creator_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description: None,
            creator_id,
            contributor_ids: Vec::new(),
            feature_ids: Vec::new(),
            content_ids: Vec::new(),
            draft: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn add_feature(&mut self, feature_id: Uuid) -> bool {
        if !self.feature_ids.contains(&feature_id) {
            self.feature_ids.push(feature_id);
            self.touch();
            true
        } else {
            false
        }
    }

    pub fn remove_feature(&mut self, feature_id: &Uuid) -> bool {
        let original_len = self.feature_ids.len();
        self.feature_ids.retain(|id| id != feature_id);

        if self.feature_ids.len() < original_len {
            self.touch();
            true
        } else {
            false
        }
    }

    pub fn contains_feature(&self, feature_id: &Uuid) -> bool {
        self.feature_ids.contains(feature_id)
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

    pub fn add_contributor(&mut self, user_id: Uuid) -> bool {
        if !self.contributor_ids.contains(&user_id) {
            self.contributor_ids.push(user_id);
            self.touch();
            true
        } else {
            false
        }
    }

    pub fn remove_contributor(&mut self, user_id: &Uuid) -> bool {
        let original_len = self.contributor_ids.len();
        self.contributor_ids.retain(|id| id != user_id);

        if self.contributor_ids.len() < original_len {
            self.touch();
            true
        } else {
            false
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
