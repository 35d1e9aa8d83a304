use super::content_block::ContentBlock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Editorial entity composed of ordered typed blocks. The feature id set
/// mirrors `Feature::content_ids`; this entity only ever edits its own
/// side, the two-sided symmetry belongs to the link operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "layer")]
    pub layer_id: Uuid,
    pub blocks: Vec<ContentBlock>,
    #[serde(rename = "features")]
    pub feature_ids: Vec<Uuid>,
    #[serde(rename = "creator")]
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Content {
    pub fn new(title: String, layer_id: Uuid, creator_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            layer_id,
            blocks: Vec::new(),
            feature_ids: Vec::new(),
            creator_id,
            created_at: now,
            updated_at: now,
        }
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

    /// Reconcile the derived feature association list against a requested
    /// id set: new ids are added, missing ones dropped, duplicates
    /// collapsed. Only this entity's side changes here.
    pub fn sync_features(&mut self, requested: &[Uuid]) {
        let mut next = Vec::with_capacity(requested.len());
        for id in requested {
            if !next.contains(id) {
                next.push(*id);
            }
        }

        if next != self.feature_ids {
            self.feature_ids = next;
            self.touch();
        }
    }

    pub fn set_blocks(&mut self, blocks: Vec<ContentBlock>) {
        self.blocks = blocks;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
