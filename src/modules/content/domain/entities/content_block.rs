use crate::shared::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One typed block of an editorial content body. The wire shape is the
/// editor's `{type, data}` pair; the order of blocks is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    Heading {
        text: String,
    },
    Quote {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cite: Option<String>,
    },
    Image {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    Video {
        url: String,
    },
    List {
        items: Vec<String>,
    },
}

impl ContentBlock {
    /// Parse a raw editor payload into the canonical block list.
    ///
    /// Accepts either `{"data": [...]}` (the editor envelope) or a bare
    /// block array. Any malformed block or unknown block type aborts the
    /// whole payload; nothing is persisted on failure.
    pub fn parse_payload(raw: &Value) -> AppResult<Vec<ContentBlock>> {
        let items = match raw {
            Value::Object(map) => map
                .get("data")
                .and_then(Value::as_array)
                .ok_or_else(|| {
                    AppError::validation("blocks", "Block payload must carry a data array")
                })?,
            Value::Array(items) => items,
            _ => {
                return Err(AppError::validation(
                    "blocks",
                    "Block payload must be an array or a {data: [...]} object",
                ))
            }
        };

        items
            .iter()
            .enumerate()
            .map(|(position, item)| {
                serde_json::from_value::<ContentBlock>(item.clone()).map_err(|e| {
                    AppError::validation(
                        "blocks",
                        format!("Invalid block at position {}: {}", position, e),
                    )
                })
            })
            .collect()
    }
}
