use crate::shared::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Shallow-merge a request body onto a loaded entity.
///
/// Protected keys are dropped from the body before merging; those fields
/// are stamped by server-side code only. Unrecognized keys are ignored by
/// deserialization, recognized ones overwrite the entity's current value.
pub fn merge_request_fields<T>(
    entity: &T,
    mut body: Map<String, Value>,
    protected: &[&str],
) -> AppResult<T>
where
    T: Serialize + DeserializeOwned,
{
    for key in protected {
        body.remove(*key);
    }

    let mut value = serde_json::to_value(entity)?;
    let target = value
        .as_object_mut()
        .ok_or_else(|| AppError::InternalError("Entity does not serialize to an object".into()))?;

    for (key, incoming) in body {
        target.insert(key, incoming);
    }

    serde_json::from_value(value)
        .map_err(|e| AppError::InvalidInput(format!("Invalid field value: {}", e)))
}
