use crate::shared::errors::AppError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// One entry of the `{"messages": [...]}` envelope. Errors carry a
/// `message`, successes carry a `text`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiMessage {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ApiMessage {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
            text: None,
        }
    }

    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            status: "ok",
            message: None,
            text: Some(text.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageBody {
    pub messages: Vec<ApiMessage>,
}

impl MessageBody {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            messages: vec![ApiMessage::ok(text)],
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            messages: vec![ApiMessage::error(message)],
        }
    }
}

/// Every failure renders as the same message-list envelope; validation,
/// not-found and storage failures differ only in message text. Callers
/// that need to tell them apart parse the text, as the original clients
/// always have.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::BAD_REQUEST,
        };

        let messages = match self {
            AppError::Validation(errors) => errors
                .into_iter()
                .map(|(field, message)| ApiMessage::error(format!("{}: {}", field, message)))
                .collect(),
            AppError::NotFound(message) => vec![ApiMessage::error(message)],
            other => vec![ApiMessage::error(other.to_string())],
        };

        (status, Json(MessageBody { messages })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_is_verbatim() {
        let messages = match AppError::NotFound("Layer not found.".to_string()) {
            AppError::NotFound(message) => MessageBody::error(message),
            _ => unreachable!(),
        };
        let body = serde_json::to_value(&messages).unwrap();
        assert_eq!(body["messages"][0]["status"], "error");
        assert_eq!(body["messages"][0]["message"], "Layer not found.");
        assert!(body["messages"][0].get("text").is_none());
    }

    #[test]
    fn ok_message_uses_text_key() {
        let body = serde_json::to_value(MessageBody::ok("Content added successfully.")).unwrap();
        assert_eq!(body["messages"][0]["status"], "ok");
        assert_eq!(body["messages"][0]["text"], "Content added successfully.");
        assert!(body["messages"][0].get("message").is_none());
    }
}
