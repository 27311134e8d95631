use serde::Serialize;
use utoipa::ToSchema;

/// Plain `{"message": ...}` body.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct ErrorDetail {
    pub detail: String,
}
