use serde::Serialize;

/// Envelope codes. They travel alongside the HTTP status, never instead of it.
pub mod codes {
    pub const SUCCESS: &str = "1000";
    pub const ERROR: &str = "2000";
}

/// Client-facing message texts.
pub mod messages {
    pub const CATEGORY_NOT_FOUND: &str = "kategori tidak ditemukan";
    pub const INVALID_CATEGORY_ID: &str = "id kategori tidak valid";
    pub const INVALID_CATEGORY_REQUEST: &str = "request kategori tidak valid";
}

/// Uniform `{code, message, data?}` body returned by every endpoint.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T = serde_json::Value> {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>) -> Self {
        Self { code: codes::SUCCESS.to_string(), message: message.into(), data: None }
    }

    pub fn success_with(message: impl Into<String>, data: T) -> Self {
        Self { code: codes::SUCCESS.to_string(), message: message.into(), data: Some(data) }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { code: codes::ERROR.to_string(), message: message.into(), data: None }
    }
}
