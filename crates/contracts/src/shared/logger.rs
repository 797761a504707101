use serde::{Deserialize, Serialize};

/// Diagnostic entry sent by the browser to `POST /api/logs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLogRequest {
    pub source: String, // "client" or "server"
    pub category: String,
    pub message: String,
}

impl CreateLogRequest {
    pub fn client(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: "client".to_string(),
            category: category.into(),
            message: message.into(),
        }
    }
}
