use serde::{Deserialize, Serialize};

/// Generated reply, returned verbatim from the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateReplyResponse {
    pub reply: String,
}
