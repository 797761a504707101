use serde::{Deserialize, Serialize};

use super::validation::{is_image_mime, ValidationError};

/// Request to expand a core answer into a full customer reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateReplyRequest {
    /// Complaint text, may be empty when an image is attached
    #[serde(default)]
    pub complaint: String,

    /// Terse internal resolution written by staff
    pub core_answer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<InlineImage>,
}

/// Image embedded in the request as a base64 body plus media type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineImage {
    /// Base64 body without the `data:` prefix
    pub data: String,
    pub mime_type: String,
}

impl GenerateReplyRequest {
    pub fn new(
        complaint: impl Into<String>,
        core_answer: impl Into<String>,
        image: Option<InlineImage>,
    ) -> Self {
        Self {
            complaint: complaint.into(),
            core_answer: core_answer.into(),
            image,
        }
    }

    /// Same guard the form applies, re-checked at the API boundary
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.core_answer.trim().is_empty() {
            return Err(ValidationError::MissingCoreAnswer);
        }
        if self.complaint.trim().is_empty() && self.image.is_none() {
            return Err(ValidationError::MissingComplaint);
        }
        if let Some(image) = &self.image {
            if !is_image_mime(&image.mime_type) {
                return Err(ValidationError::UnsupportedFileType(image.mime_type.clone()));
            }
            if image.data.trim().is_empty() {
                return Err(ValidationError::InvalidImagePayload("empty body".to_string()));
            }
        }
        Ok(())
    }
}
