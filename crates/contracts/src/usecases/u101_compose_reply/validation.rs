use thiserror::Error;

use super::messages::IMAGE_ONLY_MESSAGE;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", IMAGE_ONLY_MESSAGE)]
    UnsupportedFileType(String),

    #[error("core answer must not be empty")]
    MissingCoreAnswer,

    #[error("either complaint text or an image is required")]
    MissingComplaint,

    #[error("invalid image payload: {0}")]
    InvalidImagePayload(String),
}

/// True when the declared media type names an image format (`image/*`)
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type
        .trim()
        .to_ascii_lowercase()
        .strip_prefix("image/")
        .is_some_and(|subtype| !subtype.is_empty())
}

/// Submit guard: some complaint context, a core answer, nothing in flight
pub fn can_submit(complaint: &str, has_image: bool, core_answer: &str, is_loading: bool) -> bool {
    let has_complaint = !complaint.trim().is_empty() || has_image;
    has_complaint && !core_answer.trim().is_empty() && !is_loading
}

/// Split `data:<mime>;base64,<body>` into `(mime, body)`
pub fn split_data_url(data_url: &str) -> Option<(&str, &str)> {
    let rest = data_url.strip_prefix("data:")?;
    let (header, body) = rest.split_once(',')?;
    let mime = header.strip_suffix(";base64")?;
    if body.is_empty() {
        return None;
    }
    Some((mime, body))
}

pub fn to_data_url(mime_type: &str, base64_body: &str) -> String {
    format!("data:{};base64,{}", mime_type, base64_body)
}
