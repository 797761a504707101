//! State of the compose-reply form and its transitions.
//!
//! The Leptos view model holds this behind a signal and calls these methods
//! from its event handlers, so every transition is plain Rust and testable on
//! the host.

use super::messages::{GENERIC_FAILURE_MESSAGE, IMAGE_ONLY_MESSAGE, IMAGE_READ_FAILED_MESSAGE};
use super::request::{GenerateReplyRequest, InlineImage};
use super::validation::{can_submit, is_image_mime, split_data_url, ValidationError};

/// Picked image, already encoded as a data URL
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub data_url: String,
}

impl ImageAttachment {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        data_url: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            data_url: data_url.into(),
        }
    }

    /// Body of the data URL with the declared file type
    pub fn to_inline_image(&self) -> Option<InlineImage> {
        let (_, body) = split_data_url(&self.data_url)?;
        Some(InlineImage {
            data: body.to_string(),
            mime_type: self.mime_type.clone(),
        })
    }
}

/// What the result area shows; an error hides any earlier reply
#[derive(Debug, Clone, PartialEq)]
pub enum OperationState {
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl OperationState {
    pub fn from_parts(is_loading: bool, error: Option<&str>, response: &str) -> Self {
        if is_loading {
            Self::Loading
        } else if let Some(error) = error {
            Self::Error(error.to_string())
        } else if !response.is_empty() {
            Self::Success(response.to_string())
        } else {
            Self::Idle
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplyFormState {
    pub complaint: String,
    pub core_answer: String,
    pub image: Option<ImageAttachment>,
    pub response: String,
    pub error: Option<String>,
    pub is_loading: bool,
    pub is_copied: bool,
    /// Sequence number of the latest submission; older replies are dropped
    pub request_seq: u64,
    /// Sequence number of the latest file pick; older reads are dropped
    pub attach_seq: u64,
}

impl ReplyFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_submit(&self) -> bool {
        can_submit(
            &self.complaint,
            self.image.is_some(),
            &self.core_answer,
            self.is_loading,
        )
    }

    pub fn status(&self) -> OperationState {
        OperationState::from_parts(self.is_loading, self.error.as_deref(), &self.response)
    }

    /// Check the declared type of a picked file before reading it
    ///
    /// Returns the sequence number the read result must be applied with.
    pub fn begin_attach(&mut self, mime_type: &str) -> Result<u64, ValidationError> {
        if !is_image_mime(mime_type) {
            self.error = Some(IMAGE_ONLY_MESSAGE.to_string());
            return Err(ValidationError::UnsupportedFileType(mime_type.to_string()));
        }
        self.error = None;
        self.attach_seq += 1;
        Ok(self.attach_seq)
    }

    /// Store the encoded image, replacing any earlier one
    ///
    /// Returns false if a newer pick or a removal superseded `seq`.
    pub fn attach_image(&mut self, seq: u64, attachment: ImageAttachment) -> bool {
        if seq != self.attach_seq {
            return false;
        }
        self.image = Some(attachment);
        true
    }

    pub fn attach_failed(&mut self, seq: u64) -> bool {
        if seq != self.attach_seq {
            return false;
        }
        self.image = None;
        self.error = Some(IMAGE_READ_FAILED_MESSAGE.to_string());
        true
    }

    pub fn remove_image(&mut self) {
        self.image = None;
        self.attach_seq += 1;
    }

    /// Enter loading and build the request, or `None` when submit is not allowed
    pub fn begin_submit(&mut self) -> Option<(u64, GenerateReplyRequest)> {
        if !self.can_submit() {
            return None;
        }
        self.is_loading = true;
        self.error = None;
        self.response.clear();
        self.request_seq += 1;

        let image = self
            .image
            .as_ref()
            .and_then(ImageAttachment::to_inline_image);
        let request = GenerateReplyRequest::new(self.complaint.clone(), self.core_answer.clone(), image);
        Some((self.request_seq, request))
    }

    /// Apply a reply; returns false if `seq` belongs to a superseded submission
    pub fn finish_success(&mut self, seq: u64, reply: String) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.error = None;
        self.response = reply;
        self.is_loading = false;
        true
    }

    pub fn finish_failure(&mut self, seq: u64) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.error = Some(GENERIC_FAILURE_MESSAGE.to_string());
        self.is_loading = false;
        true
    }

    /// Text to put on the clipboard, if any
    pub fn copy_text(&self) -> Option<&str> {
        if self.response.is_empty() {
            None
        } else {
            Some(self.response.as_str())
        }
    }

    pub fn mark_copied(&mut self) {
        self.is_copied = true;
    }

    pub fn reset_copied(&mut self) {
        self.is_copied = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORE: &str = "Kami akan kirim ulang barangnya hari ini juga.";

    fn png() -> ImageAttachment {
        ImageAttachment::new("resi.png", "image/png", "data:image/png;base64,iVBORw0KGgo=")
    }

    fn jpeg() -> ImageAttachment {
        ImageAttachment::new("foto.jpg", "image/jpeg", "data:image/jpeg;base64,/9j/4AAQ")
    }

    fn attach(state: &mut ReplyFormState, attachment: ImageAttachment) {
        let seq = state.begin_attach(&attachment.mime_type).unwrap();
        assert!(state.attach_image(seq, attachment));
    }

    #[test]
    fn empty_complaint_without_image_stays_disabled() {
        let mut state = ReplyFormState::new();
        state.core_answer = CORE.to_string();
        assert!(!state.can_submit());
        assert!(state.begin_submit().is_none());
        assert!(!state.is_loading);
    }

    #[test]
    fn image_only_complaint_enables_submit() {
        let mut state = ReplyFormState::new();
        state.core_answer = CORE.to_string();
        attach(&mut state, png());
        assert!(state.can_submit());
    }

    #[test]
    fn rejecting_non_image_sets_message_and_keeps_preview_empty() {
        let mut state = ReplyFormState::new();
        assert!(state.begin_attach("application/pdf").is_err());
        assert_eq!(state.error.as_deref(), Some(IMAGE_ONLY_MESSAGE));
        assert!(state.image.is_none());
        assert!(!state.is_loading);

        assert!(state.begin_attach("image/jpeg").is_ok());
        assert!(state.error.is_none());
    }

    #[test]
    fn new_attachment_replaces_previous() {
        let mut state = ReplyFormState::new();
        attach(&mut state, png());
        attach(&mut state, jpeg());
        assert_eq!(state.image.as_ref().map(|i| i.file_name.as_str()), Some("foto.jpg"));
    }

    #[test]
    fn failed_read_leaves_no_attachment() {
        let mut state = ReplyFormState::new();
        attach(&mut state, png());
        let seq = state.begin_attach("image/png").unwrap();
        assert!(state.attach_failed(seq));
        assert!(state.image.is_none());
        assert_eq!(state.error.as_deref(), Some(IMAGE_READ_FAILED_MESSAGE));
    }

    #[test]
    fn removed_image_is_not_sent() {
        let mut state = ReplyFormState::new();
        state.complaint = "Barang pecah".to_string();
        state.core_answer = CORE.to_string();
        attach(&mut state, png());
        state.remove_image();

        let (_, request) = state.begin_submit().unwrap();
        assert!(request.image.is_none());
    }

    #[test]
    fn submit_splits_data_url_into_inline_image() {
        let mut state = ReplyFormState::new();
        state.core_answer = CORE.to_string();
        attach(&mut state, png());

        let (seq, request) = state.begin_submit().unwrap();
        assert_eq!(seq, 1);
        let image = request.image.unwrap();
        assert_eq!(image.data, "iVBORw0KGgo=");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(request.complaint, "");
        assert_eq!(request.core_answer, CORE);
    }

    #[test]
    fn submit_clears_previous_outcome_and_blocks_resubmit() {
        let mut state = ReplyFormState::new();
        state.complaint = "Pesanan belum sampai".to_string();
        state.core_answer = CORE.to_string();
        state.response = "old reply".to_string();
        state.error = Some("old error".to_string());

        assert!(state.begin_submit().is_some());
        assert!(state.is_loading);
        assert!(state.response.is_empty());
        assert!(state.error.is_none());
        assert_eq!(state.status(), OperationState::Loading);
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn success_stores_reply_verbatim() {
        let mut state = ReplyFormState::new();
        state.complaint = "Pesanan belum sampai".to_string();
        state.core_answer = CORE.to_string();
        let (seq, _) = state.begin_submit().unwrap();

        let reply = "Yth. Pelanggan,\n\nMohon maaf atas ketidaknyamanannya.\n\n~ZR".to_string();
        assert!(state.finish_success(seq, reply.clone()));
        assert_eq!(state.response, reply);
        assert!(state.error.is_none());
        assert!(!state.is_loading);
        assert_eq!(state.status(), OperationState::Success(reply));
    }

    #[test]
    fn failure_sets_generic_message_and_keeps_result_empty() {
        let mut state = ReplyFormState::new();
        state.complaint = "Pesanan belum sampai".to_string();
        state.core_answer = CORE.to_string();
        let (seq, _) = state.begin_submit().unwrap();

        assert!(state.finish_failure(seq));
        assert!(state.response.is_empty());
        assert_eq!(state.error.as_deref(), Some(GENERIC_FAILURE_MESSAGE));
        assert!(!state.is_loading);
        assert!(state.can_submit());
    }

    #[test]
    fn stale_reply_is_discarded() {
        let mut state = ReplyFormState::new();
        state.complaint = "Pesanan belum sampai".to_string();
        state.core_answer = CORE.to_string();
        let (first, _) = state.begin_submit().unwrap();
        state.finish_failure(first);
        let (second, _) = state.begin_submit().unwrap();

        assert!(!state.finish_success(first, "stale".to_string()));
        assert!(state.is_loading);
        assert!(state.finish_success(second, "fresh".to_string()));
        assert_eq!(state.response, "fresh");
    }

    #[test]
    fn superseded_read_does_not_replace_newer_pick() {
        let mut state = ReplyFormState::new();
        let first = state.begin_attach("image/png").unwrap();
        let second = state.begin_attach("image/jpeg").unwrap();

        assert!(state.attach_image(second, jpeg()));
        assert!(!state.attach_image(first, png()));
        assert_eq!(state.image, Some(jpeg()));

        assert!(!state.attach_failed(first));
        assert_eq!(state.image, Some(jpeg()));
        assert!(state.error.is_none());

        state.core_answer = CORE.to_string();
        let (_, request) = state.begin_submit().unwrap();
        assert_eq!(request.image.map(|i| i.mime_type).as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn read_finishing_after_removal_is_dropped() {
        let mut state = ReplyFormState::new();
        let seq = state.begin_attach("image/png").unwrap();
        state.remove_image();
        assert!(!state.attach_image(seq, png()));
        assert!(state.image.is_none());
    }

    #[test]
    fn error_hides_reply_in_status() {
        let mut state = ReplyFormState::new();
        assert_eq!(state.status(), OperationState::Idle);
        state.response = "Terima kasih. ~PR".to_string();
        assert!(state.begin_attach("text/plain").is_err());
        assert_eq!(state.status(), OperationState::Error(IMAGE_ONLY_MESSAGE.to_string()));
        assert!(state.begin_attach("image/png").is_ok());
        assert_eq!(state.status(), OperationState::Success("Terima kasih. ~PR".to_string()));
    }

    #[test]
    fn copy_needs_a_result() {
        let mut state = ReplyFormState::new();
        assert!(state.copy_text().is_none());
        state.response = "Terima kasih. ~PR".to_string();
        assert_eq!(state.copy_text(), Some("Terima kasih. ~PR"));
        state.mark_copied();
        assert!(state.is_copied);
        state.reset_copied();
        assert!(!state.is_copied);
    }
}
