use async_trait::async_trait;
use contracts::usecases::u101_compose_reply::messages::{
    GENERATION_FAILED_MESSAGE, NOT_CONFIGURED_MESSAGE,
};
use contracts::usecases::u101_compose_reply::{GenerateReplyRequest, InlineImage};
use thiserror::Error;

/// Errors a generation client reports to its caller
///
/// Provider details are logged where they happen and never cross this boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("{}", NOT_CONFIGURED_MESSAGE)]
    NotConfigured,

    #[error("{}", GENERATION_FAILED_MESSAGE)]
    Failed,
}

/// Input of a single generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// May be empty when an image is attached
    pub complaint: String,
    pub core_answer: String,
    pub image: Option<InlineImage>,
}

impl From<GenerateReplyRequest> for GenerationRequest {
    fn from(request: GenerateReplyRequest) -> Self {
        Self {
            complaint: request.complaint,
            core_answer: request.core_answer,
            image: request.image,
        }
    }
}

/// Capability of turning a complaint and core answer into a reply text
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// One call to the model, no retries
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;

    /// Whether a credential is available
    fn is_configured(&self) -> bool;

    fn provider_name(&self) -> &str;
}
