use crate::shared::llm::prompts::ends_with_admin_tag;
use crate::shared::llm::{GenerationClient, GenerationError, GenerationRequest};
use crate::shared::logger;
use base64::Engine;
use contracts::usecases::common::{UseCaseError, UseCaseResult};
use contracts::usecases::u101_compose_reply::{
    GenerateReplyRequest, GenerateReplyResponse, ValidationError,
};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Executor for UseCase u101: expand a core answer into a customer reply
pub struct ReplyExecutor {
    client: Arc<dyn GenerationClient>,
}

impl ReplyExecutor {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self { client }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    /// Validate the request and run exactly one generation call
    pub async fn generate_reply(
        &self,
        request: GenerateReplyRequest,
    ) -> UseCaseResult<GenerateReplyResponse> {
        validate(&request).map_err(|e| UseCaseError::validation(e.to_string()))?;

        let request_id = Uuid::new_v4();
        let has_image = request.image.is_some();
        tracing::info!(
            "[u101] {} generating reply via {} (complaint: {} chars, image: {})",
            request_id,
            self.client.provider_name(),
            request.complaint.chars().count(),
            has_image
        );

        let start = Instant::now();
        let generation_request = GenerationRequest::from(request);

        match self.client.generate(&generation_request).await {
            Ok(reply) => {
                if !ends_with_admin_tag(&reply) {
                    tracing::warn!("[u101] {} reply does not end with an admin tag", request_id);
                }
                logger::log(
                    "u101",
                    &format!(
                        "{} reply generated in {}ms",
                        request_id,
                        start.elapsed().as_millis()
                    ),
                );
                Ok(GenerateReplyResponse { reply })
            }
            Err(e @ GenerationError::NotConfigured) => {
                tracing::error!("[u101] {} {}", request_id, e);
                Err(UseCaseError::not_configured(e.to_string()))
            }
            Err(e @ GenerationError::Failed) => {
                tracing::error!("[u101] {} {}", request_id, e);
                Err(UseCaseError::generation_failed(e.to_string()))
            }
        }
    }
}

fn validate(request: &GenerateReplyRequest) -> Result<(), ValidationError> {
    request.validate()?;
    if let Some(image) = &request.image {
        base64::engine::general_purpose::STANDARD
            .decode(image.data.as_bytes())
            .map_err(|e| ValidationError::InvalidImagePayload(e.to_string()))?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::usecases::u101_compose_reply::InlineImage;
    use std::sync::Mutex;

    /// Records every request and answers with a fixed outcome
    pub(crate) struct FakeClient {
        pub outcome: Result<String, GenerationError>,
        pub configured: bool,
        pub calls: Mutex<Vec<GenerationRequest>>,
    }

    impl FakeClient {
        pub(crate) fn replying(text: &str) -> Self {
            Self {
                outcome: Ok(text.to_string()),
                configured: true,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing(error: GenerationError) -> Self {
            Self {
                configured: error != GenerationError::NotConfigured,
                outcome: Err(error),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl GenerationClient for FakeClient {
        async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
            self.calls.lock().unwrap().push(request.clone());
            match &self.outcome {
                Ok(text) => Ok(text.clone()),
                Err(GenerationError::NotConfigured) => Err(GenerationError::NotConfigured),
                Err(GenerationError::Failed) => Err(GenerationError::Failed),
            }
        }

        fn is_configured(&self) -> bool {
            self.configured
        }

        fn provider_name(&self) -> &str {
            "Fake"
        }
    }

    const CORE: &str = "Kami akan kirim ulang barangnya hari ini juga.";

    #[tokio::test]
    async fn reply_is_returned_verbatim() {
        let reply = "Yth. Pelanggan,\n\nMohon maaf atas ketidaknyamanannya. ~ZR";
        let client = Arc::new(FakeClient::replying(reply));
        let executor = ReplyExecutor::new(client.clone());

        let response = executor
            .generate_reply(GenerateReplyRequest::new("", CORE, Some(png())))
            .await
            .unwrap();

        assert_eq!(response.reply, reply);
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn empty_complaint_without_image_never_calls_client() {
        let client = Arc::new(FakeClient::replying("unused"));
        let executor = ReplyExecutor::new(client.clone());

        let err = executor
            .generate_reply(GenerateReplyRequest::new("", CORE, None))
            .await
            .unwrap_err();

        assert_eq!(err.code, UseCaseError::VALIDATION_ERROR);
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn invalid_base64_is_rejected() {
        let client = Arc::new(FakeClient::replying("unused"));
        let executor = ReplyExecutor::new(client.clone());
        let image = InlineImage {
            data: "not base64!".to_string(),
            mime_type: "image/png".to_string(),
        };

        let err = executor
            .generate_reply(GenerateReplyRequest::new("Rusak", CORE, Some(image)))
            .await
            .unwrap_err();

        assert_eq!(err.code, UseCaseError::VALIDATION_ERROR);
        assert!(err.message.starts_with("invalid image payload"));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn client_errors_are_classified() {
        let executor = ReplyExecutor::new(Arc::new(FakeClient::failing(GenerationError::Failed)));
        let err = executor
            .generate_reply(GenerateReplyRequest::new("Rusak", CORE, None))
            .await
            .unwrap_err();
        assert_eq!(err.code, UseCaseError::GENERATION_FAILED);
        assert_eq!(err.message, "Failed to get a response from the AI model.");

        let executor =
            ReplyExecutor::new(Arc::new(FakeClient::failing(GenerationError::NotConfigured)));
        assert!(!executor.is_configured());
        let err = executor
            .generate_reply(GenerateReplyRequest::new("Rusak", CORE, None))
            .await
            .unwrap_err();
        assert_eq!(err.code, UseCaseError::NOT_CONFIGURED);
    }

    #[tokio::test]
    async fn request_fields_reach_the_client_unchanged() {
        let client = Arc::new(FakeClient::replying("ok ~PR"));
        let executor = ReplyExecutor::new(client.clone());

        executor
            .generate_reply(GenerateReplyRequest::new("", CORE, Some(png())))
            .await
            .unwrap();

        let calls = client.calls.lock().unwrap();
        assert_eq!(calls[0].complaint, "");
        assert_eq!(calls[0].core_answer, CORE);
        assert_eq!(calls[0].image, Some(png()));
    }

    pub(crate) fn png() -> InlineImage {
        InlineImage {
            data: "iVBORw0KGgo=".to_string(),
            mime_type: "image/png".to_string(),
        }
    }
}
