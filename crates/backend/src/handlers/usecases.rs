use axum::{extract::State, http::StatusCode, Json};

use crate::shared::app_state::AppState;
use contracts::usecases::common::UseCaseError;
use contracts::usecases::u101_compose_reply::{GenerateReplyRequest, GenerateReplyResponse};

// ============================================================================
// UseCase u101: Compose customer reply
// ============================================================================

/// POST /api/u101/reply/generate
pub async fn u101_generate_reply(
    State(state): State<AppState>,
    Json(request): Json<GenerateReplyRequest>,
) -> Result<Json<GenerateReplyResponse>, (StatusCode, Json<UseCaseError>)> {
    match state.reply_executor.generate_reply(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            let status = status_for(&e);
            if status.is_server_error() {
                tracing::error!("Failed to generate reply: {}", e);
            } else {
                tracing::warn!("Rejected reply request: {}", e);
            }
            Err((status, Json(e)))
        }
    }
}

fn status_for(error: &UseCaseError) -> StatusCode {
    match error.code.as_str() {
        UseCaseError::VALIDATION_ERROR => StatusCode::BAD_REQUEST,
        UseCaseError::NOT_CONFIGURED => StatusCode::SERVICE_UNAVAILABLE,
        UseCaseError::GENERATION_FAILED => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::GenerationError;
    use crate::usecases::u101_compose_reply::executor::tests::{png, FakeClient};
    use crate::usecases::u101_compose_reply::ReplyExecutor;
    use std::sync::Arc;

    const CORE: &str = "Kami akan kirim ulang barangnya hari ini juga.";

    fn state(client: FakeClient) -> AppState {
        AppState::new(ReplyExecutor::new(Arc::new(client)))
    }

    #[tokio::test]
    async fn success_returns_reply() {
        let state = state(FakeClient::replying("Yth. Pelanggan ~PR"));
        let Json(body) = u101_generate_reply(
            State(state),
            Json(GenerateReplyRequest::new("", CORE, Some(png()))),
        )
        .await
        .unwrap();
        assert_eq!(body.reply, "Yth. Pelanggan ~PR");
    }

    #[tokio::test]
    async fn blank_core_answer_is_bad_request() {
        let state = state(FakeClient::replying("unused"));
        let (status, Json(body)) = u101_generate_reply(
            State(state),
            Json(GenerateReplyRequest::new("Barang rusak", " ", None)),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, UseCaseError::VALIDATION_ERROR);
    }

    #[tokio::test]
    async fn missing_key_is_service_unavailable() {
        let state = state(FakeClient::failing(GenerationError::NotConfigured));
        let (status, _) = u101_generate_reply(
            State(state),
            Json(GenerateReplyRequest::new("Barang rusak", CORE, None)),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn generation_failure_is_bad_gateway() {
        let state = state(FakeClient::failing(GenerationError::Failed));
        let (status, Json(body)) = u101_generate_reply(
            State(state),
            Json(GenerateReplyRequest::new("Barang rusak", CORE, None)),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.code, UseCaseError::GENERATION_FAILED);
        assert!(body.details.is_none());
    }
}
