use axum::Json;

use crate::shared::logger;

/// POST /api/logs
pub async fn create(
    Json(req): Json<contracts::shared::logger::CreateLogRequest>,
) -> axum::http::StatusCode {
    if req.message.trim().is_empty() {
        return axum::http::StatusCode::BAD_REQUEST;
    }
    logger::log_event(&req.source, &req.category, &req.message);
    axum::http::StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::logger::CreateLogRequest;

    #[tokio::test]
    async fn accepts_client_diagnostics() {
        let status = create(Json(CreateLogRequest::client("u101", "HTTP 502"))).await;
        assert_eq!(status, axum::http::StatusCode::OK);
    }

    #[tokio::test]
    async fn rejects_empty_message() {
        let status = create(Json(CreateLogRequest::client("u101", "  "))).await;
        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    }
}
