use crate::shared::api_utils::api_url;
use contracts::usecases::common::UseCaseError;
use contracts::usecases::u101_compose_reply::{GenerateReplyRequest, GenerateReplyResponse};
use gloo_net::http::Request;

/// API client for UseCase u101
pub async fn generate_reply(request: &GenerateReplyRequest) -> Result<GenerateReplyResponse, String> {
    let response = Request::post(&api_url("/api/u101/reply/generate"))
        .json(request)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to fetch: {}", e))?;

    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<UseCaseError>().await {
            Ok(err) => format!("HTTP {}: {}", status, err),
            Err(_) => format!("HTTP {}", status),
        });
    }

    response
        .json::<GenerateReplyResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
