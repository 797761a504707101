//! Client diagnostics: browser console plus the backend log

use crate::shared::api_utils::api_url;
use contracts::shared::logger::CreateLogRequest;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;

/// Log a technical error and forward it to `POST /api/logs`
///
/// Forwarding is best effort; its own failures only reach the console.
pub fn report_error(category: &str, message: &str) {
    log::error!("[{}] {}", category, message);

    let entry = CreateLogRequest::client(category, message);
    spawn_local(async move {
        let request = match Request::post(&api_url("/api/logs")).json(&entry) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Failed to encode log entry: {}", e);
                return;
            }
        };
        if let Err(e) = request.send().await {
            log::warn!("Failed to forward log entry: {}", e);
        }
    });
}
