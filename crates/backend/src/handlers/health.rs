use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::shared::app_state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "generation_configured": state.reply_executor.is_configured(),
    }))
}
