use crate::usecases::u101_compose_reply::ReplyExecutor;
use std::sync::Arc;

/// Shared state handed to axum handlers
#[derive(Clone)]
pub struct AppState {
    pub reply_executor: Arc<ReplyExecutor>,
}

impl AppState {
    pub fn new(reply_executor: ReplyExecutor) -> Self {
        Self {
            reply_executor: Arc::new(reply_executor),
        }
    }
}
