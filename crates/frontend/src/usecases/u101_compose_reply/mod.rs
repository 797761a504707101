//! Compose Reply UI (MVVM)
//!
//! Structure:
//! - api.rs: backend call
//! - view_model.rs: ComposeReplyVm with RwSignals
//! - view.rs: page component ComposeReplyPage

mod api;
mod view;
mod view_model;

pub use view::ComposeReplyPage;
pub use view_model::ComposeReplyVm;
