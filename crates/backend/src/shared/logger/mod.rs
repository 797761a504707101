/// Log an application event under a category
///
/// # Examples
/// ```ignore
/// logger::log("startup", "Server started");
/// logger::log("u101", "Reply generated");
/// ```
pub fn log(category: &str, message: &str) {
    log_event("server", category, message);
}

/// Log an event reported by `source` ("server" or "client")
pub fn log_event(source: &str, category: &str, message: &str) {
    match source {
        "client" => tracing::warn!(target: "client", "[{}] {}", category, message),
        _ => tracing::info!("[{}] {}", category, message),
    }
}
