//! API utilities for frontend-backend communication
//!
//! The backend serves the frontend, so requests go to the page origin by
//! default. A `<meta name="api-base" content="http://host:port">` tag in
//! index.html overrides it when the frontend is served separately (trunk serve).

/// Get the base URL for API requests
///
/// # Returns
/// - Content of the `api-base` meta tag when present
/// - Otherwise the page origin, like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };

    let override_base = window
        .document()
        .and_then(|doc| doc.query_selector("meta[name='api-base']").ok().flatten())
        .and_then(|meta| meta.get_attribute("content"))
        .map(|base| base.trim().trim_end_matches('/').to_string())
        .filter(|base| !base.is_empty());

    if let Some(base) = override_base {
        return base;
    }

    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/u101/reply/generate");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
