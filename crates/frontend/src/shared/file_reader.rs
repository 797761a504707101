//! Reading picked files in the browser

use base64::Engine;
use contracts::usecases::u101_compose_reply::validation::to_data_url;
use wasm_bindgen_futures::JsFuture;

/// Read a file and encode it as `data:<type>;base64,<body>`
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    if bytes.is_empty() {
        return Err(format!("File {} is empty", file.name()));
    }

    let body = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(to_data_url(&file.type_(), &body))
}
