//! Fixed user-facing texts and timings shared by the form and the server

/// Shown when a non-image file is picked
pub const IMAGE_ONLY_MESSAGE: &str = "Hanya file gambar (JPG, PNG, dll.) yang diperbolehkan.";

/// Shown when the picked image could not be read
pub const IMAGE_READ_FAILED_MESSAGE: &str =
    "Gambar tidak dapat dibaca. Silakan pilih file gambar lain.";

/// Shown for every failed generation, whatever the cause
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Maaf, terjadi kesalahan saat memproses permintaan Anda. Silakan coba lagi.";

/// Substituted into the prompt when the complaint text is empty
pub const EMPTY_COMPLAINT_PLACEHOLDER: &str = "(Tidak ada teks, lihat gambar terlampir)";

/// Opaque error the completion client surfaces to its caller
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to get a response from the AI model.";

pub const NOT_CONFIGURED_MESSAGE: &str =
    "API Key tidak terkonfigurasi. Aplikasi tidak dapat terhubung ke layanan AI.";

/// How long the "copied" indicator stays on
pub const COPIED_RESET_MS: u32 = 2000;

/// Delay before scrolling the result into view, lets layout settle
pub const SCROLL_DELAY_MS: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timings_match_the_page_behaviour() {
        assert_eq!(COPIED_RESET_MS, 2000);
        assert_eq!(SCROLL_DELAY_MS, 100);
    }
}
