pub mod api_utils;
pub mod clipboard;
pub mod file_reader;
pub mod icons;
pub mod logger;
