use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built frontend (trunk dist)
    pub static_dir: String,
    /// Upper bound for request bodies, in MiB
    #[serde(default = "default_max_body_mb")]
    pub max_body_mb: usize,
}

fn default_max_body_mb() -> usize {
    20
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiSettings {
    pub endpoint: String,
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    /// Request timeout; transport default (none) when omitted
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Fallback variable checked when `api_key_env` is unset
pub const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "crates/frontend/dist"

[gemini]
endpoint = "https://generativelanguage.googleapis.com/v1beta"
model = "gemini-2.5-flash"
api_key_env = "API_KEY"
temperature = 0.5
top_p = 0.9
top_k = 40
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolve the API key from the environment
///
/// Blank values count as missing. Returns `None` when neither the configured
/// variable nor `GEMINI_API_KEY` holds a key.
pub fn resolve_api_key(settings: &GeminiSettings) -> Option<String> {
    resolve_api_key_with(settings, |name| std::env::var(name).ok())
}

fn resolve_api_key_with<F>(settings: &GeminiSettings, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    [settings.api_key_env.as_str(), FALLBACK_API_KEY_ENV]
        .into_iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Get the static directory from configuration
/// Resolves relative paths against the current directory
pub fn get_static_dir(config: &Config) -> PathBuf {
    PathBuf::from(&config.server.static_dir)
}
