//! Application configuration.
//!
//! Priority (highest to lowest): `DEIRA_*` environment variables, then
//! `{data_dir}/config.toml`, then built-in defaults. An unreadable TOML file
//! logs an error and falls back to defaults — configuration problems never
//! stop the app from starting.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::error;

const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_ADVICE_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_ADVICE_TIMEOUT_SECS: u64 = 10;

/// `{data_dir}/config.toml` — all fields are optional overrides.
#[derive(Deserialize, Default)]
struct TomlConfig {
    /// Log level filter string, e.g. "debug", "info,deira=trace" (default: "info").
    log: Option<String>,
    /// Log output format: "pretty" (default) | "json".
    log_format: Option<String>,
    /// Override the generative-AI API base URL.
    api_base_url: Option<String>,
    /// API key for the advice service. Prefer the env var for real keys.
    api_key: Option<String>,
    /// Model id used for advice generation.
    advice_model: Option<String>,
    /// Advice request timeout in seconds (default: 10).
    advice_timeout_secs: Option<u64>,
}

fn load_toml(data_dir: &Path) -> Option<TomlConfig> {
    let path = data_dir.join("config.toml");
    let contents = std::fs::read_to_string(&path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!(path = %path.display(), err = %e, "failed to parse config.toml — using defaults");
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log: String,
    /// "pretty" (default) | "json".
    pub log_format: String,
    /// Generative-AI API base URL (DEIRA_API_URL env var).
    pub api_base_url: String,
    /// API key for the advice service (DEIRA_API_KEY env var).
    /// None disables outbound advice calls; queries get the fallback line.
    pub api_key: Option<String>,
    pub advice_model: String,
    pub advice_timeout_secs: u64,
}

impl AppConfig {
    /// Build config from an optional data dir + env vars + TOML file.
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        let data_dir = data_dir
            .or_else(|| std::env::var("DEIRA_DATA_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(default_data_dir);

        let toml = load_toml(&data_dir).unwrap_or_default();

        let log = std::env::var("DEIRA_LOG")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.log)
            .unwrap_or_else(|| "info".to_string());

        let log_format = std::env::var("DEIRA_LOG_FORMAT")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.log_format)
            .unwrap_or_else(|| "pretty".to_string());

        let api_base_url = std::env::var("DEIRA_API_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let api_key = std::env::var("DEIRA_API_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.api_key);

        let advice_model = toml
            .advice_model
            .unwrap_or_else(|| DEFAULT_ADVICE_MODEL.to_string());
        let advice_timeout_secs = toml
            .advice_timeout_secs
            .unwrap_or(DEFAULT_ADVICE_TIMEOUT_SECS);

        Self {
            data_dir,
            log,
            log_format,
            api_base_url,
            api_key,
            advice_model,
            advice_timeout_secs,
        }
    }
}

fn default_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("deira");
        }
    }
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("deira");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".local").join("share").join("deira");
        }
    }
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("deira");
        }
    }
    PathBuf::from(".deira")
}

// ─── Tests ────────────────────────────────────────────────────────────────────
