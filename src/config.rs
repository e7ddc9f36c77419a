//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Cloudflare account and credential configuration.
    #[serde(default)]
    pub cloudflare: CloudflareConfig,

    /// Model identifiers for the two pipeline steps.
    #[serde(default)]
    pub models: ModelsConfig,

    /// HTTP client tuning.
    #[serde(default)]
    pub http: HttpConfig,
}

/// Cloudflare account and credential configuration.
#[derive(Debug, Default, Deserialize)]
pub struct CloudflareConfig {
    /// Account identifier the API routes are addressed by.
    pub account_id: Option<String>,
    /// Bearer token for both endpoints.
    pub api_token: Option<String>,
}

/// Model identifiers, as catalog ids or short aliases.
#[derive(Debug, Deserialize)]
pub struct ModelsConfig {
    /// Text model used to translate and enrich prompts.
    #[serde(default = "default_text_model")]
    pub text: String,
    /// Image model used to render the final prompt.
    #[serde(default = "default_image_model")]
    pub image: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self { text: default_text_model(), image: default_image_model() }
    }
}

fn default_text_model() -> String {
    "@cf/meta/llama-3-8b-instruct".to_string()
}

fn default_image_model() -> String {
    "@cf/stabilityai/stable-diffusion-xl-base-1.0".to_string()
}

/// HTTP client tuning.
#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds. Image generation can take a while.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connection establishment timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Get the Cloudflare account id, preferring the environment variable.
    #[must_use]
    pub fn account_id(&self) -> Option<String> {
        std::env::var("DANQING_ACCOUNT_ID").ok().or_else(|| self.cloudflare.account_id.clone())
    }

    /// Get the Cloudflare API token, preferring the environment variable.
    #[must_use]
    pub fn api_token(&self) -> Option<String> {
        std::env::var("DANQING_API_TOKEN").ok().or_else(|| self.cloudflare.api_token.clone())
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `DANQING_CONFIG` environment variable
/// 3. `~/.config/danqing/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("DANQING_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/danqing/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/danqing/config.toml")
    } else {
        PathBuf::from("danqing.toml")
    }
}
