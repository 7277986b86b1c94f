//! Configuration parsing – reads a `KEY=VALUE` file.
//!
//! The same file serves the terminal client and the web server; each ignores
//! keys it does not need.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::credential::DEFAULT_TOKEN_KEY;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Dashboard client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the backend, without a trailing slash.
    pub api_base_url: String,
    /// Storage key the bearer token is persisted under.
    pub token_storage_key: String,
    /// File holding the token (terminal client only).
    pub token_file: Option<PathBuf>,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_storage_key: DEFAULT_TOKEN_KEY.to_string(),
            token_file: None,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Default config path.
    pub fn default_path() -> &'static str {
        "/etc/novanest/dashboard.conf"
    }

    /// Override the backend URL with a known-good value.
    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = normalize_base_url(url);
        self
    }

    /// Override the backend URL from untrusted input (environment, command line).
    pub fn try_with_api_base_url(mut self, url: &str) -> Result<Self> {
        self.api_base_url = parse_base_url(url)?;
        Ok(self)
    }

    /// Full URL of the startup listing for an already-encoded query.
    pub fn startups_url(&self, query: &str) -> String {
        let mut url = format!("{}{}", self.api_base_url, crate::protocol::STARTUPS_PATH);
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        url
    }
}

/// Load the config file at `path`.
///
/// Lines starting with `#` are comments. Values may be optionally
/// double-quoted. Unknown keys are silently ignored.
pub fn load(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config: {}", path.display()))?;
    let config = from_str(&text)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Parse config text. Fails only on values that are present but invalid.
pub fn from_str(text: &str) -> Result<Config> {
    let map = parse_conf(text);
    let get = |key: &str| -> Option<String> {
        map.get(key).cloned().filter(|v| !v.is_empty())
    };

    let api_base_url = match get("API_BASE_URL") {
        Some(raw) => parse_base_url(&raw).with_context(|| format!("Invalid API_BASE_URL: {raw}"))?,
        None => DEFAULT_API_BASE_URL.to_string(),
    };

    let request_timeout_secs = get("REQUEST_TIMEOUT_SECS")
        .map(|v| {
            v.parse::<u64>()
                .with_context(|| format!("Invalid REQUEST_TIMEOUT_SECS: {v}"))
        })
        .transpose()?
        .filter(|secs| *secs > 0);

    Ok(Config {
        api_base_url,
        token_storage_key: get("TOKEN_STORAGE_KEY")
            .unwrap_or_else(|| DEFAULT_TOKEN_KEY.to_string()),
        token_file: get("TOKEN_FILE").map(PathBuf::from),
        request_timeout_secs,
    })
}

/// Validate an absolute base URL and strip its trailing slash.
pub fn parse_base_url(raw: &str) -> Result<String> {
    url::Url::parse(raw.trim()).with_context(|| format!("Not an absolute URL: {raw}"))?;
    Ok(normalize_base_url(raw))
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Parse `KEY=VALUE` lines into a map, stripping optional double-quotes.
fn parse_conf(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, val)) = line.split_once('=') {
            let key = key.trim();
            let val = val.trim().trim_matches('"');
            map.insert(key.to_string(), val.to_string());
        }
    }
    map
}

// ─── tests ───────────────────────────────────────────────────────────────
