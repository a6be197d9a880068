//! API server configuration.
//!
//! Built once at startup and handed to the router; nothing mutates it
//! afterwards.

use anyhow::Context;
use serde::Deserialize;

/// Top-level API server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Add `ngrok-skip-browser-warning: true` to every response.
    #[serde(default = "default_skip_browser_warning")]
    pub skip_browser_warning: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_skip_browser_warning() -> bool {
    true
}

impl ApiConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
        let config: Self =
            toml::from_str(&contents).with_context(|| format!("parsing config {path}"))?;
        Ok(config)
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply `FC_API_*` environment variables on top of this config.
    pub fn with_env_overrides(self) -> anyhow::Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("FC_API_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("FC_API_PORT") {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid FC_API_PORT '{port}'"))?;
        }
        if let Some(origins) = lookup("FC_API_CORS_ORIGINS") {
            self.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(flag) = lookup("FC_API_SKIP_BROWSER_WARNING") {
            self.skip_browser_warning = flag.eq_ignore_ascii_case("true") || flag == "1";
        }
        Ok(self)
    }

    /// `host:port` string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
            skip_browser_warning: default_skip_browser_warning(),
        }
    }
}
