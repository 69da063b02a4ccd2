//! Configuration loading.
//!
//! Precedence, lowest to highest: built-in defaults, config file,
//! `TASKDESK_*` environment variables, CLI flags (applied by the caller
//! after loading). File discovery order: explicit `--config` path,
//! `./taskdesk.yaml`, then `config.yaml` under the platform config
//! directory (e.g. `~/.config/taskdesk/`).

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default port for the task page.
pub const DEFAULT_PORT: u16 = 8090;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

/// Remote backend settings: the REST root of the hosted database (e.g.
/// `https://<project>.supabase.co/rest/v1`) and its API key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub url: String,
    pub api_key: String,
}

impl Config {
    /// Load configuration, merging file and environment tiers.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match discover_path(explicit_path) {
            Some(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                serde_yaml::from_str(&text)
                    .with_context(|| format!("failed to parse config file {}", path.display()))?
            }
            None => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Apply `TASKDESK_*` overrides from the given lookup.
    fn apply_overrides(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(url) = get("TASKDESK_BACKEND_URL") {
            self.backend.url = url;
        }
        if let Some(key) = get("TASKDESK_API_KEY") {
            self.backend.api_key = key;
        }
        if let Some(port) = get("TASKDESK_PORT")
            && let Ok(port) = port.parse()
        {
            self.server.port = port;
        }
    }

    /// Reject configurations the server cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.backend.url.is_empty() {
            bail!(
                "backend.url is not configured; set it in taskdesk.yaml, \
                 TASKDESK_BACKEND_URL, or --backend-url"
            );
        }
        Ok(())
    }
}

/// Resolve the config file to read, if any. An explicit path is always
/// used (and must exist); discovered paths are optional.
fn discover_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from("taskdesk.yaml");
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join("taskdesk").join("config.yaml");
    if user.exists() {
        return Some(user);
    }

    None
}
