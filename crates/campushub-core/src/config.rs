use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{HubError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HubConfig {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_web_host")]
    pub host: String,
    #[serde(default = "default_web_port")]
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_web_host(),
            port: default_web_port(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Custom path for the session file. Defaults to
    /// `~/.config/campushub/session.json`.
    #[serde(default)]
    pub path: Option<String>,
}

impl HubConfig {
    /// Load configuration with a two-layer TOML merge:
    /// 1. `~/.config/campushub/config.toml` (global)
    /// 2. `<project_dir>/campushub.toml` (project)
    pub fn load(project_dir: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(dir) = project_dir {
            let project_config = dir.join("campushub.toml");
            if project_config.exists() {
                builder = builder.add_source(File::from(project_config).required(false));
            }
        }

        let config = builder
            .build()
            .map_err(|e| HubError::Config(e.to_string()))?;

        let mut cfg: Self = config
            .try_deserialize()
            .map_err(|e| HubError::Config(e.to_string()))?;

        cfg.validate();
        Ok(cfg)
    }

    /// Defaults only, no files.
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Fix bad values rather than rejecting the config, logging each repair.
    pub fn validate(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.web.host.trim().is_empty() {
            warnings.push(format!(
                "web.host is empty, using {}",
                default_web_host()
            ));
            self.web.host = default_web_host();
        }

        if self.web.port == 0 {
            warnings.push(format!("web.port = 0, using {}", default_web_port()));
            self.web.port = default_web_port();
        }

        if let Some(ref path) = self.session.path {
            if path.trim().is_empty() {
                warnings.push("session.path is empty, using the default location".to_string());
                self.session.path = None;
            }
        }

        for w in &warnings {
            tracing::warn!("config: {}", w);
        }

        warnings
    }

    /// Where the session file goes, honoring the `[session]` override.
    pub fn session_path(&self) -> Result<PathBuf> {
        match &self.session.path {
            Some(p) => Ok(PathBuf::from(p)),
            None => crate::session::FileSessionStore::default_path(),
        }
    }
}

fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("campushub").join("config.toml"))
}

fn default_web_host() -> String {
    "127.0.0.1".to_string()
}

fn default_web_port() -> u16 {
    8740
}
