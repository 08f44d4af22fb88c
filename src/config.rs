//! Server configuration.
//!
//! Loaded from a YAML file (path in `VERANDA_CONFIG`, default
//! `veranda.yaml`); a missing file falls back to built-in defaults. The
//! `LISTEN` environment variable overrides the bind address either way.
//! The index and login-failed page paths are routing constants, not
//! configuration.

use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_PATH: &str = "veranda.yaml";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DOCUMENT_ROOT: &str = "./webapp";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds, e.g. "127.0.0.1:8080"
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    /// Document root for static file serving
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            static_files: StaticConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_DOCUMENT_ROOT),
        }
    }
}

impl Config {
    /// Loads the configuration file and applies environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var("VERANDA_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = match std::fs::read_to_string(&path) {
            Ok(text) => {
                Self::from_yaml(&text).with_context(|| format!("parsing config file {path}"))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            config.server.listen_addr = addr;
        }

        Ok(config)
    }

    /// Parses a YAML document; omitted sections keep their defaults.
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
