//! Configuration loading for Bio Revive 360.
//! Reads biorevyx.toml from the current directory or the path in the
//! BIOREVYX_CONFIG env var. A missing default file falls back to defaults
//! so the site boots with zero setup; an explicitly configured path must
//! exist.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use biorevyx_common::error::{BiorevyxError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

fn default_title() -> String { "Bio Revive 360".to_string() }
fn default_tagline() -> String {
    "Manage patients, staff, finances, and more with our comprehensive, user-friendly system."
        .to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { title: default_title(), tagline: default_tagline() }
    }
}

mod tests;

impl Config {
    /// Load configuration, honoring a BIOREVYX_CONFIG path override.
    pub fn load() -> Result<Self> {
        match std::env::var("BIOREVYX_CONFIG") {
            Ok(path) => {
                if !Path::new(&path).exists() {
                    return Err(BiorevyxError::Config(format!(
                        "Config file not found: {path} (set via BIOREVYX_CONFIG)"
                    )));
                }
                Self::from_file(&path)
            }
            Err(_) => {
                let path = "biorevyx.toml";
                if Path::new(path).exists() {
                    Self::from_file(path)
                } else {
                    info!("no biorevyx.toml found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Address string for the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
