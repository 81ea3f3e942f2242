use std::net::SocketAddr;
use std::path::PathBuf;

use aras_web::common::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_SITE_ROOT: &str = "./dist";

/// Server settings, read from the environment after `.env` is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Built client bundle; `index.html` is the single-page fallback.
    pub site_root: PathBuf,
    /// TOML file replacing the embedded site content.
    pub content_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup("BIND_ADDR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind.clone()))?;

        let site_root = lookup("SITE_ROOT")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_ROOT));
        if !site_root.is_dir() {
            return Err(ConfigError::MissingSiteRoot(site_root));
        }

        let content_path = lookup("SITE_CONTENT")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            site_root,
            content_path,
        })
    }
}
