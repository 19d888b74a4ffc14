//! Configuration handling

use crate::api::DEFAULT_ENDPOINT;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the submission endpoint
pub const ENDPOINT_ENV: &str = "ONBOARD_URL";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OnboardConfig {
    /// Submission endpoint URL
    pub endpoint_url: Option<String>,
    /// Delay used by `mock-server` when none is given on the command line
    pub mock_delay_ms: Option<u64>,
}

impl OnboardConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "onboard", "onboard-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Endpoint to post to: `ONBOARD_URL`, then the config file, then the default
    pub fn endpoint(&self) -> String {
        resolve_endpoint(std::env::var(ENDPOINT_ENV).ok(), self.endpoint_url.as_deref())
    }
}

fn resolve_endpoint(env: Option<String>, configured: Option<&str>) -> String {
    env.filter(|url| !url.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}
