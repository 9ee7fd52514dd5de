use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub api_key: Option<String>,
    pub dataset_path: Option<String>,
    pub backup_path: Option<String>,
    pub language: Option<String>,
    pub max_pages: Option<u32>,

    // TMDb connection
    pub api_base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,

    pub pacing: Option<PacingConfig>,
}

/// Pauses between API calls, to stay under TMDb rate limits.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct PacingConfig {
    pub page_pause_ms: Option<u64>,
    pub substitution_pause_ms: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
