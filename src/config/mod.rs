mod file_config;

pub use file_config::{FileConfig, PacingConfig};

use crate::tmdb::TMDB_API_BASE;
use anyhow::{anyhow, bail, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATASET_PATH: &str = "data.json";
pub const BACKUP_SUFFIX: &str = ".enriched.bak";
pub const DEFAULT_LANGUAGE: &str = "pt-BR";
pub const DEFAULT_MAX_PAGES: u32 = 5;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_PAGE_PAUSE_MS: u64 = 250;
pub const DEFAULT_SUBSTITUTION_PAUSE_MS: u64 = 200;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Also filled from the `TMDB_API_KEY` environment variable by clap.
    pub api_key: Option<String>,
    pub dataset_path: Option<PathBuf>,
    pub backup_path: Option<PathBuf>,
    pub language: Option<String>,
    pub max_pages: Option<u32>,
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub dataset_path: PathBuf,
    pub backup_path: PathBuf,
    pub dry_run: bool,

    pub tmdb: TmdbSettings,
    pub enrichment: EnrichmentSettings,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let api_key = file
            .api_key
            .or_else(|| cli.api_key.clone())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                anyhow!("TMDB_API_KEY not found. Export it (or pass --api-key) and try again.")
            })?;

        let dataset_path = file
            .dataset_path
            .map(PathBuf::from)
            .or_else(|| cli.dataset_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH));

        let backup_path = file
            .backup_path
            .map(PathBuf::from)
            .or_else(|| cli.backup_path.clone())
            .unwrap_or_else(|| default_backup_path(&dataset_path));

        if backup_path == dataset_path {
            bail!(
                "Backup path must differ from the dataset path: {:?}",
                dataset_path
            );
        }

        let language = file
            .language
            .or_else(|| cli.language.clone())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let max_pages = file
            .max_pages
            .or(cli.max_pages)
            .unwrap_or(DEFAULT_MAX_PAGES);
        if max_pages == 0 {
            bail!("max_pages must be at least 1");
        }

        let request_timeout_secs = file
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        if request_timeout_secs == 0 {
            bail!("request_timeout_secs must be at least 1");
        }

        let tmdb = TmdbSettings {
            api_key,
            base_url: file
                .api_base_url
                .unwrap_or_else(|| TMDB_API_BASE.to_string()),
            language,
            request_timeout_secs,
        };

        let pacing = file.pacing.unwrap_or_default();
        let enrichment = EnrichmentSettings {
            max_pages,
            page_pause: Duration::from_millis(
                pacing.page_pause_ms.unwrap_or(DEFAULT_PAGE_PAUSE_MS),
            ),
            substitution_pause: Duration::from_millis(
                pacing
                    .substitution_pause_ms
                    .unwrap_or(DEFAULT_SUBSTITUTION_PAUSE_MS),
            ),
        };

        Ok(Self {
            dataset_path,
            backup_path,
            dry_run: cli.dry_run,
            tmdb,
            enrichment,
        })
    }
}

/// `data.json` -> `data.json.enriched.bak`
pub fn default_backup_path(dataset_path: &std::path::Path) -> PathBuf {
    let mut path = dataset_path.as_os_str().to_owned();
    path.push(BACKUP_SUFFIX);
    PathBuf::from(path)
}

#[derive(Debug, Clone)]
pub struct TmdbSettings {
    pub api_key: String,
    pub base_url: String,
    pub language: String,
    pub request_timeout_secs: u64,
}

impl Default for TmdbSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: TMDB_API_BASE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentSettings {
    /// Last page of the popular listing that may be requested.
    pub max_pages: u32,
    pub page_pause: Duration,
    pub substitution_pause: Duration,
}

impl Default for EnrichmentSettings {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            page_pause: Duration::from_millis(DEFAULT_PAGE_PAUSE_MS),
            substitution_pause: Duration::from_millis(DEFAULT_SUBSTITUTION_PAUSE_MS),
        }
    }
}
