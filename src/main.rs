use anyhow::{Context, Result};
use clap::Parser;
use movie_catalog_enricher::config::{AppConfig, CliConfig, FileConfig};
use movie_catalog_enricher::{run_enrichment, TmdbClient};
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path = PathBuf::from(s);
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(path))
}

#[derive(Parser, Debug)]
#[command(name = "catalog-enricher")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), "-", env!("GIT_HASH")))]
#[command(about = "Replace placeholder movies in a JSON catalog with real movies from TMDb")]
struct CliArgs {
    /// Path to the JSON movie catalog [default: data.json]
    #[clap(long, value_parser = parse_path)]
    pub dataset: Option<PathBuf>,

    /// Where to save the pre-enrichment catalog [default: <dataset>.enriched.bak]
    #[clap(long, value_parser = parse_path)]
    pub backup: Option<PathBuf>,

    /// Path to a TOML config file. Its values override the command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// TMDb v3 API key.
    #[clap(long, env = "TMDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Language of the fetched titles and overviews [default: pt-BR]
    #[clap(long)]
    pub language: Option<String>,

    /// Highest page of the popular listing to request [default: 5]
    #[clap(long)]
    pub max_pages: Option<u32>,

    /// Query TMDb and report the replacements without writing any file.
    #[clap(long, default_value_t = false)]
    pub dry_run: bool,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            api_key: self.api_key.clone(),
            dataset_path: self.dataset.clone(),
            backup_path: self.backup.clone(),
            language: self.language.clone(),
            max_pages: self.max_pages,
            dry_run: self.dry_run,
        }
    }
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    info!("Catalog Enricher");
    info!("================");
    info!("Catalog: {}", config.dataset_path.display());
    info!("Backup: {}", config.backup_path.display());
    info!("Language: {}", config.tmdb.language);
    if config.dry_run {
        info!("Dry run: no files will be written");
    }

    let client = TmdbClient::new(&config.tmdb)?;
    let report = run_enrichment(&config, client)?;
    report.log_summary();

    // Partial enrichment is still a successful run
    Ok(())
}
