//! Catalog enrichment: placeholder detection, TMDb lookup, substitution and
//! persistence of the result.

mod enricher;
pub mod mapper;
mod report;

pub use enricher::Enricher;
pub use report::{EnrichmentOutcome, EnrichmentReport};

use crate::catalog::Dataset;
use crate::config::AppConfig;
use crate::tmdb::MovieSource;
use anyhow::{Context, Result};
use tracing::{error, info};

/// Run one enrichment pass over the catalog file named by `config`.
///
/// The catalog is only rewritten when at least one candidate was fetched.
/// The pre-run snapshot goes to the backup path first; a failed backup is
/// logged and does not stop the overwrite.
pub fn run_enrichment<S: MovieSource>(config: &AppConfig, source: S) -> Result<EnrichmentReport> {
    info!("Loading catalog from {:?}...", config.dataset_path);
    let original = Dataset::load(&config.dataset_path)
        .with_context(|| format!("Failed to load catalog {:?}", config.dataset_path))?;
    info!("Loaded {} entries", original.len());

    let mut dataset = original.clone();
    let enricher = Enricher::new(source, config.enrichment.clone());
    let mut report = enricher.enrich(&mut dataset);

    if report.outcome != EnrichmentOutcome::Enriched {
        return Ok(report);
    }

    if config.dry_run {
        info!("Dry run, leaving {:?} untouched", config.dataset_path);
        return Ok(report);
    }

    match original.write_to(&config.backup_path) {
        Ok(()) => {
            info!("Backup saved to {:?}", config.backup_path);
            report.backup_written = true;
        }
        Err(e) => error!("Could not save backup to {:?}: {}", config.backup_path, e),
    }

    dataset
        .write_to(&config.dataset_path)
        .with_context(|| format!("Failed to write catalog {:?}", config.dataset_path))?;
    report.dataset_written = true;
    info!(
        "Replaced {} placeholders in {:?}",
        report.replaced(),
        config.dataset_path
    );

    Ok(report)
}
