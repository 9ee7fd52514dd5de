//! Movie Catalog Enricher Library
//!
//! Replaces placeholder entries of a JSON movie catalog with real movies
//! taken from TMDb's popular listing. The `catalog-enricher` binary is a
//! thin CLI around [`enrichment::run_enrichment`]; the modules are exposed
//! for testing and potential reuse.

pub mod catalog;
pub mod config;
pub mod enrichment;
pub mod tmdb;

// Re-export commonly used types for convenience
pub use catalog::{Dataset, MovieRecord};
pub use config::{AppConfig, CliConfig, FileConfig};
pub use enrichment::{run_enrichment, EnrichmentOutcome, EnrichmentReport};
pub use tmdb::{MovieSource, RetryPolicy, TmdbClient};
