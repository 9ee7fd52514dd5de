//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{create_catalog, placeholder_entry, test_client, test_config, FakeTmdb};
//!
//! #[test]
//! fn test_enrich_one() {
//!     let tmdb = FakeTmdb::spawn();
//!     let (_dir, path, _) = create_catalog(vec![placeholder_entry(1)]);
//!     let config = test_config(&tmdb, path, false);
//!     let report = movie_catalog_enricher::run_enrichment(&config, test_client(&config));
//! }
//! ```

mod constants;
mod fixtures;

// Public API - this is what tests import
#[allow(unused_imports)]
pub use constants::*;
#[allow(unused_imports)]
pub use fake_tmdb::{FakeTmdb, RecordedRequest, Scripted};
#[allow(unused_imports)]
pub use fixtures::{
    add_fixture_movies, create_catalog, placeholder_entry, popular_entry, real_entry,
    test_client, test_config,
};
