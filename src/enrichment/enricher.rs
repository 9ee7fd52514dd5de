//! Placeholder substitution over an in-memory catalog.
//!
//! ## Pipeline
//!
//! ```text
//! placeholders → /movie/popular (pages 1..=max_pages) → candidates
//!              → per placeholder: next candidate → details + credits → record
//! ```
//!
//! The candidate list is walked with a single cursor shared by all
//! placeholders. Every candidate the cursor passes is consumed, whether it
//! produced a record or was skipped.

use super::mapper::build_movie_record;
use super::report::{EnrichmentOutcome, EnrichmentReport};
use crate::catalog::{Dataset, MovieRecord};
use crate::config::EnrichmentSettings;
use crate::tmdb::{MovieCredits, MovieSource, PopularMovie};
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct Enricher<S: MovieSource> {
    source: S,
    settings: EnrichmentSettings,
}

impl<S: MovieSource> Enricher<S> {
    pub fn new(source: S, settings: EnrichmentSettings) -> Self {
        Self { source, settings }
    }

    /// Replace the placeholders of `dataset` in place.
    ///
    /// Entries that are not placeholders are never touched, and the
    /// dataset keeps its length and order.
    pub fn enrich(&self, dataset: &mut Dataset) -> EnrichmentReport {
        let placeholders = dataset.placeholder_indices();
        let mut report = EnrichmentReport::new(placeholders.len());

        info!("Placeholders found: {}", placeholders.len());
        if placeholders.is_empty() {
            return report;
        }

        let candidates = self.collect_candidates(placeholders.len(), &mut report);
        if candidates.is_empty() {
            report.outcome = EnrichmentOutcome::NoCandidates;
            return report;
        }
        report.outcome = EnrichmentOutcome::Enriched;

        let mut cursor = candidates.iter();
        for &index in &placeholders {
            let Some(record) = self.next_record(&mut cursor, &mut report) else {
                info!(
                    "Candidates exhausted, {} placeholder(s) left unchanged",
                    placeholders.len() - report.replaced()
                );
                break;
            };

            match dataset.replace(index, &record) {
                Ok(true) => {
                    debug!("Replaced entry {} with \"{}\"", index, record.title);
                    report.replaced_indices.push(index);
                }
                Ok(false) => warn!("Placeholder index {} is out of range", index),
                Err(e) => warn!("Failed to store record for entry {}: {}", index, e),
            }
            pause(self.settings.substitution_pause);
        }

        report
    }

    /// Page through the popular listing until there are at least `wanted`
    /// candidates, the page limit is passed, or a page can't be fetched.
    fn collect_candidates(
        &self,
        wanted: usize,
        report: &mut EnrichmentReport,
    ) -> Vec<PopularMovie> {
        let mut candidates = Vec::new();
        let mut page = 1;

        while candidates.len() < wanted && page <= self.settings.max_pages {
            let listing = match self.source.popular_movies(page) {
                Ok(listing) if !listing.is_empty() => listing,
                Ok(_) => {
                    warn!("Popular movies page {} was empty, stopping", page);
                    break;
                }
                Err(e) => {
                    warn!(
                        "Popular movies page {} unavailable ({}), stopping",
                        page, e
                    );
                    break;
                }
            };

            let results = listing.into_results();
            debug!("Page {}: {} candidates", page, results.len());
            candidates.extend(results);
            report.pages_fetched += 1;
            page += 1;
            pause(self.settings.page_pause);
        }

        report.candidates_fetched = candidates.len();
        info!(
            "Fetched {} candidates from {} page(s)",
            candidates.len(),
            report.pages_fetched
        );
        candidates
    }

    /// Advance `cursor` until a candidate resolves to a record.
    fn next_record<'a>(
        &self,
        cursor: &mut impl Iterator<Item = &'a PopularMovie>,
        report: &mut EnrichmentReport,
    ) -> Option<MovieRecord> {
        for candidate in cursor {
            match self.resolve(candidate) {
                Some(record) => return Some(record),
                None => report.candidates_skipped += 1,
            }
        }
        None
    }

    fn resolve(&self, candidate: &PopularMovie) -> Option<MovieRecord> {
        let Some(movie_id) = candidate.valid_id() else {
            debug!("Skipping candidate without id: {:?}", candidate.title);
            return None;
        };

        let details = match self.source.movie_details(movie_id) {
            Ok(details) if !details.is_empty() => details,
            Ok(_) => {
                debug!("Skipping movie {}: empty details", movie_id);
                return None;
            }
            Err(e) => {
                debug!("Skipping movie {}: {}", movie_id, e);
                return None;
            }
        };

        let credits = self.source.movie_credits(movie_id).unwrap_or_else(|e| {
            debug!(
                "No credits for movie {} ({}), continuing without",
                movie_id, e
            );
            MovieCredits::default()
        });

        Some(build_movie_record(&details, Some(&credits), candidate.vote_average))
    }
}

fn pause(duration: Duration) {
    if !duration.is_zero() {
        std::thread::sleep(duration);
    }
}
