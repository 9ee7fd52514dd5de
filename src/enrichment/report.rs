use tracing::{info, warn};

/// How an enrichment run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentOutcome {
    /// The catalog had no placeholders; nothing was fetched or written.
    NoPlaceholders,
    /// TMDb returned no candidates; nothing was written.
    NoCandidates,
    /// Candidates were processed; some or all placeholders may be replaced.
    Enriched,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentReport {
    pub outcome: EnrichmentOutcome,
    pub placeholders_found: usize,
    pub pages_fetched: u32,
    pub candidates_fetched: usize,
    /// Candidates consumed without producing a record (no id, no details).
    pub candidates_skipped: usize,
    /// Catalog indices that received a new record, in order.
    pub replaced_indices: Vec<usize>,
    pub backup_written: bool,
    pub dataset_written: bool,
}

impl EnrichmentReport {
    pub(crate) fn new(placeholders_found: usize) -> Self {
        Self {
            outcome: EnrichmentOutcome::NoPlaceholders,
            placeholders_found,
            pages_fetched: 0,
            candidates_fetched: 0,
            candidates_skipped: 0,
            replaced_indices: Vec::new(),
            backup_written: false,
            dataset_written: false,
        }
    }

    pub fn replaced(&self) -> usize {
        self.replaced_indices.len()
    }

    pub fn log_summary(&self) {
        info!("");
        info!("Enrichment Summary");
        info!("==================");
        match self.outcome {
            EnrichmentOutcome::NoPlaceholders => {
                info!("No placeholders to replace.");
                return;
            }
            EnrichmentOutcome::NoCandidates => {
                warn!("No movies obtained from TMDb. Check the API key or try again later.");
                return;
            }
            EnrichmentOutcome::Enriched => {}
        }
        info!("Placeholders found: {}", self.placeholders_found);
        info!(
            "Candidates fetched: {} ({} page(s))",
            self.candidates_fetched, self.pages_fetched
        );
        info!("Candidates skipped: {}", self.candidates_skipped);
        info!("Placeholders replaced: {}", self.replaced());
        if self.replaced() < self.placeholders_found {
            warn!(
                "{} placeholder(s) left unchanged",
                self.placeholders_found - self.replaced()
            );
        }
    }
}
