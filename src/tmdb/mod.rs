//! Access to The Movie Database (TMDb) v3 API.
//!
//! The enrichment pipeline only needs three read endpoints, exposed through
//! the [`MovieSource`] trait so it can run against the real HTTP client or
//! a scripted source in tests.

mod client;
pub mod models;
mod retry_policy;

pub use client::{TmdbClient, TMDB_API_BASE, TMDB_IMAGE_BASE};
pub use models::{CrewMember, Genre, MovieCredits, MovieDetails, PopularMovie, PopularPage};
pub use retry_policy::RetryPolicy;

use thiserror::Error;

/// Why a TMDb request produced no payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("rate limited (HTTP 429)")]
    RateLimited,

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Network and parse failures are transient. Any HTTP status other
    /// than 429 is a definitive answer from the server.
    pub fn is_transient(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::Decode(_))
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

/// The TMDb endpoints consumed by the enrichment pipeline.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait MovieSource {
    /// One page of the "popular movies" listing. Pages start at 1.
    fn popular_movies(&self, page: u32) -> FetchResult<PopularPage>;

    /// Full details of a single movie.
    fn movie_details(&self, movie_id: u64) -> FetchResult<MovieDetails>;

    /// Cast and crew of a single movie.
    fn movie_credits(&self, movie_id: u64) -> FetchResult<MovieCredits>;
}
