//! Blocking HTTP client for the TMDb v3 API.

use super::models::{MovieCredits, MovieDetails, PopularPage};
use super::retry_policy::RetryPolicy;
use super::{FetchError, FetchResult, MovieSource};
use crate::config::TmdbSettings;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, warn};

pub const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";
pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
    retry_policy: RetryPolicy,
}

impl TmdbClient {
    pub fn new(settings: &TmdbSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            language: settings.language.clone(),
            retry_policy: RetryPolicy::default(),
        })
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` with `params` plus the API key, retrying per the policy.
    ///
    /// Failures are logged here; callers only decide what to skip.
    pub fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> FetchResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut attempt = 0;

        loop {
            let error = match self.try_fetch(&url, params) {
                Ok(payload) => return Ok(payload),
                Err(e) => e,
            };

            match self.retry_policy.backoff_for(&error, attempt) {
                Some(wait) => {
                    if error == FetchError::RateLimited {
                        warn!("TMDb rate limit hit on {}, retrying in {:?}", path, wait);
                    } else {
                        warn!(
                            "TMDb request {} failed ({}), retrying in {:?}",
                            path, error, wait
                        );
                    }
                    std::thread::sleep(wait);
                    attempt += 1;
                }
                None => {
                    error!(
                        "TMDb request {} failed after {} attempt(s): {}",
                        path,
                        attempt + 1,
                        error
                    );
                    return Err(error);
                }
            }
        }
    }

    fn try_fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> FetchResult<T> {
        debug!("GET {}", url);

        // Strip the URL from reqwest errors, it carries the API key
        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .map_err(|e| FetchError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimited);
        }
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.json::<T>().map_err(|e| {
            if e.is_decode() {
                FetchError::Decode(e.without_url().to_string())
            } else {
                FetchError::Transport(e.without_url().to_string())
            }
        })
    }
}

impl MovieSource for TmdbClient {
    fn popular_movies(&self, page: u32) -> FetchResult<PopularPage> {
        let page = page.to_string();
        self.fetch(
            "/movie/popular",
            &[("language", self.language.as_str()), ("page", page.as_str())],
        )
    }

    fn movie_details(&self, movie_id: u64) -> FetchResult<MovieDetails> {
        self.fetch(
            &format!("/movie/{}", movie_id),
            &[("language", self.language.as_str())],
        )
    }

    fn movie_credits(&self, movie_id: u64) -> FetchResult<MovieCredits> {
        self.fetch(
            &format!("/movie/{}/credits", movie_id),
            &[("language", self.language.as_str())],
        )
    }
}
