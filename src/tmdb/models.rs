//! Response types for the TMDb endpoints we consume.
//!
//! Every field is optional: TMDb omits or nulls fields freely, and a missing
//! value must fall back to a default rather than fail the whole response.
//! Keys we don't read are kept in `extra`, so an object counts as empty only
//! when TMDb sent no keys at all.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

// =============================================================================
// Popular listing
// =============================================================================

/// A page of `/movie/popular`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PopularPage {
    pub page: Option<u32>,
    #[serde(deserialize_with = "lenient_results")]
    pub results: Option<Vec<PopularMovie>>,
    pub total_pages: Option<u32>,
    pub total_results: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PopularPage {
    /// True if the response was an empty object.
    pub fn is_empty(&self) -> bool {
        self.page.is_none()
            && self.results.is_none()
            && self.total_pages.is_none()
            && self.total_results.is_none()
            && self.extra.is_empty()
    }

    pub fn into_results(self) -> Vec<PopularMovie> {
        self.results.unwrap_or_default()
    }
}

/// A minimal movie entry from the popular listing. A field of the wrong
/// type decodes as `None` instead of failing the page.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PopularMovie {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub vote_average: Option<f64>,
}

impl PopularMovie {
    /// The TMDb id, if present and non-zero.
    pub fn valid_id(&self) -> Option<u64> {
        self.id.filter(|id| *id != 0)
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Any present `results` counts as a listing; entries that aren't objects
/// become id-less candidates.
fn lenient_results<'de, D>(deserializer: D) -> Result<Option<Vec<PopularMovie>>, D::Error>
where
    D: Deserializer<'de>,
{
    let results = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    };
    Ok(Some(results))
}

// =============================================================================
// Movie details
// =============================================================================

/// `/movie/{id}` response.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct MovieDetails {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub genres: Option<Vec<Genre>>,
    pub imdb_id: Option<String>,
    pub poster_path: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MovieDetails {
    /// True if the response was an empty object.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.title.is_none()
            && self.original_title.is_none()
            && self.overview.is_none()
            && self.release_date.is_none()
            && self.genres.is_none()
            && self.imdb_id.is_none()
            && self.poster_path.is_none()
            && self.extra.is_empty()
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Genre {
    pub id: Option<u64>,
    pub name: Option<String>,
}

// =============================================================================
// Credits
// =============================================================================

/// `/movie/{id}/credits` response. Only the crew is used.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct MovieCredits {
    pub id: Option<u64>,
    pub crew: Option<Vec<CrewMember>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CrewMember {
    pub name: Option<String>,
    pub job: Option<String>,
    pub department: Option<String>,
}
