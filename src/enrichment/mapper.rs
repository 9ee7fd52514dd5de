//! Conversion of TMDb payloads into catalog records.

use crate::catalog::{MovieRecord, DEFAULT_CATEGORY};
use crate::tmdb::{MovieCredits, MovieDetails, TMDB_IMAGE_BASE};

const IMDB_TITLE_BASE: &str = "https://www.imdb.com/title";
const DIRECTOR_JOB: &str = "Director";

/// Build a catalog record from a movie's details and credits.
///
/// `vote_average` comes from the popular listing entry, not from the details.
pub fn build_movie_record(
    details: &MovieDetails,
    credits: Option<&MovieCredits>,
    vote_average: Option<f64>,
) -> MovieRecord {
    let title = non_empty(&details.title)
        .or_else(|| non_empty(&details.original_title))
        .unwrap_or_default()
        .to_string();

    let category = details
        .genres
        .as_ref()
        .and_then(|genres| genres.first())
        .and_then(|genre| genre.name.clone())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let link = non_empty(&details.imdb_id)
        .map(|imdb_id| format!("{}/{}/", IMDB_TITLE_BASE, imdb_id))
        .unwrap_or_default();

    let poster = non_empty(&details.poster_path)
        .map(|poster_path| format!("{}{}", TMDB_IMAGE_BASE, poster_path))
        .unwrap_or_default();

    MovieRecord {
        title,
        description: details.overview.clone().unwrap_or_default(),
        year: details
            .release_date
            .as_deref()
            .map(parse_release_year)
            .unwrap_or(0),
        director: credits.map(find_director).unwrap_or_default(),
        category,
        rating: vote_average.unwrap_or(0.0),
        link,
        poster,
    }
}

/// Year component of a `YYYY-MM-DD` release date, 0 if it can't be parsed.
pub fn parse_release_year(release_date: &str) -> i32 {
    release_date
        .split('-')
        .next()
        .and_then(|year| year.trim().parse().ok())
        .unwrap_or(0)
}

/// Name of the first crew member credited as director.
fn find_director(credits: &MovieCredits) -> String {
    credits
        .crew
        .iter()
        .flatten()
        .find(|member| member.job.as_deref() == Some(DIRECTOR_JOB))
        .and_then(|member| member.name.clone())
        .unwrap_or_default()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
