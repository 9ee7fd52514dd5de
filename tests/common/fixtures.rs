//! Test fixture creation for catalogs and fake TMDb data

use super::constants::*;
use super::fake_tmdb::FakeTmdb;
use movie_catalog_enricher::config::{AppConfig, CliConfig, FileConfig, PacingConfig};
use movie_catalog_enricher::{RetryPolicy, TmdbClient};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// A placeholder entry as seeded in the catalog.
pub fn placeholder_entry(n: usize) -> Value {
    json!({
        "titulo": format!("Filme Placeholder {}", n),
        "descricao": "",
        "ano": 0,
        "diretor": "",
        "categoria": "Placeholder",
        "avaliacao": 0.0,
        "link": "",
        "poster": ""
    })
}

/// A real catalog entry that must never be touched.
pub fn real_entry() -> Value {
    json!({
        "titulo": "O Auto da Compadecida",
        "descricao": "As aventuras de João Grilo e Chicó no sertão nordestino.",
        "ano": 2000,
        "diretor": "Guel Arraes",
        "categoria": "Comédia",
        "avaliacao": 8.6,
        "link": "https://www.imdb.com/title/tt0271383/",
        "poster": "https://image.tmdb.org/t/p/w500/compadecida.jpg"
    })
}

/// Writes `entries` as a pretty-printed catalog into a fresh temp dir.
/// Returns (temp_dir, catalog_path, original file content)
pub fn create_catalog(entries: Vec<Value>) -> (TempDir, PathBuf, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    let content = serde_json::to_string_pretty(&entries).unwrap();
    fs::write(&path, &content).unwrap();
    (dir, path, content)
}

/// Popular listing entry for a fixture movie.
pub fn popular_entry(id: u64) -> Value {
    json!({
        "adult": false,
        "id": id,
        "title": format!("Movie {}", id),
        "vote_average": 7.5,
        "popularity": 100.0
    })
}

/// Registers details and credits for every fixture movie.
pub fn add_fixture_movies(tmdb: &FakeTmdb) {
    // (id, title, release date, genre, imdb id, director)
    let movies = [
        (
            DRIVE_ID,
            "Drive",
            "2011-08-12",
            "Drama",
            "tt0780504",
            "Nicolas Winding Refn",
        ),
        (
            PARASITE_ID,
            "Parasita",
            "2019-05-30",
            "Comédia",
            "tt6751668",
            "Bong Joon-ho",
        ),
        (
            SPIRITED_AWAY_ID,
            "A Viagem de Chihiro",
            "2001-07-20",
            "Animação",
            "tt0245429",
            "Hayao Miyazaki",
        ),
        (
            CITY_OF_GOD_ID,
            "Cidade de Deus",
            "2002-08-30",
            "Crime",
            "tt0317248",
            "Fernando Meirelles",
        ),
        (
            CENTRAL_STATION_ID,
            "Central do Brasil",
            "1998-04-03",
            "Drama",
            "tt0140888",
            "Walter Salles",
        ),
    ];

    for (id, title, release_date, genre, imdb_id, director) in movies {
        tmdb.add_movie(
            id,
            json!({
                "id": id,
                "title": title,
                "original_title": title,
                "overview": format!("Sinopse de {}.", title),
                "release_date": release_date,
                "genres": [{"id": 1, "name": genre}],
                "imdb_id": imdb_id,
                "poster_path": format!("/{}.jpg", id),
                "runtime": 110
            }),
            json!({
                "id": id,
                "cast": [],
                "crew": [
                    {"name": "Someone", "job": "Producer", "department": "Production"},
                    {"name": director, "job": "Director", "department": "Directing"}
                ]
            }),
        );
    }
}

/// Resolves an AppConfig pointing at the fake server with no pauses.
pub fn test_config(tmdb: &FakeTmdb, dataset_path: PathBuf, dry_run: bool) -> AppConfig {
    let cli = CliConfig {
        api_key: Some(TEST_API_KEY.to_string()),
        dataset_path: Some(dataset_path),
        language: Some(TEST_LANGUAGE.to_string()),
        dry_run,
        ..Default::default()
    };
    let file = FileConfig {
        api_base_url: Some(tmdb.api_base_url.clone()),
        request_timeout_secs: Some(5),
        pacing: Some(PacingConfig {
            page_pause_ms: Some(0),
            substitution_pause_ms: Some(0),
        }),
        ..Default::default()
    };
    AppConfig::resolve(&cli, Some(file)).unwrap()
}

/// A client for `config` whose retries don't wait.
pub fn test_client(config: &AppConfig) -> TmdbClient {
    TmdbClient::new(&config.tmdb)
        .unwrap()
        .with_retry_policy(RetryPolicy {
            max_attempts: 3,
            rate_limit_backoff: Duration::ZERO,
            transient_backoff: Duration::ZERO,
        })
}
