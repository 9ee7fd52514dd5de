//! Shared constants for end-to-end tests
//!
//! When fixture data changes (API key, movie IDs, etc.), update only this file.

// ============================================================================
// TMDb
// ============================================================================

/// API key the fake TMDb server accepts
pub const TEST_API_KEY: &str = "test-api-key";

/// Language requested by the enricher in tests
pub const TEST_LANGUAGE: &str = "pt-BR";

// ============================================================================
// Fixture movies
// ============================================================================

/// "Drive" (2011), directed by Nicolas Winding Refn
pub const DRIVE_ID: u64 = 64690;

/// "Parasite" (2019), directed by Bong Joon-ho
pub const PARASITE_ID: u64 = 496243;

/// "Spirited Away" (2001), directed by Hayao Miyazaki
pub const SPIRITED_AWAY_ID: u64 = 129;

/// "City of God" (2002), directed by Fernando Meirelles
pub const CITY_OF_GOD_ID: u64 = 598;

/// "Central Station" (1998), directed by Walter Salles
pub const CENTRAL_STATION_ID: u64 = 666;

/// All fixture movie IDs, in the order the popular listing returns them
pub const FIXTURE_MOVIE_IDS: [u64; 5] = [
    DRIVE_ID,
    PARASITE_ID,
    SPIRITED_AWAY_ID,
    CITY_OF_GOD_ID,
    CENTRAL_STATION_ID,
];
