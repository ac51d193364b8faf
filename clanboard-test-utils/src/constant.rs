//! Test configuration constants.
//!
//! Tags use only characters from the game's tag alphabet so they pass strict
//! validation wherever the server applies it.

/// Home clan used by most tests.
pub static TEST_CLAN_TAG: &str = "#2PR8R8V8P";

/// A second clan, used for tags that moved between clans.
pub static TEST_OTHER_CLAN_TAG: &str = "#L2Y0QVG8";

/// Placeholder game-data API token. Not a real credential.
pub static TEST_CLASH_API_TOKEN: &str = "test-clash-api-token";

/// User agent string for test game-data API requests.
pub static TEST_USER_AGENT: &str = "clanboard-tests/1.0 (contact@example.com)";
