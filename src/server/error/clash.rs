use std::time::Duration;

use thiserror::Error;

/// Errors from the Clash of Clans game-data API client.
///
/// None of these are fatal to a player database request, a failed lookup only means no
/// live name is available for that tag.
#[derive(Error, Debug)]
pub enum ClashError {
    #[error("Clash of Clans API token is not configured")]
    MissingToken,
    #[error("Clash of Clans API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Clash of Clans API returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Clash of Clans API lookup exceeded {0:?}")]
    Timeout(Duration),
}
