//! Error types for the clanboard server.
//!
//! Each domain (configuration, player database, game-data API) has its own error type and
//! all of them aggregate into [`Error`]. Every error implements `IntoResponse` so handlers can
//! return `Result<_, Error>` and rely on `?`.

pub mod clash;
pub mod config;
pub mod player;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{clash::ClashError, config::ConfigError, player::PlayerError},
};

/// Main error type for the clanboard server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Player database errors (invalid tags, failed seed fetches)
/// - Game-data API errors (request, status, timeout)
/// - External library errors (database, listener I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Player database error (invalid input, fatal seed fetch failure).
    #[error(transparent)]
    PlayerError(#[from] PlayerError),
    /// Clash of Clans API error.
    #[error(transparent)]
    ClashError(#[from] ClashError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in clanboard's code.
    #[error("Internal error with clanboard's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid clan or player tag
/// - 404 Not Found - Player not found
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::PlayerError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details such as raw store errors.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::error::player::RecordClass;

    #[test]
    fn invalid_clan_tag_is_bad_request() {
        let resp = Error::from(PlayerError::InvalidClanTag("#NOPE".to_string())).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn player_not_found_is_not_found() {
        let resp = Error::from(PlayerError::PlayerNotFound("#Q8PL".to_string())).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn record_fetch_failure_is_internal_server_error() {
        let err = PlayerError::RecordFetch {
            class: RecordClass::Warnings,
            clan_tag: "#2PR8R8V8P".to_string(),
            source: sea_orm::DbErr::Custom("connection reset".to_string()),
        };
        let resp = Error::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn database_error_is_internal_server_error() {
        let resp = Error::from(sea_orm::DbErr::Custom("boom".to_string())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
