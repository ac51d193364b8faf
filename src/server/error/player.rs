use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// The four administrative record classes every player database request depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordClass {
    Notes,
    Warnings,
    TenureActions,
    DepartureActions,
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Notes => "notes",
            Self::Warnings => "warnings",
            Self::TenureActions => "tenure actions",
            Self::DepartureActions => "departure actions",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum PlayerError {
    /// Clan tag request parameter is missing its body or is not a tag the game could issue.
    #[error("Invalid clan tag: {0:?}")]
    InvalidClanTag(String),
    /// Player tag path parameter could not be normalized.
    #[error("Invalid player tag: {0:?}")]
    InvalidPlayerTag(String),
    /// No aggregate (or linked account of one) matches the requested player tag.
    #[error("Player {0} not found in player database")]
    PlayerNotFound(String),
    /// One of the seed record fetches failed; the request cannot be served.
    #[error("Failed to fetch {class} for clan {clan_tag}: {source}")]
    RecordFetch {
        class: RecordClass,
        clan_tag: String,
        #[source]
        source: sea_orm::DbErr,
    },
}

/// Maps player database errors to HTTP responses.
///
/// Store errors are logged in full but only a generic message reaches the client.
///
/// # Returns
/// - 400 Bad Request - Invalid clan or player tag
/// - 404 Not Found - Requested player not present in the player database
/// - 500 Internal Server Error - Seed record fetch failed
impl IntoResponse for PlayerError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidClanTag(_) | Self::InvalidPlayerTag(_) => {
                tracing::debug!("Rejected player database request: {}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::PlayerNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            err @ Self::RecordFetch { .. } => InternalServerError(err).into_response(),
        }
    }
}
