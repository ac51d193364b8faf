use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Service health as reported by `GET /api/health`
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    /// Always `ok` when the server is able to answer
    pub status: String,
    /// Whether a Clash of Clans API token is configured for live name lookups
    #[serde(rename = "hasCoC")]
    pub has_coc: bool,
    /// Whether the database answered a ping
    pub database: bool,
}
