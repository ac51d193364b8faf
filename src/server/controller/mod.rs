//! HTTP controller endpoints for the clanboard web API.
//!
//! Controllers validate request parameters, hand off to the player database service and
//! translate results into HTTP responses. Every endpoint is annotated for utoipa so it appears
//! in the OpenAPI document served at `/api/docs`.

pub mod health;
pub mod player;
