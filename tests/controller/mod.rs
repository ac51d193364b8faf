//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors and the response status and JSON body
//! are checked.

mod get_player;
mod get_player_database;
mod health;

use axum::{body::to_bytes, response::Response};
use clanboard_test_utils::prelude::*;
use serde_json::Value;

use crate::util::TestSetupExt;

/// Reads a response body as JSON.
async fn json_body(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
