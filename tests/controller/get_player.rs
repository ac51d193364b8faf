//! Tests for the get_player endpoint.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use clanboard::server::controller::player::{get_player, PlayerDatabaseQuery};

use super::*;

async fn setup() -> Result<TestSetup, TestError> {
    TestBuilder::new()
        .with_player_tables()
        .with_note(TEST_CLAN_TAG, "#PQL0289", Some("Alice"), factory::at("2024-01-01"))
        .with_alias_link(TEST_CLAN_TAG, "#PQL0289", "#Q8PL2")
        .build()
        .await
}

/// Expect the player for a tag given without marker and in lowercase
#[tokio::test]
async fn returns_player() -> Result<(), TestError> {
    let test = setup().await?;

    let resp = get_player(
        State(test.into_app_state_without_token()),
        Path("pql0289".to_string()),
        Query(PlayerDatabaseQuery::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["tag"], "#PQL0289");
    assert_eq!(body["notes"].as_array().unwrap().len(), 1);

    Ok(())
}

/// Expect the owning player when the tag is one of its linked accounts
#[tokio::test]
async fn returns_player_for_linked_account() -> Result<(), TestError> {
    let test = setup().await?;

    let resp = get_player(
        State(test.into_app_state_without_token()),
        Path("#Q8PL2".to_string()),
        Query(PlayerDatabaseQuery::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["tag"], "#PQL0289");

    Ok(())
}

/// Expect 404 when no player or linked account has the tag
#[tokio::test]
async fn unknown_player_is_not_found() -> Result<(), TestError> {
    let test = setup().await?;

    let resp = get_player(
        State(test.into_app_state_without_token()),
        Path("#Y9VJ2".to_string()),
        Query(PlayerDatabaseQuery::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 for a tag that cannot be normalized
#[tokio::test]
async fn rejects_unparseable_player_tag() -> Result<(), TestError> {
    let test = setup().await?;

    let resp = get_player(
        State(test.into_app_state_without_token()),
        Path("#AB-CD".to_string()),
        Query(PlayerDatabaseQuery::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
