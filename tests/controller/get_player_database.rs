//! Tests for the get_player_database endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use clanboard::server::controller::player::{get_player_database, PlayerDatabaseQuery};

use super::*;

fn query(clan_tag: Option<&str>) -> PlayerDatabaseQuery {
    PlayerDatabaseQuery {
        clan_tag: clan_tag.map(str::to_string),
        ..Default::default()
    }
}

/// Expect the home clan's player database when no clan tag is provided
#[tokio::test]
async fn defaults_to_home_clan() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_note(TEST_CLAN_TAG, "#PQL0289", Some("Alice"), factory::at("2024-01-01"))
        .with_note(TEST_OTHER_CLAN_TAG, "#Q8PL2", Some("Bob"), factory::at("2024-01-01"))
        .build()
        .await?;

    let resp = get_player_database(State(test.into_app_state()), Query(query(None)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["summary"]["clanTag"], TEST_CLAN_TAG);
    assert_eq!(body["summary"]["playerCount"], 1);
    assert_eq!(body["players"][0]["tag"], "#PQL0289");
    assert_eq!(body["players"][0]["name"], "Alice");

    Ok(())
}

/// Expect a clan tag without marker or in lowercase to be normalized
#[tokio::test]
async fn normalizes_clan_tag() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_note(TEST_OTHER_CLAN_TAG, "#Q8PL2", Some("Bob"), factory::at("2024-01-01"))
        .build()
        .await?;

    let resp = get_player_database(State(test.into_app_state()), Query(query(Some(" l2y0qvg8"))))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["summary"]["clanTag"], TEST_OTHER_CLAN_TAG);
    assert_eq!(body["players"][0]["tag"], "#Q8PL2");

    Ok(())
}

/// Expect 400 for a clan tag the game could not have issued
#[tokio::test]
async fn rejects_invalid_clan_tag() -> Result<(), TestError> {
    let test = test_setup_with_player_tables!()?;

    let resp = get_player_database(State(test.into_app_state()), Query(query(Some("#INVALID123"))))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Invalid clan tag"));

    Ok(())
}

/// Expect the configured default for historical mode unless the request overrides it
#[tokio::test]
async fn historical_mode_follows_deployment_default() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_snapshot(
            TEST_CLAN_TAG,
            factory::date("2024-01-01"),
            &[("#Y9VJ2", Some("Carol"))],
        )
        .with_snapshot(
            TEST_CLAN_TAG,
            factory::date("2024-02-01"),
            &[("#PQL0289", Some("Alice"))],
        )
        .build()
        .await?;

    let mut state = test.into_app_state();
    state.settings.include_historical = true;

    let resp = get_player_database(State(state.clone()), Query(query(None)))
        .await
        .into_response();
    let body = json_body(resp).await;
    assert_eq!(body["summary"]["includeHistorical"], true);
    assert_eq!(body["summary"]["playerCount"], 2);

    let overridden = PlayerDatabaseQuery {
        include_historical: Some(false),
        ..Default::default()
    };
    let resp = get_player_database(State(state), Query(overridden))
        .await
        .into_response();
    let body = json_body(resp).await;
    assert_eq!(body["summary"]["includeHistorical"], false);
    assert_eq!(body["summary"]["playerCount"], 1);

    Ok(())
}

/// Expect camelCase fields and lowercase membership values in the response
#[tokio::test]
async fn serializes_players_in_camel_case() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_warning(TEST_CLAN_TAG, "#PQL0289", Some("Alice"), factory::at("2024-01-01"), true)
        .with_snapshot(
            TEST_CLAN_TAG,
            factory::date("2024-02-01"),
            &[("#PQL0289", Some("Alice"))],
        )
        .with_alias_link(TEST_CLAN_TAG, "#PQL0289", "#Q8PL2")
        .with_snapshot(
            TEST_OTHER_CLAN_TAG,
            factory::date("2024-02-01"),
            &[("#Q8PL2", Some("Alice Alt"))],
        )
        .build()
        .await?;

    let resp = get_player_database(State(test.into_app_state()), Query(query(None)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    let alice = &body["players"][0];
    assert_eq!(alice["isCurrentMember"], true);
    assert_eq!(alice["membership"], "current");
    assert_eq!(alice["lastSeen"], "2024-02-01");
    assert_eq!(alice["warnings"][0]["warningNote"], "Test warning");
    assert_eq!(alice["warnings"][0]["aliasSourced"], false);
    assert_eq!(alice["linkedAccounts"][0]["tag"], "#Q8PL2");
    assert_eq!(alice["linkedAccounts"][0]["name"], "Alice Alt");
    assert_eq!(alice["linkedAccounts"][0]["membership"], "never");
    assert_eq!(body["summary"]["linkedAccountCount"], 1);
    assert_eq!(body["summary"]["latestSnapshotDate"], "2024-02-01");

    Ok(())
}

/// Expect 500 with a sanitized message when a record table cannot be read
#[tokio::test]
async fn seed_failure_is_internal_server_error() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::PlayerNote)?;

    let resp = get_player_database(State(test.into_app_state()), Query(query(None)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Internal server error");

    Ok(())
}
