use axum::{extract::State, http::StatusCode, response::IntoResponse};
use clanboard::server::controller::health::health;

use super::*;

/// Expect ok status with the token flag and a reachable database
#[tokio::test]
async fn reports_token_and_database() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = health(State(test.into_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["hasCoC"], true);
    assert_eq!(body["database"], true);

    Ok(())
}

/// Expect hasCoC to be false when no game-data API token is configured
#[tokio::test]
async fn reports_missing_token() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = health(State(test.into_app_state_without_token()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["hasCoC"], false);

    Ok(())
}
