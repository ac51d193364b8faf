//! Builds the server's `AppState` on top of a `clanboard_test_utils::TestSetup`.

use std::time::Duration;

use clanboard::server::{
    clash::ClashClient, model::app::AppState, model::app::PlayerDatabaseSettings,
    util::tag::PlayerTag,
};
use clanboard_test_utils::prelude::*;

pub trait TestSetupExt {
    /// State with a game-data API token pointing at the mock server.
    fn into_app_state(&self) -> AppState;

    /// State without a game-data API token, live name lookups are disabled.
    fn into_app_state_without_token(&self) -> AppState;
}

fn app_state(test: &TestSetup, api_token: Option<&str>) -> AppState {
    let clash_client = ClashClient::builder()
        .base_url(&test.state.clash_api_url)
        .api_token(api_token.map(str::to_string))
        .user_agent(TEST_USER_AGENT)
        .build()
        .unwrap();

    AppState {
        db: test.state.db.clone(),
        clash_client,
        settings: PlayerDatabaseSettings {
            home_clan_tag: PlayerTag::normalize(TEST_CLAN_TAG).unwrap(),
            include_historical: false,
            lookup_concurrency: 2,
            lookup_timeout: Duration::from_millis(500),
        },
    }
}

impl TestSetupExt for TestSetup {
    fn into_app_state(&self) -> AppState {
        app_state(self, Some(TEST_CLASH_API_TOKEN))
    }

    fn into_app_state_without_token(&self) -> AppState {
        app_state(self, None)
    }
}
