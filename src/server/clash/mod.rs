//! Clash of Clans game-data API client.
//!
//! Only the player lookup is needed: the player database falls back to it when no stored or
//! snapshot name exists for a tag. The client is cheap to clone and shared through `AppState`.

pub mod model;

use std::time::Duration;

use dioxus_logger::tracing;

use crate::server::{clash::model::ClashPlayer, error::clash::ClashError};

const DEFAULT_BASE_URL: &str = "https://api.clashofclans.com/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct ClashClient {
    http_client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

pub struct ClashClientBuilder {
    base_url: String,
    api_token: Option<String>,
    user_agent: Option<String>,
    timeout: Duration,
}

impl ClashClient {
    pub fn builder() -> ClashClientBuilder {
        ClashClientBuilder {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Whether live lookups can be made at all.
    pub fn has_token(&self) -> bool {
        self.api_token.is_some()
    }

    /// Fetch a player by tag.
    ///
    /// # Arguments
    /// - `bare_tag` - Player tag without its `#` marker
    ///
    /// # Returns
    /// - `Ok(Some(ClashPlayer))` - Player exists
    /// - `Ok(None)` - API answered 404
    /// - `Err(ClashError)` - No token configured, transport failure, or any other status
    pub async fn get_player(&self, bare_tag: &str) -> Result<Option<ClashPlayer>, ClashError> {
        let token = self.api_token.as_deref().ok_or(ClashError::MissingToken)?;

        let url = format!("{}/players/%23{}", self.base_url, bare_tag);

        tracing::debug!(tag = %bare_tag, "Looking up player in Clash of Clans API");

        let response = self.http_client.get(&url).bearer_auth(token).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClashError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(Some(response.json::<ClashPlayer>().await?))
    }
}

impl ClashClientBuilder {
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn api_token(mut self, api_token: Option<String>) -> Self {
        self.api_token = api_token;
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Transport-level timeout. Lookups made by the player database are additionally bounded
    /// by their own, usually shorter, per-call timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<ClashClient, ClashError> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(ClashClient {
            http_client: builder.build()?,
            base_url: self.base_url,
            api_token: self.api_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use clanboard_test_utils::prelude::*;

    use super::*;

    fn client(test: &TestSetup, token: Option<&str>) -> ClashClient {
        ClashClient::builder()
            .base_url(&test.state.clash_api_url)
            .api_token(token.map(str::to_string))
            .user_agent(TEST_USER_AGENT)
            .build()
            .unwrap()
    }

    /// Expect the player when the API returns 200
    #[tokio::test]
    async fn returns_player() -> Result<(), TestError> {
        let mut test = test_setup_with_tables!()?;
        let endpoint = test.clash().create_player_endpoint("PQL0289", "Alice", 1);

        let player = client(&test, Some(TEST_CLASH_API_TOKEN))
            .get_player("PQL0289")
            .await;

        assert!(player.is_ok());
        let player = player.unwrap();
        assert_eq!(player.map(|p| p.name), Some("Alice".to_string()));
        endpoint.assert();

        Ok(())
    }

    /// Expect None when the API returns 404
    #[tokio::test]
    async fn returns_none_for_unknown_player() -> Result<(), TestError> {
        let mut test = test_setup_with_tables!()?;
        let endpoint = test.clash().create_player_error_endpoint("PQL0289", 404, 1);

        let player = client(&test, Some(TEST_CLASH_API_TOKEN))
            .get_player("PQL0289")
            .await;

        assert!(matches!(player, Ok(None)));
        endpoint.assert();

        Ok(())
    }

    /// Expect Status error for any other non-success response
    #[tokio::test]
    async fn fails_on_server_error() -> Result<(), TestError> {
        let mut test = test_setup_with_tables!()?;
        let endpoint = test.clash().create_player_error_endpoint("PQL0289", 503, 1);

        let player = client(&test, Some(TEST_CLASH_API_TOKEN))
            .get_player("PQL0289")
            .await;

        assert!(matches!(player, Err(ClashError::Status { status: 503, .. })));
        endpoint.assert();

        Ok(())
    }

    /// Expect MissingToken without making a request when no token is configured
    #[tokio::test]
    async fn requires_token() -> Result<(), TestError> {
        let mut test = test_setup_with_tables!()?;
        let endpoint = test.clash().create_player_endpoint("PQL0289", "Alice", 0);

        let client = client(&test, None);
        assert!(!client.has_token());

        let player = client.get_player("PQL0289").await;

        assert!(matches!(player, Err(ClashError::MissingToken)));
        endpoint.assert();

        Ok(())
    }

    /// Expect the configured token to be sent as a bearer credential
    #[tokio::test]
    async fn sends_bearer_token() -> Result<(), TestError> {
        let mut test = test_setup_with_tables!()?;
        let endpoint = test
            .server
            .mock("GET", "/players/%23PQL0289")
            .match_header(
                "authorization",
                format!("Bearer {}", TEST_CLASH_API_TOKEN).as_str(),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r##"{"tag":"#PQL0289","name":"Alice"}"##)
            .expect(1)
            .create();

        let player = client(&test, Some(TEST_CLASH_API_TOKEN))
            .get_player("PQL0289")
            .await;

        assert!(matches!(player, Ok(Some(_))));
        endpoint.assert();

        Ok(())
    }
}
