//! Mock game-data API endpoints.
//!
//! Player lookups are keyed by the tag with its `#` marker URL-encoded, the
//! way the real API expects it.

use mockito::Mock;

use crate::TestSetup;

pub struct ClashFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

impl<'a> ClashFixtures<'a> {
    /// Create a mock `GET /players/%23{bare_tag}` endpoint returning `name`.
    ///
    /// # Arguments
    /// - `bare_tag` - Player tag without its `#` marker
    /// - `name` - Player name to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_player_endpoint(
        &mut self,
        bare_tag: &str,
        name: &str,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/players/%23{}", bare_tag);
        let body = serde_json::json!({
            "tag": format!("#{}", bare_tag),
            "name": name,
            "expLevel": 200,
            "trophies": 5000,
        });

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock player endpoint that fails with the provided status code.
    pub fn create_player_error_endpoint(
        &mut self,
        bare_tag: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/players/%23{}", bare_tag);
        let body = serde_json::json!({
            "reason": "unknownException",
            "message": "Something went wrong",
        });

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
