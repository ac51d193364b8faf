//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its utoipa specification. The collected
//! OpenAPI document is served at `/api/docs/openapi.json` and browsable through Swagger UI at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/player-database` - Player database of a clan
/// - `GET /api/player-database/{tag}` - Single player of a clan's player database
/// - `GET /api/health` - Game-data API token and database status
///
/// # Example
/// ```ignore
/// let state = AppState { db, clash_client, settings };
/// let router = routes().with_state(state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "clanboard", description = "Clan player database API"), tags(
        (name = controller::player::PLAYER_TAG, description = "Player database routes"),
        (name = controller::health::HEALTH_TAG, description = "Service health"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::player::get_player_database))
        .routes(routes!(controller::player::get_player))
        .routes(routes!(controller::health::health))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
