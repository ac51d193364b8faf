use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{model::api::HealthDto, server::model::app::AppState};

pub static HEALTH_TAG: &str = "health";

/// Report whether live name lookups are configured and the database is reachable
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is answering requests", body = HealthDto),
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let database = state.db.ping().await.is_ok();

    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
            has_coc: state.clash_client.has_token(),
            database,
        }),
    )
}
