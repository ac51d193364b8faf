use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        player::{PlayerDatabaseDto, PlayerDto},
    },
    server::{
        error::{player::PlayerError, Error},
        model::app::AppState,
        service::player::{PlayerDatabaseOptions, PlayerDatabaseService},
        util::tag::PlayerTag,
    },
};

pub static PLAYER_TAG: &str = "player";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PlayerDatabaseQuery {
    /// Clan to build the player database for, defaults to the configured home clan
    pub clan_tag: Option<String>,
    /// Include archived records
    #[serde(default)]
    pub include_archived: bool,
    /// List every player ever seen in the clan's roster snapshots, defaults to the deployment setting
    pub include_historical: Option<bool>,
}

impl PlayerDatabaseQuery {
    /// Resolves the clan tag and options of this request against the deployment defaults.
    fn resolve(&self, state: &AppState) -> Result<(PlayerTag, PlayerDatabaseOptions), PlayerError> {
        let clan_tag = match self.clan_tag.as_deref() {
            Some(raw) if !raw.trim().is_empty() => PlayerTag::normalize(raw)
                .filter(PlayerTag::is_valid_clash_tag)
                .ok_or_else(|| PlayerError::InvalidClanTag(raw.to_string()))?,
            _ => state.settings.home_clan_tag.clone(),
        };

        let options = PlayerDatabaseOptions {
            include_archived: self.include_archived,
            include_historical: self
                .include_historical
                .unwrap_or(state.settings.include_historical),
        };

        Ok((clan_tag, options))
    }
}

/// Get every player of a clan with their notes, warnings, tenure and departure actions
#[utoipa::path(
    get,
    path = "/api/player-database",
    tag = PLAYER_TAG,
    params(PlayerDatabaseQuery),
    responses(
        (status = 200, description = "Player database of the clan", body = PlayerDatabaseDto),
        (status = 400, description = "Invalid clan tag", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player_database(
    State(state): State<AppState>,
    Query(query): Query<PlayerDatabaseQuery>,
) -> Result<impl IntoResponse, Error> {
    let (clan_tag, options) = query.resolve(&state)?;

    let player_database = PlayerDatabaseService::new(&state.db, &state.clash_client, &state.settings)
        .get_player_database(&clan_tag, options)
        .await?;

    Ok((StatusCode::OK, Json(player_database)))
}

/// Get a single player of a clan's player database by its tag or the tag of a linked account
#[utoipa::path(
    get,
    path = "/api/player-database/{tag}",
    tag = PLAYER_TAG,
    params(
        ("tag" = String, Path, description = "Player tag, with or without the leading #"),
        PlayerDatabaseQuery,
    ),
    responses(
        (status = 200, description = "The player", body = PlayerDto),
        (status = 400, description = "Invalid clan or player tag", body = ErrorDto),
        (status = 404, description = "Player not found in the player database", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(tag): Path<String>,
    Query(query): Query<PlayerDatabaseQuery>,
) -> Result<impl IntoResponse, Error> {
    let player_tag =
        PlayerTag::normalize(&tag).ok_or_else(|| PlayerError::InvalidPlayerTag(tag.clone()))?;
    let (clan_tag, options) = query.resolve(&state)?;

    let player = PlayerDatabaseService::new(&state.db, &state.clash_client, &state.settings)
        .get_player(&clan_tag, &player_tag, options)
        .await?;

    Ok((StatusCode::OK, Json(player)))
}
