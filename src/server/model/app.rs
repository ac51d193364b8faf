use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::{clash::ClashClient, util::tag::PlayerTag};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub clash_client: ClashClient,
    pub settings: PlayerDatabaseSettings,
}

/// Deployment defaults for player database requests.
#[derive(Clone, Debug)]
pub struct PlayerDatabaseSettings {
    /// Clan used when a request omits `clanTag`
    pub home_clan_tag: PlayerTag,
    /// Whether requests enumerate every tag ever seen in a roster snapshot unless they say otherwise
    pub include_historical: bool,
    /// Maximum number of live name lookups in flight at once
    pub lookup_concurrency: usize,
    /// Per-lookup timeout, a timed out lookup counts as "no name found"
    pub lookup_timeout: Duration,
}
