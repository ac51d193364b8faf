//! Player database service.
//!
//! Builds the per-person view of a clan: every note, warning, tenure action and departure
//! action grouped by canonical tag, with a resolved display name, membership status derived
//! from roster snapshots, and the other accounts of the same person.
//!
//! A request runs in strictly ordered phases, each depending on the previous one:
//!
//! 1. seed records of the clan (fatal on failure)
//! 2. roster snapshots and alias links, then notes and warnings of linked tags
//! 3. name resolution over every tag that will be shown
//! 4. aggregation, roster (and optionally historical) augmentation, sorting
//!
//! Everything after phase 1 degrades to empty data on failure.

pub mod aggregate;
pub mod alias;
pub mod collect;
pub mod membership;
pub mod name;
pub mod record;

#[cfg(test)]
mod tests;

use std::{collections::BTreeSet, time::Instant};

use chrono::NaiveDate;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::player::{MembershipStatus, PlayerDatabaseDto, PlayerDatabaseSummaryDto, PlayerDto},
    server::{
        clash::ClashClient,
        data::roster::snapshot::RosterSnapshotRepository,
        error::player::PlayerError,
        model::{app::PlayerDatabaseSettings, db::RosterSnapshotMemberModel},
        service::player::{
            aggregate::Aggregator,
            alias::{discover_alias_graph, AliasGraph},
            collect::RecordCollector,
            membership::MembershipIndex,
            name::NameResolver,
        },
        util::tag::PlayerTag,
    },
};

/// Per-request switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerDatabaseOptions {
    /// Include archived records
    pub include_archived: bool,
    /// Enumerate every tag ever seen in the clan's roster snapshots, not just those with
    /// records or in the latest snapshot
    pub include_historical: bool,
}

/// Roster snapshot data of one clan.
#[derive(Default)]
struct RosterSnapshots {
    latest_date: Option<NaiveDate>,
    latest_members: Vec<RosterSnapshotMemberModel>,
    history: Vec<RosterSnapshotMemberModel>,
}

impl RosterSnapshots {
    /// Loads the latest snapshot and the clan's full history, each independently degrading
    /// to empty on failure.
    async fn load(db: &DatabaseConnection, clan_tag: &PlayerTag) -> Self {
        let repo = RosterSnapshotRepository::new(db);

        let latest_date = repo.latest_date(clan_tag).await.unwrap_or_else(|err| {
            tracing::warn!(clan_tag = %clan_tag, error = %err, "Failed to fetch latest roster snapshot date");
            None
        });

        let latest_members = match latest_date {
            Some(date) => repo
                .get_members_on(clan_tag, date)
                .await
                .unwrap_or_else(|err| {
                    tracing::warn!(clan_tag = %clan_tag, error = %err, "Failed to fetch latest roster snapshot");
                    Vec::new()
                }),
            None => Vec::new(),
        };

        let history = repo.get_all_for_clan(clan_tag).await.unwrap_or_else(|err| {
            tracing::warn!(clan_tag = %clan_tag, error = %err, "Failed to fetch roster snapshot history");
            Vec::new()
        });

        Self {
            latest_date,
            latest_members,
            history,
        }
    }
}

pub struct PlayerDatabaseService<'a> {
    db: &'a DatabaseConnection,
    clash_client: &'a ClashClient,
    settings: &'a PlayerDatabaseSettings,
}

impl<'a> PlayerDatabaseService<'a> {
    /// Creates a new instance of [`PlayerDatabaseService`]
    pub fn new(
        db: &'a DatabaseConnection,
        clash_client: &'a ClashClient,
        settings: &'a PlayerDatabaseSettings,
    ) -> Self {
        Self {
            db,
            clash_client,
            settings,
        }
    }

    /// Builds the player database of a clan.
    ///
    /// # Arguments
    /// - `clan_tag` - Normalized clan tag
    /// - `options` - Archived and historical switches for this request
    ///
    /// # Returns
    /// - `Ok(PlayerDatabaseDto)` - Players ordered by `last_updated`, most recent first
    /// - `Err(PlayerError::RecordFetch)` - One of the four seed record fetches failed
    pub async fn get_player_database(
        &self,
        clan_tag: &PlayerTag,
        options: PlayerDatabaseOptions,
    ) -> Result<PlayerDatabaseDto, PlayerError> {
        let started = Instant::now();
        let collector = RecordCollector::new(self.db);

        let mut records = collector
            .collect_seed(clan_tag, options.include_archived)
            .await?;
        let seed_tags = records.tags();

        let roster = RosterSnapshots::load(self.db, clan_tag).await;
        let membership =
            MembershipIndex::new(roster.latest_date, &roster.latest_members, &roster.history);

        let mut discovery_tags = seed_tags.clone();
        discovery_tags.extend(membership.latest_tags().iter().cloned());
        if options.include_historical {
            discovery_tags.extend(membership.any_tags().iter().cloned());
        }

        let aliases = discover_alias_graph(self.db, &discovery_tags)
            .await
            .unwrap_or_else(|err| {
                tracing::warn!(clan_tag = %clan_tag, error = %err, "Failed to fetch alias links");
                AliasGraph::default()
            });

        let linked_tags: Vec<PlayerTag> = aliases
            .tags()
            .filter(|tag| !seed_tags.contains(*tag))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        collector
            .collect_linked(&mut records, &linked_tags, options.include_archived)
            .await;

        let mut player_tags = records.tags();
        player_tags.extend(membership.latest_tags().iter().cloned());
        if options.include_historical {
            player_tags.extend(membership.any_tags().iter().cloned());
        }
        player_tags.retain(|tag| !tag.is_test_tag());

        let mut name_tags = player_tags.clone();
        for tag in &player_tags {
            name_tags.extend(aliases.linked_accounts(tag));
        }

        let mut resolver = NameResolver::new(self.db, self.clash_client, self.settings);
        resolver.add_snapshot_names(&roster.latest_members);
        resolver.add_record_names(&records.notes);
        resolver.add_record_names(&records.warnings);
        resolver.add_record_names(&records.tenure_actions);
        resolver.add_record_names(&records.departure_actions);
        let names = resolver.resolve_all(&name_tags).await;

        let mut aggregator = Aggregator::new(&names, &membership, &aliases);
        aggregator.add_notes(&records.notes);
        aggregator.add_warnings(&records.warnings);
        aggregator.add_tenure_actions(&records.tenure_actions);
        aggregator.add_departure_actions(&records.departure_actions);
        aggregator.add_roster(&roster.latest_members);
        if options.include_historical {
            aggregator.add_history();
        }
        let players = aggregator.finish();

        let duration_ms = started.elapsed().as_millis() as u64;
        let summary = summarize(clan_tag, options, membership.latest_date(), &players, duration_ms);

        tracing::info!(
            clan_tag = %clan_tag,
            players = summary.player_count,
            current_members = summary.current_member_count,
            duration_ms,
            "Built player database"
        );

        Ok(PlayerDatabaseDto { players, summary })
    }

    /// Finds one player of the clan's player database.
    ///
    /// Matches the player whose tag equals `player_tag`, or failing that, the first player
    /// listing `player_tag` among its linked accounts.
    ///
    /// # Returns
    /// - `Ok(PlayerDto)` - The matching player
    /// - `Err(PlayerError::PlayerNotFound)` - No player or linked account has that tag
    /// - `Err(PlayerError::RecordFetch)` - One of the four seed record fetches failed
    pub async fn get_player(
        &self,
        clan_tag: &PlayerTag,
        player_tag: &PlayerTag,
        options: PlayerDatabaseOptions,
    ) -> Result<PlayerDto, PlayerError> {
        let database = self.get_player_database(clan_tag, options).await?;
        let wanted = player_tag.as_str();

        let mut linked_match = None;

        for player in database.players {
            if player.tag == wanted {
                return Ok(player);
            }
            if linked_match.is_none()
                && player.linked_accounts.iter().any(|linked| linked.tag == wanted)
            {
                linked_match = Some(player);
            }
        }

        linked_match.ok_or_else(|| PlayerError::PlayerNotFound(player_tag.to_string()))
    }
}

fn summarize(
    clan_tag: &PlayerTag,
    options: PlayerDatabaseOptions,
    latest_snapshot_date: Option<NaiveDate>,
    players: &[PlayerDto],
    duration_ms: u64,
) -> PlayerDatabaseSummaryDto {
    let linked_account_count = players
        .iter()
        .flat_map(|player| player.linked_accounts.iter().map(|linked| linked.tag.as_str()))
        .collect::<BTreeSet<_>>()
        .len();

    PlayerDatabaseSummaryDto {
        clan_tag: clan_tag.to_string(),
        player_count: players.len(),
        current_member_count: players
            .iter()
            .filter(|player| player.membership == MembershipStatus::Current)
            .count(),
        linked_account_count,
        include_archived: options.include_archived,
        include_historical: options.include_historical,
        latest_snapshot_date,
        duration_ms,
    }
}
