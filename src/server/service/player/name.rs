//! Display name resolution.
//!
//! Names are resolved per tag from the first source that has a real one:
//!
//! 1. the clan's most recent roster snapshot
//! 2. a name already resolved earlier in the same request
//! 3. the most recently written record (note, warning, tenure or departure) that stored one
//! 4. any roster snapshot of any clan, newest first, then the clan member table
//! 5. a live lookup against the Clash of Clans API
//!
//! and otherwise fall back to [`UNKNOWN_PLAYER_NAME`], which is never accepted as a name from
//! any source.

use std::{
    collections::{BTreeSet, HashMap},
    time::Duration,
};

use chrono::NaiveDateTime;
use dioxus_logger::tracing;
use futures::stream::{self, StreamExt};
use sea_orm::DatabaseConnection;

use crate::{
    model::player::UNKNOWN_PLAYER_NAME,
    server::{
        clash::ClashClient,
        data::roster::{member::ClanMemberRepository, snapshot::RosterSnapshotRepository},
        error::clash::ClashError,
        model::{app::PlayerDatabaseSettings, db::RosterSnapshotMemberModel},
        service::player::record::{Collected, PlayerRecord},
        util::tag::PlayerTag,
    },
};

/// Whether `name` can be shown as a player's name.
pub fn is_real_name(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && name != UNKNOWN_PLAYER_NAME
}

fn real_name(name: Option<&str>) -> Option<String> {
    name.filter(|name| is_real_name(name))
        .map(|name| name.trim().to_string())
}

/// Per-request name resolver.
pub struct NameResolver<'a> {
    db: &'a DatabaseConnection,
    clash_client: &'a ClashClient,
    lookup_concurrency: usize,
    lookup_timeout: Duration,
    snapshot_names: HashMap<PlayerTag, String>,
    record_names: HashMap<PlayerTag, (NaiveDateTime, String)>,
    resolved: HashMap<PlayerTag, String>,
}

impl<'a> NameResolver<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        clash_client: &'a ClashClient,
        settings: &PlayerDatabaseSettings,
    ) -> Self {
        Self {
            db,
            clash_client,
            lookup_concurrency: settings.lookup_concurrency.max(1),
            lookup_timeout: settings.lookup_timeout,
            snapshot_names: HashMap::new(),
            record_names: HashMap::new(),
            resolved: HashMap::new(),
        }
    }

    /// Adds names captured in the clan's most recent roster snapshot.
    pub fn add_snapshot_names(&mut self, latest_members: &[RosterSnapshotMemberModel]) {
        for member in latest_members {
            let (Some(tag), Some(name)) = (
                PlayerTag::normalize(&member.player_tag),
                real_name(member.player_name.as_deref()),
            ) else {
                continue;
            };

            self.snapshot_names.entry(tag).or_insert(name);
        }
    }

    /// Adds names stored on records, keeping the most recently written one per tag.
    pub fn add_record_names<T: PlayerRecord>(&mut self, records: &[Collected<T>]) {
        for record in records {
            let Some(name) = real_name(record.model.player_name()) else {
                continue;
            };
            let written_at = record.model.written_at();

            match self.record_names.get(&record.tag) {
                Some((newest, _)) if *newest >= written_at => {}
                _ => {
                    self.record_names
                        .insert(record.tag.clone(), (written_at, name));
                }
            }
        }
    }

    /// Name from the sources that need no I/O, in precedence order.
    fn known(&self, tag: &PlayerTag) -> Option<String> {
        self.snapshot_names
            .get(tag)
            .or_else(|| self.resolved.get(tag))
            .or_else(|| self.record_names.get(tag).map(|(_, name)| name))
            .cloned()
    }

    /// Resolves every provided tag.
    ///
    /// Store and API failures are logged and only leave the affected tags unresolved.
    pub async fn resolve_all<'t>(
        mut self,
        tags: impl IntoIterator<Item = &'t PlayerTag>,
    ) -> ResolvedNames {
        let mut pending: BTreeSet<PlayerTag> = BTreeSet::new();

        for tag in tags {
            if self.resolved.contains_key(tag) {
                continue;
            }
            match self.known(tag) {
                Some(name) => {
                    self.resolved.insert(tag.clone(), name);
                }
                None => {
                    pending.insert(tag.clone());
                }
            }
        }

        if pending.is_empty() {
            return self.finish();
        }

        let stored = self.lookup_stored(&pending).await;
        for (tag, name) in stored {
            pending.remove(&tag);
            self.resolved.insert(tag, name);
        }

        if pending.is_empty() {
            return self.finish();
        }

        let live = self.lookup_live(&pending).await;
        for (tag, name) in live {
            self.resolved.insert(tag, name);
        }

        self.finish()
    }

    fn finish(self) -> ResolvedNames {
        ResolvedNames {
            names: self.resolved,
        }
    }

    /// All-time snapshots across clans, then the clan member table.
    async fn lookup_stored(&self, pending: &BTreeSet<PlayerTag>) -> HashMap<PlayerTag, String> {
        let tags: Vec<PlayerTag> = pending.iter().cloned().collect();
        let mut found: HashMap<PlayerTag, String> = HashMap::new();

        match RosterSnapshotRepository::new(self.db).get_by_tags(&tags).await {
            Ok(rows) => {
                // Rows arrive newest snapshot first
                for row in rows {
                    if let (Some(tag), Some(name)) = (
                        PlayerTag::normalize(&row.player_tag),
                        real_name(row.player_name.as_deref()),
                    ) {
                        found.entry(tag).or_insert(name);
                    }
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to look up names in roster snapshots");
            }
        }

        let remaining: Vec<PlayerTag> = tags
            .into_iter()
            .filter(|tag| !found.contains_key(tag))
            .collect();
        if remaining.is_empty() {
            return found;
        }

        match ClanMemberRepository::new(self.db).get_by_tags(&remaining).await {
            Ok(rows) => {
                for row in rows {
                    if let (Some(tag), Some(name)) = (
                        PlayerTag::normalize(&row.player_tag),
                        real_name(Some(row.name.as_str())),
                    ) {
                        found.entry(tag).or_insert(name);
                    }
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to look up names in clan member table");
            }
        }

        found
    }

    /// Bounded, timed lookups against the Clash of Clans API.
    ///
    /// At most `lookup_concurrency` requests are in flight at once and each is abandoned after
    /// `lookup_timeout`. Tags the game could not have issued are never looked up.
    async fn lookup_live(&self, pending: &BTreeSet<PlayerTag>) -> Vec<(PlayerTag, String)> {
        if !self.clash_client.has_token() {
            tracing::debug!(
                unresolved = pending.len(),
                "Skipping live name lookups, no Clash of Clans API token configured"
            );
            return Vec::new();
        }

        let client = self.clash_client;
        let timeout = self.lookup_timeout;

        let mut lookups = stream::iter(pending.iter().filter(|tag| tag.is_valid_clash_tag()))
            .map(move |tag| async move {
                let result = match tokio::time::timeout(timeout, client.get_player(tag.bare())).await
                {
                    Ok(result) => result,
                    Err(_) => Err(ClashError::Timeout(timeout)),
                };
                (tag, result)
            })
            .buffer_unordered(self.lookup_concurrency)
            .boxed();

        let mut found = Vec::new();

        while let Some((tag, result)) = lookups.next().await {
            match result {
                Ok(Some(player)) => match real_name(Some(player.name.as_str())) {
                    Some(name) => found.push((tag.clone(), name)),
                    None => tracing::debug!(tag = %tag, "Clash of Clans API returned no usable name"),
                },
                Ok(None) => {
                    tracing::debug!(tag = %tag, "Player not found in Clash of Clans API");
                }
                Err(err) => {
                    tracing::warn!(tag = %tag, error = %err, "Live name lookup failed");
                }
            }
        }

        found
    }
}

/// Names resolved for one request.
#[derive(Clone, Debug, Default)]
pub struct ResolvedNames {
    names: HashMap<PlayerTag, String>,
}

impl ResolvedNames {
    /// The resolved name, if any source produced one.
    pub fn get(&self, tag: &PlayerTag) -> Option<&str> {
        self.names.get(tag).map(String::as_str)
    }

    /// The resolved name or [`UNKNOWN_PLAYER_NAME`].
    pub fn name_of(&self, tag: &PlayerTag) -> String {
        self.get(tag).unwrap_or(UNKNOWN_PLAYER_NAME).to_string()
    }
}

impl FromIterator<(PlayerTag, String)> for ResolvedNames {
    fn from_iter<I: IntoIterator<Item = (PlayerTag, String)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .filter(|(_, name)| is_real_name(name))
                .collect(),
        }
    }
}
