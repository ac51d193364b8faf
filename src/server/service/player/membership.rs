//! Membership classification from roster snapshots.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::{
    model::player::MembershipStatus,
    server::{
        model::db::RosterSnapshotMemberModel, service::player::name::is_real_name,
        util::tag::PlayerTag,
    },
};

/// Last time a tag was seen in any of the clan's snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastSeen {
    pub date: NaiveDate,
    pub name: Option<String>,
}

/// Precomputed snapshot tag sets for one clan.
#[derive(Clone, Debug, Default)]
pub struct MembershipIndex {
    latest_date: Option<NaiveDate>,
    latest_tags: HashSet<PlayerTag>,
    any_tags: HashSet<PlayerTag>,
    last_seen: HashMap<PlayerTag, LastSeen>,
}

impl MembershipIndex {
    /// # Arguments
    /// - `latest_date` - Date of the clan's most recent snapshot
    /// - `latest_members` - Rows of that snapshot
    /// - `history` - Every snapshot row of the clan (may be empty if it could not be loaded)
    pub fn new(
        latest_date: Option<NaiveDate>,
        latest_members: &[RosterSnapshotMemberModel],
        history: &[RosterSnapshotMemberModel],
    ) -> Self {
        let mut index = Self {
            latest_date,
            ..Default::default()
        };

        for row in history.iter().chain(latest_members) {
            let Some(tag) = PlayerTag::normalize(&row.player_tag) else {
                continue;
            };

            index.any_tags.insert(tag.clone());
            if Some(row.snapshot_date) == latest_date {
                index.latest_tags.insert(tag.clone());
            }

            let name = row
                .player_name
                .as_deref()
                .filter(|name| is_real_name(name))
                .map(|name| name.trim().to_string());

            match index.last_seen.get_mut(&tag) {
                Some(seen) if seen.date > row.snapshot_date => continue,
                Some(seen) if seen.date == row.snapshot_date => {
                    if seen.name.is_none() {
                        seen.name = name;
                    }
                    continue;
                }
                _ => {}
            }

            index.last_seen.insert(
                tag,
                LastSeen {
                    date: row.snapshot_date,
                    name,
                },
            );
        }

        index
    }

    /// `Current` if the tag is in the latest snapshot, `Former` if it is in any older one,
    /// `Never` otherwise.
    pub fn classify(&self, tag: &PlayerTag) -> MembershipStatus {
        if self.latest_tags.contains(tag) {
            MembershipStatus::Current
        } else if self.any_tags.contains(tag) {
            MembershipStatus::Former
        } else {
            MembershipStatus::Never
        }
    }

    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.latest_date
    }

    pub fn latest_tags(&self) -> &HashSet<PlayerTag> {
        &self.latest_tags
    }

    /// Every tag ever seen in one of the clan's snapshots.
    pub fn any_tags(&self) -> &HashSet<PlayerTag> {
        &self.any_tags
    }

    pub fn last_seen(&self, tag: &PlayerTag) -> Option<&LastSeen> {
        self.last_seen.get(tag)
    }
}
