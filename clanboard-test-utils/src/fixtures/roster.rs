//! Roster snapshot and clan member insertion utilities.

use chrono::NaiveDate;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{ClanMemberModel, RosterSnapshotMemberModel},
    TestSetup,
};

pub struct RosterFixtures<'a> {
    pub setup: &'a TestSetup,
}

impl<'a> RosterFixtures<'a> {
    /// Insert one snapshot, one row per `(player_tag, player_name)` member.
    pub async fn insert_snapshot(
        &self,
        clan_tag: &str,
        snapshot_date: NaiveDate,
        members: &[(String, Option<String>)],
    ) -> Result<Vec<RosterSnapshotMemberModel>, TestError> {
        let now = chrono::Utc::now().naive_utc();
        let mut rows = Vec::with_capacity(members.len());

        for (player_tag, player_name) in members {
            let row = entity::prelude::RosterSnapshotMember::insert(
                entity::roster_snapshot_member::ActiveModel {
                    clan_tag: ActiveValue::Set(clan_tag.to_string()),
                    snapshot_date: ActiveValue::Set(snapshot_date),
                    player_tag: ActiveValue::Set(player_tag.clone()),
                    player_name: ActiveValue::Set(player_name.clone()),
                    created_at: ActiveValue::Set(now),
                    ..Default::default()
                },
            )
            .exec_with_returning(&self.setup.state.db)
            .await?;

            rows.push(row);
        }

        Ok(rows)
    }

    /// Insert a row into the clan member fallback name table.
    pub async fn insert_clan_member(
        &self,
        clan_tag: &str,
        player_tag: &str,
        name: &str,
    ) -> Result<ClanMemberModel, TestError> {
        let now = chrono::Utc::now().naive_utc();

        Ok(
            entity::prelude::ClanMember::insert(entity::clan_member::ActiveModel {
                clan_tag: ActiveValue::Set(clan_tag.to_string()),
                player_tag: ActiveValue::Set(player_tag.to_string()),
                name: ActiveValue::Set(name.to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
