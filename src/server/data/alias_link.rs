use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::{data::tag_in, model::db::AliasLinkModel, util::tag::PlayerTag};

/// Repository for "same person" links between two tags.
///
/// Links are never physically deleted: [`AliasLinkRepository::remove`] sets a tombstone so the
/// period a link existed can still be reconstructed. Only live links are returned by reads.
pub struct AliasLinkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AliasLinkRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        clan_tag: &PlayerTag,
        player_tag_1: &PlayerTag,
        player_tag_2: &PlayerTag,
        created_by: String,
    ) -> Result<AliasLinkModel, DbErr> {
        let link = entity::player_alias_link::ActiveModel {
            clan_tag: ActiveValue::Set(clan_tag.to_string()),
            player_tag_1: ActiveValue::Set(player_tag_1.to_string()),
            player_tag_2: ActiveValue::Set(player_tag_2.to_string()),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            removed_at: ActiveValue::Set(None),
            removed_by: ActiveValue::Set(None),
            ..Default::default()
        };

        link.insert(self.db).await
    }

    /// Tombstone a link
    ///
    /// # Returns
    /// - `Ok(Some(AliasLinkModel))`: The removed link, unchanged if it was already removed
    /// - `Ok(None)`: No link with the provided ID exists
    pub async fn remove(&self, id: i32, removed_by: &str) -> Result<Option<AliasLinkModel>, DbErr> {
        let link = match entity::prelude::PlayerAliasLink::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(link) => link,
            None => return Ok(None),
        };

        if link.removed_at.is_some() {
            return Ok(Some(link));
        }

        let mut link_am = link.into_active_model();
        link_am.removed_at = ActiveValue::Set(Some(Utc::now().naive_utc()));
        link_am.removed_by = ActiveValue::Set(Some(removed_by.to_string()));

        Ok(Some(link_am.update(self.db).await?))
    }

    /// Get live links with either side equal to one of the provided tags
    pub async fn get_live_touching(
        &self,
        player_tags: &[PlayerTag],
    ) -> Result<Vec<AliasLinkModel>, DbErr> {
        if player_tags.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::PlayerAliasLink::find()
            .filter(entity::player_alias_link::Column::RemovedAt.is_null())
            .filter(
                Condition::any()
                    .add(tag_in(entity::player_alias_link::Column::PlayerTag1, player_tags))
                    .add(tag_in(entity::player_alias_link::Column::PlayerTag2, player_tags)),
            )
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use clanboard_test_utils::prelude::*;

    use super::*;

    fn tag(raw: &str) -> PlayerTag {
        PlayerTag::normalize(raw).unwrap()
    }

    /// Expect links touching a tag on either side to be returned
    #[tokio::test]
    async fn finds_links_on_either_side() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_player_tables()
            .with_alias_link(TEST_CLAN_TAG, "#PQL0289", "#Q8PL2")
            .with_alias_link(TEST_CLAN_TAG, "#Y9VJ2", "#PQL0289")
            .with_alias_link(TEST_CLAN_TAG, "#RRCC9", "#UUGG8")
            .build()
            .await?;

        let repo = AliasLinkRepository::new(&test.state.db);
        let links = repo.get_live_touching(&[tag("#PQL0289")]).await?;

        assert_eq!(links.len(), 2);

        Ok(())
    }

    /// Expect tombstoned links to be ignored and raw stored spellings to match
    #[tokio::test]
    async fn ignores_removed_links_and_matches_stored_spellings() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_player_tables()
            .with_alias_link(TEST_CLAN_TAG, "#Pql0289", "#Q8PL2")
            .with_alias_link(TEST_CLAN_TAG, "#RRCC9", " ##pQL 0289\t")
            .with_removed_alias_link(TEST_CLAN_TAG, "#PQL0289", "#Y9VJ2")
            .build()
            .await?;

        let repo = AliasLinkRepository::new(&test.state.db);
        let links = repo.get_live_touching(&[tag("#PQL0289")]).await?;

        let mut others: Vec<&str> = links
            .iter()
            .map(|link| match link.player_tag_1.as_str() {
                "#RRCC9" => "#RRCC9",
                _ => link.player_tag_2.as_str(),
            })
            .collect();
        others.sort();
        assert_eq!(others, vec!["#Q8PL2", "#RRCC9"]);

        Ok(())
    }

    /// Expect removal to set the tombstone once and hide the link from reads
    #[tokio::test]
    async fn remove_sets_tombstone() -> Result<(), TestError> {
        let test = test_setup_with_player_tables!()?;
        let repo = AliasLinkRepository::new(&test.state.db);

        let link = repo
            .create(
                &tag(TEST_CLAN_TAG),
                &tag("#PQL0289"),
                &tag("#Q8PL2"),
                "Leader".to_string(),
            )
            .await?;

        let removed = repo.remove(link.id, "Co-Leader").await?;
        assert!(removed.is_some());
        let removed = removed.unwrap();
        assert!(removed.removed_at.is_some());
        assert_eq!(removed.removed_by.as_deref(), Some("Co-Leader"));

        // Removing again keeps the original tombstone
        let again = repo.remove(link.id, "Someone Else").await?.unwrap();
        assert_eq!(again.removed_by.as_deref(), Some("Co-Leader"));

        let links = repo.get_live_touching(&[tag("#PQL0289")]).await?;
        assert!(links.is_empty());

        assert!(repo.remove(link.id + 100, "Leader").await?.is_none());

        Ok(())
    }
}
