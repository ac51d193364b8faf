//! Record collection: the four seed record classes of a clan plus notes and warnings of
//! alias-linked tags.

use std::collections::BTreeSet;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::record::{
        departure_action::DepartureActionRepository, note::NoteRepository,
        tenure_action::TenureActionRepository, warning::WarningRepository,
    },
    error::player::{PlayerError, RecordClass},
    model::db::{DepartureActionModel, NoteModel, TenureActionModel, WarningModel},
    service::player::record::{Collected, PlayerRecord},
    util::tag::PlayerTag,
};

#[derive(Clone, Debug, Default)]
pub struct CollectedRecords {
    pub notes: Vec<Collected<NoteModel>>,
    pub warnings: Vec<Collected<WarningModel>>,
    pub tenure_actions: Vec<Collected<TenureActionModel>>,
    pub departure_actions: Vec<Collected<DepartureActionModel>>,
}

impl CollectedRecords {
    /// Every tag with at least one collected record.
    pub fn tags(&self) -> BTreeSet<PlayerTag> {
        let mut tags = BTreeSet::new();
        tags.extend(self.notes.iter().map(|r| r.tag.clone()));
        tags.extend(self.warnings.iter().map(|r| r.tag.clone()));
        tags.extend(self.tenure_actions.iter().map(|r| r.tag.clone()));
        tags.extend(self.departure_actions.iter().map(|r| r.tag.clone()));
        tags
    }
}

fn keep_all<T: PlayerRecord>(models: Vec<T>, alias_sourced: bool) -> Vec<Collected<T>> {
    models
        .into_iter()
        .filter_map(|model| Collected::keep(model, alias_sourced))
        .collect()
}

pub struct RecordCollector<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecordCollector<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the clan's notes, warnings, tenure actions and departure actions concurrently.
    ///
    /// Records of test accounts and records with unparseable tags are dropped.
    ///
    /// # Returns
    /// - `Ok(CollectedRecords)` - All four classes loaded
    /// - `Err(PlayerError::RecordFetch)` - Any of the four fetches failed
    pub async fn collect_seed(
        &self,
        clan_tag: &PlayerTag,
        include_archived: bool,
    ) -> Result<CollectedRecords, PlayerError> {
        let fetch_failed = |class: RecordClass| {
            let clan_tag = clan_tag.to_string();
            move |source: DbErr| PlayerError::RecordFetch {
                class,
                clan_tag,
                source,
            }
        };

        let note_repo = NoteRepository::new(self.db);
        let warning_repo = WarningRepository::new(self.db);
        let tenure_repo = TenureActionRepository::new(self.db);
        let departure_repo = DepartureActionRepository::new(self.db);

        let (notes, warnings, tenure_actions, departure_actions) = tokio::try_join!(
            async {
                note_repo
                    .get_by_clan(clan_tag, include_archived)
                    .await
                    .map_err(fetch_failed(RecordClass::Notes))
            },
            async {
                warning_repo
                    .get_by_clan(clan_tag, include_archived)
                    .await
                    .map_err(fetch_failed(RecordClass::Warnings))
            },
            async {
                tenure_repo
                    .get_by_clan(clan_tag, include_archived)
                    .await
                    .map_err(fetch_failed(RecordClass::TenureActions))
            },
            async {
                departure_repo
                    .get_by_clan(clan_tag, include_archived)
                    .await
                    .map_err(fetch_failed(RecordClass::DepartureActions))
            },
        )?;

        Ok(CollectedRecords {
            notes: keep_all(notes, false),
            warnings: keep_all(warnings, false),
            tenure_actions: keep_all(tenure_actions, false),
            departure_actions: keep_all(departure_actions, false),
        })
    }

    /// Fetches notes and warnings of alias-linked tags from every clan and appends them to
    /// `records`, flagged as alias-sourced.
    ///
    /// Tenure and departure actions are not fetched for linked tags. Failures are logged and
    /// leave `records` unchanged for that class.
    pub async fn collect_linked(
        &self,
        records: &mut CollectedRecords,
        linked_tags: &[PlayerTag],
        include_archived: bool,
    ) {
        let linked_tags: Vec<PlayerTag> = linked_tags
            .iter()
            .filter(|tag| !tag.is_test_tag())
            .cloned()
            .collect();
        if linked_tags.is_empty() {
            return;
        }

        let note_repo = NoteRepository::new(self.db);
        let warning_repo = WarningRepository::new(self.db);

        let (notes, warnings) = tokio::join!(
            note_repo.get_by_tags(&linked_tags, include_archived),
            warning_repo.get_by_tags(&linked_tags, include_archived),
        );

        match notes {
            Ok(notes) => records.notes.extend(keep_all(notes, true)),
            Err(err) => {
                tracing::warn!(error = %err, linked = linked_tags.len(), "Failed to fetch notes of linked accounts");
            }
        }

        match warnings {
            Ok(warnings) => records.warnings.extend(keep_all(warnings, true)),
            Err(err) => {
                tracing::warn!(error = %err, linked = linked_tags.len(), "Failed to fetch warnings of linked accounts");
            }
        }
    }
}
