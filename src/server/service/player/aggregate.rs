//! Folds collected records, roster snapshots and resolved names into one aggregate per tag.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::{
    model::player::{
        DepartureActionDto, LinkedAccountDto, MembershipStatus, NoteDto, PlayerDto,
        TenureActionDto, WarningDto, UNKNOWN_PLAYER_NAME,
    },
    server::{
        model::db::{
            DepartureActionModel, NoteModel, RosterSnapshotMemberModel, TenureActionModel,
            WarningModel,
        },
        service::player::{
            alias::AliasGraph,
            membership::MembershipIndex,
            name::{is_real_name, ResolvedNames},
            record::{Collected, PlayerRecord},
        },
        util::tag::PlayerTag,
    },
};

/// Working state for one player while records are folded in.
#[derive(Clone, Debug)]
pub struct PlayerAggregate {
    pub tag: PlayerTag,
    pub name: String,
    pub notes: Vec<NoteDto>,
    pub warnings: Vec<WarningDto>,
    pub tenure_actions: Vec<TenureActionDto>,
    pub departure_actions: Vec<DepartureActionDto>,
    pub last_updated: Option<NaiveDateTime>,
}

impl PlayerAggregate {
    pub fn new(tag: PlayerTag, name: Option<&str>) -> Self {
        let mut aggregate = Self {
            tag,
            name: UNKNOWN_PLAYER_NAME.to_string(),
            notes: Vec::new(),
            warnings: Vec::new(),
            tenure_actions: Vec::new(),
            departure_actions: Vec::new(),
            last_updated: None,
        };
        aggregate.offer_name(name);
        aggregate
    }

    /// Replaces the name only while it is still the placeholder.
    ///
    /// Returns whether the name changed.
    pub fn offer_name(&mut self, candidate: Option<&str>) -> bool {
        match candidate {
            Some(candidate) if !is_real_name(&self.name) && is_real_name(candidate) => {
                self.name = candidate.trim().to_string();
                true
            }
            _ => false,
        }
    }

    fn touch(&mut self, at: NaiveDateTime) {
        if self.last_updated.map_or(true, |current| at > current) {
            self.last_updated = Some(at);
        }
    }
}

pub struct Aggregator<'r> {
    names: &'r ResolvedNames,
    membership: &'r MembershipIndex,
    aliases: &'r AliasGraph,
    players: BTreeMap<PlayerTag, PlayerAggregate>,
}

impl<'r> Aggregator<'r> {
    pub fn new(
        names: &'r ResolvedNames,
        membership: &'r MembershipIndex,
        aliases: &'r AliasGraph,
    ) -> Self {
        Self {
            names,
            membership,
            aliases,
            players: BTreeMap::new(),
        }
    }

    /// Gets the aggregate for `tag`, creating it with the best known name.
    ///
    /// A later source may still upgrade the name of an aggregate created with the placeholder.
    fn entry(&mut self, tag: &PlayerTag, fallback_name: Option<&str>) -> &mut PlayerAggregate {
        let names = self.names;
        let aggregate = self
            .players
            .entry(tag.clone())
            .or_insert_with(|| PlayerAggregate::new(tag.clone(), names.get(tag)));

        aggregate.offer_name(names.get(tag));
        aggregate.offer_name(fallback_name);
        aggregate
    }

    fn fold<T, D>(
        &mut self,
        records: &[Collected<T>],
        include: impl Fn(&T) -> bool,
        push: impl Fn(&mut PlayerAggregate, D),
    ) where
        T: PlayerRecord,
        D: for<'c> From<&'c Collected<T>>,
    {
        for record in records {
            let aggregate = self.entry(&record.tag, record.model.player_name());
            aggregate.touch(record.model.created_at());

            if include(&record.model) {
                push(aggregate, D::from(record));
            }
        }
    }

    pub fn add_notes(&mut self, notes: &[Collected<NoteModel>]) {
        self.fold(notes, |_| true, |aggregate, dto: NoteDto| aggregate.notes.push(dto));
    }

    /// Inactive warnings count towards `last_updated` but are not listed.
    pub fn add_warnings(&mut self, warnings: &[Collected<WarningModel>]) {
        self.fold(
            warnings,
            |warning| warning.is_active,
            |aggregate, dto: WarningDto| aggregate.warnings.push(dto),
        );
    }

    pub fn add_tenure_actions(&mut self, tenure_actions: &[Collected<TenureActionModel>]) {
        self.fold(
            tenure_actions,
            |_| true,
            |aggregate, dto: TenureActionDto| aggregate.tenure_actions.push(dto),
        );
    }

    pub fn add_departure_actions(&mut self, departure_actions: &[Collected<DepartureActionModel>]) {
        self.fold(
            departure_actions,
            |_| true,
            |aggregate, dto: DepartureActionDto| aggregate.departure_actions.push(dto),
        );
    }

    /// Adds an empty aggregate for every member of the latest snapshot without records.
    pub fn add_roster(&mut self, latest_members: &[RosterSnapshotMemberModel]) {
        for member in latest_members {
            let Some(tag) = PlayerTag::normalize(&member.player_tag) else {
                continue;
            };
            if tag.is_test_tag() {
                continue;
            }

            self.entry(&tag, member.player_name.as_deref());
        }
    }

    /// Adds every tag ever seen in one of the clan's snapshots.
    pub fn add_history(&mut self) {
        let membership = self.membership;
        let mut tags: Vec<&PlayerTag> = membership.any_tags().iter().collect();
        tags.sort();

        for tag in tags {
            if tag.is_test_tag() {
                continue;
            }

            let last_seen_name = membership
                .last_seen(tag)
                .and_then(|seen| seen.name.as_deref());
            self.entry(tag, last_seen_name);
        }
    }

    /// Attaches membership and linked accounts and orders players by `last_updated`, most
    /// recent first. Players without records sort last; ties keep tag order.
    pub fn finish(self) -> Vec<PlayerDto> {
        let Self {
            names,
            membership,
            aliases,
            players,
        } = self;

        let mut players: Vec<PlayerDto> = players
            .into_values()
            .map(|aggregate| {
                let status = membership.classify(&aggregate.tag);
                let last_seen = membership.last_seen(&aggregate.tag).map(|seen| seen.date);

                let linked_accounts = aliases
                    .linked_accounts(&aggregate.tag)
                    .into_iter()
                    .filter(|linked| !linked.is_test_tag())
                    .map(|linked| LinkedAccountDto {
                        name: names.name_of(&linked),
                        membership: membership.classify(&linked),
                        tag: linked.into(),
                    })
                    .collect();

                PlayerDto {
                    tag: aggregate.tag.into(),
                    name: aggregate.name,
                    notes: aggregate.notes,
                    warnings: aggregate.warnings,
                    tenure_actions: aggregate.tenure_actions,
                    departure_actions: aggregate.departure_actions,
                    last_updated: aggregate.last_updated,
                    is_current_member: status == MembershipStatus::Current,
                    membership: status,
                    last_seen,
                    linked_accounts,
                }
            })
            .collect();

        players.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
        players
    }
}
