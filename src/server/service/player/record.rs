use chrono::NaiveDateTime;

use crate::{
    model::player::{DepartureActionDto, NoteDto, TenureActionDto, WarningDto},
    server::{
        model::db::{DepartureActionModel, NoteModel, TenureActionModel, WarningModel},
        util::tag::PlayerTag,
    },
};

/// Fields shared by every administrative record class.
pub trait PlayerRecord {
    fn player_tag(&self) -> &str;
    fn player_name(&self) -> Option<&str>;
    fn created_at(&self) -> NaiveDateTime;
    /// Last time the row was written; records that are never edited only have `created_at`.
    fn written_at(&self) -> NaiveDateTime;
}

macro_rules! impl_player_record {
    ($($model:ty => $written:ident),+ $(,)?) => {
        $(
            impl PlayerRecord for $model {
                fn player_tag(&self) -> &str {
                    &self.player_tag
                }

                fn player_name(&self) -> Option<&str> {
                    self.player_name.as_deref()
                }

                fn created_at(&self) -> NaiveDateTime {
                    self.created_at
                }

                fn written_at(&self) -> NaiveDateTime {
                    self.$written
                }
            }
        )+
    };
}

impl_player_record!(
    NoteModel => updated_at,
    WarningModel => updated_at,
    TenureActionModel => created_at,
    DepartureActionModel => created_at,
);

/// A record kept for aggregation, keyed by its normalized tag.
#[derive(Clone, Debug)]
pub struct Collected<T> {
    pub tag: PlayerTag,
    pub model: T,
    /// Fetched only because the tag is alias-linked to a tag of the requested clan
    pub alias_sourced: bool,
}

impl<T: PlayerRecord> Collected<T> {
    /// Keeps a record unless its tag cannot be normalized or belongs to a test account.
    pub fn keep(model: T, alias_sourced: bool) -> Option<Self> {
        let tag = PlayerTag::normalize(model.player_tag())?;
        if tag.is_test_tag() {
            return None;
        }

        Some(Self {
            tag,
            model,
            alias_sourced,
        })
    }
}

impl From<&Collected<NoteModel>> for NoteDto {
    fn from(record: &Collected<NoteModel>) -> Self {
        let note = &record.model;
        Self {
            id: note.id,
            player_tag: record.tag.to_string(),
            player_name: note.player_name.clone(),
            note: note.note.clone(),
            custom_fields: note.custom_fields.clone(),
            created_by: note.created_by.clone(),
            created_at: note.created_at,
            archived_at: note.archived_at,
            archived_by: note.archived_by.clone(),
            alias_sourced: record.alias_sourced,
        }
    }
}

impl From<&Collected<WarningModel>> for WarningDto {
    fn from(record: &Collected<WarningModel>) -> Self {
        let warning = &record.model;
        Self {
            id: warning.id,
            player_tag: record.tag.to_string(),
            player_name: warning.player_name.clone(),
            warning_note: warning.warning_note.clone(),
            is_active: warning.is_active,
            created_by: warning.created_by.clone(),
            created_at: warning.created_at,
            archived_at: warning.archived_at,
            archived_by: warning.archived_by.clone(),
            alias_sourced: record.alias_sourced,
        }
    }
}

impl From<&Collected<TenureActionModel>> for TenureActionDto {
    fn from(record: &Collected<TenureActionModel>) -> Self {
        let action = &record.model;
        Self {
            id: action.id,
            player_tag: record.tag.to_string(),
            player_name: action.player_name.clone(),
            action: action.action.clone(),
            reason: action.reason.clone(),
            granted_by: action.granted_by.clone(),
            created_at: action.created_at,
            archived_at: action.archived_at,
            archived_by: action.archived_by.clone(),
        }
    }
}

impl From<&Collected<DepartureActionModel>> for DepartureActionDto {
    fn from(record: &Collected<DepartureActionModel>) -> Self {
        let departure = &record.model;
        Self {
            id: departure.id,
            player_tag: record.tag.to_string(),
            player_name: departure.player_name.clone(),
            departure_type: departure.departure_type.clone(),
            reason: departure.reason.clone(),
            recorded_by: departure.recorded_by.clone(),
            created_at: departure.created_at,
            archived_at: departure.archived_at,
            archived_by: departure.archived_by.clone(),
        }
    }
}
