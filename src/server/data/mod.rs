//! Data access layer repositories.
//!
//! Repositories borrow a `DatabaseConnection` and expose the filtered selects the player
//! database reads plus the writes used by leader tooling and snapshot ingestion. Tags are
//! always written in normalized form, but rows written by other tools may carry any casing,
//! marker or whitespace, so every tag filter compares the normalized column
//! (see [`normalized_tag`]) against the tag body.

pub mod alias_link;
pub mod record;
pub mod roster;

use sea_orm::{
    sea_query::{Alias, Expr, Func, IntoColumnRef},
    ExprTrait,
};

use crate::server::util::tag::{PlayerTag, TAG_MARKER};

/// Whitespace removed from stored tags before comparison.
const TAG_WHITESPACE: [&str; 4] = [" ", "\t", "\n", "\r"];

/// SQL form of [`PlayerTag::normalize`] without the marker:
/// `UPPER(LTRIM(REPLACE(..REPLACE(col, ' ', '')..), '#'))`.
///
/// Works on both Postgres and SQLite.
pub(crate) fn normalized_tag<C: IntoColumnRef>(column: C) -> Expr {
    let mut expr = Expr::col(column);
    for whitespace in TAG_WHITESPACE {
        expr = Func::cust(Alias::new("REPLACE"))
            .arg(expr)
            .arg(whitespace)
            .arg("")
            .into();
    }

    let trimmed = Func::cust(Alias::new("LTRIM"))
        .arg(expr)
        .arg(TAG_MARKER.to_string());

    Func::upper(trimmed).into()
}

/// Matches rows whose `column` normalizes to `tag`.
pub(crate) fn tag_eq<C: IntoColumnRef>(column: C, tag: &PlayerTag) -> Expr {
    normalized_tag(column).eq(tag.bare())
}

/// Matches rows whose `column` normalizes to any of `tags`.
pub(crate) fn tag_in<'t, C: IntoColumnRef>(
    column: C,
    tags: impl IntoIterator<Item = &'t PlayerTag>,
) -> Expr {
    normalized_tag(column).is_in(tags.into_iter().map(|tag| tag.bare().to_string()))
}
