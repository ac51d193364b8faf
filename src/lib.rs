//! Clan player database: per-person aggregation of leadership records with identity resolution
//! across alias-linked accounts and roster snapshots.

pub mod model;
pub mod server;
