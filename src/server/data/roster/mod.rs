//! Roster snapshot and clan member repositories.
//!
//! Both tables are filled by an external ingestion process. The player database only reads
//! them, the `create` methods exist for that ingestion and for tests.

pub mod member;
pub mod snapshot;
