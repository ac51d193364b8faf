//! Test fixture modules for database and HTTP mock creation.
//!
//! - `records` - notes, warnings, tenure/departure actions and alias links
//! - `roster` - periodic roster snapshots and the clan member fallback table
//! - `clash` - mock game-data API endpoints
//! - `factory` - in-memory models and timestamp helpers

pub mod clash;
pub mod factory;
pub mod records;
pub mod roster;

use crate::TestSetup;

impl TestSetup {
    pub fn records<'a>(&'a self) -> records::RecordFixtures<'a> {
        records::RecordFixtures { setup: self }
    }

    pub fn roster<'a>(&'a self) -> roster::RosterFixtures<'a> {
        roster::RosterFixtures { setup: self }
    }

    pub fn clash<'a>(&'a mut self) -> clash::ClashFixtures<'a> {
        clash::ClashFixtures { setup: self }
    }
}
