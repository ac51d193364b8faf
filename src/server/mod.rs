//! Server application core modules.
//!
//! Everything behind the HTTP API: configuration, the router and its controllers, the
//! repositories over the clan's record, alias and roster tables, the Clash of Clans API client,
//! and the player database service that joins them into one view per person.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod clash;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
