//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories and the Clash of Clans API client to build the views
//! served by the controllers.

pub mod player;
