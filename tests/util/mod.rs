//! Helpers shared by the integration tests.

mod app_state;

pub use app_state::TestSetupExt;
