pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        constant::*, fixtures::factory, test_setup_with_player_tables, test_setup_with_tables,
        TestBuilder, TestError, TestSetup,
    };
}
