use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

pub struct TestAppState {
    pub db: DatabaseConnection,
    /// Base URL of the mock game-data API server
    pub clash_api_url: String,
}

pub struct TestSetup {
    pub server: ServerGuard,
    pub state: TestAppState,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;
        let clash_api_url = mock_server.url();

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server: mock_server,
            state: TestAppState { db, clash_api_url },
            mocks: Vec::new(),
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates a test setup with every table read by the player database.
#[macro_export]
macro_rules! test_setup_with_player_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;
            setup
                .with_tables($crate::setup::player_table_statements())
                .await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}

/// CREATE TABLE statements for all player database tables.
pub fn player_table_statements() -> Vec<TableCreateStatement> {
    let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::PlayerNote),
        schema.create_table_from_entity(entity::prelude::PlayerWarning),
        schema.create_table_from_entity(entity::prelude::PlayerTenureAction),
        schema.create_table_from_entity(entity::prelude::PlayerDepartureAction),
        schema.create_table_from_entity(entity::prelude::PlayerAliasLink),
        schema.create_table_from_entity(entity::prelude::RosterSnapshotMember),
        schema.create_table_from_entity(entity::prelude::ClanMember),
    ]
}
