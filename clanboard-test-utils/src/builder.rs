//! Declarative test builder.
//!
//! The builder queues tables, record fixtures, roster snapshots and mock
//! game-data API endpoints, then executes everything during the final
//! `build()` call.

use chrono::{NaiveDate, NaiveDateTime};
use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, setup::player_table_statements, TestSetup};

/// `(clan_tag, player_tag, player_name, created_at)`
type RecordSpec = (String, String, Option<String>, NaiveDateTime);

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create a
/// complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_player_tables: bool,

    // Database fixtures to insert
    notes: Vec<(RecordSpec, bool)>, // (record, archived)
    warnings: Vec<(RecordSpec, bool)>, // (record, is_active)
    tenure_actions: Vec<RecordSpec>,
    departure_actions: Vec<RecordSpec>,
    alias_links: Vec<(String, String, String, bool)>, // (clan_tag, tag_1, tag_2, removed)
    snapshots: Vec<(String, NaiveDate, Vec<(String, Option<String>)>)>,
    clan_members: Vec<(String, String, String)>, // (clan_tag, player_tag, name)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    player_endpoints: Vec<(String, String, usize)>, // (bare_tag, name, expected_requests)
    player_error_endpoints: Vec<(String, usize, usize)>, // (bare_tag, status, expected_requests)
}

fn record(
    clan_tag: &str,
    player_tag: &str,
    player_name: Option<&str>,
    created_at: NaiveDateTime,
) -> RecordSpec {
    (
        clan_tag.to_string(),
        player_tag.to_string(),
        player_name.map(str::to_string),
        created_at,
    )
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_player_tables: false,
            notes: Vec::new(),
            warnings: Vec::new(),
            tenure_actions: Vec::new(),
            departure_actions: Vec::new(),
            alias_links: Vec::new(),
            snapshots: Vec::new(),
            clan_members: Vec::new(),
            mock_builders: Vec::new(),
            player_endpoints: Vec::new(),
            player_error_endpoints: Vec::new(),
        }
    }

    /// Add every table read by the player database.
    pub fn with_player_tables(mut self) -> Self {
        self.include_player_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use clanboard_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), clanboard_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(PlayerNote)
    ///     .with_table(PlayerWarning)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a live note.
    pub fn with_note(
        mut self,
        clan_tag: &str,
        player_tag: &str,
        player_name: Option<&str>,
        created_at: NaiveDateTime,
    ) -> Self {
        self.notes
            .push((record(clan_tag, player_tag, player_name, created_at), false));
        self
    }

    /// Insert a note that has already been archived.
    pub fn with_archived_note(
        mut self,
        clan_tag: &str,
        player_tag: &str,
        player_name: Option<&str>,
        created_at: NaiveDateTime,
    ) -> Self {
        self.notes
            .push((record(clan_tag, player_tag, player_name, created_at), true));
        self
    }

    /// Insert a warning with the provided active flag.
    pub fn with_warning(
        mut self,
        clan_tag: &str,
        player_tag: &str,
        player_name: Option<&str>,
        created_at: NaiveDateTime,
        is_active: bool,
    ) -> Self {
        self.warnings.push((
            record(clan_tag, player_tag, player_name, created_at),
            is_active,
        ));
        self
    }

    /// Insert a tenure grant.
    pub fn with_tenure_action(
        mut self,
        clan_tag: &str,
        player_tag: &str,
        player_name: Option<&str>,
        created_at: NaiveDateTime,
    ) -> Self {
        self.tenure_actions
            .push(record(clan_tag, player_tag, player_name, created_at));
        self
    }

    /// Insert a voluntary departure.
    pub fn with_departure_action(
        mut self,
        clan_tag: &str,
        player_tag: &str,
        player_name: Option<&str>,
        created_at: NaiveDateTime,
    ) -> Self {
        self.departure_actions
            .push(record(clan_tag, player_tag, player_name, created_at));
        self
    }

    /// Insert a live alias link between two tags.
    pub fn with_alias_link(mut self, clan_tag: &str, player_tag_1: &str, player_tag_2: &str) -> Self {
        self.alias_links.push((
            clan_tag.to_string(),
            player_tag_1.to_string(),
            player_tag_2.to_string(),
            false,
        ));
        self
    }

    /// Insert an alias link that has been removed (tombstoned).
    pub fn with_removed_alias_link(
        mut self,
        clan_tag: &str,
        player_tag_1: &str,
        player_tag_2: &str,
    ) -> Self {
        self.alias_links.push((
            clan_tag.to_string(),
            player_tag_1.to_string(),
            player_tag_2.to_string(),
            true,
        ));
        self
    }

    /// Insert a roster snapshot for `clan_tag` on `snapshot_date`.
    ///
    /// # Arguments
    /// - `members` - `(player_tag, player_name)` pairs present in the snapshot
    pub fn with_snapshot(
        mut self,
        clan_tag: &str,
        snapshot_date: NaiveDate,
        members: &[(&str, Option<&str>)],
    ) -> Self {
        self.snapshots.push((
            clan_tag.to_string(),
            snapshot_date,
            members
                .iter()
                .map(|(tag, name)| (tag.to_string(), name.map(str::to_string)))
                .collect(),
        ));
        self
    }

    /// Insert a row into the clan member fallback name table.
    pub fn with_clan_member(mut self, clan_tag: &str, player_tag: &str, name: &str) -> Self {
        self.clan_members.push((
            clan_tag.to_string(),
            player_tag.to_string(),
            name.to_string(),
        ));
        self
    }

    /// Add a mock game-data player endpoint returning `name`.
    pub fn with_player_endpoint(
        mut self,
        bare_tag: &str,
        name: &str,
        expected_requests: usize,
    ) -> Self {
        self.player_endpoints
            .push((bare_tag.to_string(), name.to_string(), expected_requests));
        self
    }

    /// Add a mock game-data player endpoint failing with `status`.
    pub fn with_player_error_endpoint(
        mut self,
        bare_tag: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.player_error_endpoints
            .push((bare_tag.to_string(), status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (player tables if specified, then custom tables)
    /// 2. Inserts database fixtures (records, alias links, snapshots, members)
    /// 3. Creates mock HTTP endpoints (custom endpoints first, then player endpoints)
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_player_tables {
            all_tables.extend(player_table_statements());
        }
        all_tables.extend(self.tables);

        setup.with_tables(all_tables).await?;

        // 2. Insert fixtures
        for ((clan_tag, player_tag, player_name, created_at), archived) in self.notes {
            setup
                .records()
                .insert_note(
                    &clan_tag,
                    &player_tag,
                    player_name.as_deref(),
                    created_at,
                    archived,
                )
                .await?;
        }

        for ((clan_tag, player_tag, player_name, created_at), is_active) in self.warnings {
            setup
                .records()
                .insert_warning(
                    &clan_tag,
                    &player_tag,
                    player_name.as_deref(),
                    created_at,
                    is_active,
                )
                .await?;
        }

        for (clan_tag, player_tag, player_name, created_at) in self.tenure_actions {
            setup
                .records()
                .insert_tenure_action(&clan_tag, &player_tag, player_name.as_deref(), created_at)
                .await?;
        }

        for (clan_tag, player_tag, player_name, created_at) in self.departure_actions {
            setup
                .records()
                .insert_departure_action(&clan_tag, &player_tag, player_name.as_deref(), created_at)
                .await?;
        }

        for (clan_tag, tag_1, tag_2, removed) in self.alias_links {
            setup
                .records()
                .insert_alias_link(&clan_tag, &tag_1, &tag_2, removed)
                .await?;
        }

        for (clan_tag, snapshot_date, members) in self.snapshots {
            setup
                .roster()
                .insert_snapshot(&clan_tag, snapshot_date, &members)
                .await?;
        }

        for (clan_tag, player_tag, name) in self.clan_members {
            setup
                .roster()
                .insert_clan_member(&clan_tag, &player_tag, &name)
                .await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first so tests can shadow a path with
        // sequential mocks (e.g. error then success)
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (bare_tag, name, expected) in self.player_endpoints {
            mocks.push(
                setup
                    .clash()
                    .create_player_endpoint(&bare_tag, &name, expected),
            );
        }

        for (bare_tag, status, expected) in self.player_error_endpoints {
            mocks.push(
                setup
                    .clash()
                    .create_player_error_endpoint(&bare_tag, status, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
