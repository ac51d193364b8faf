use super::*;

fn options(include_archived: bool, include_historical: bool) -> PlayerDatabaseOptions {
    PlayerDatabaseOptions {
        include_archived,
        include_historical,
    }
}

async fn build(
    test: &TestSetup,
    clash_client: &ClashClient,
    options: PlayerDatabaseOptions,
) -> Result<PlayerDatabaseDto, PlayerError> {
    let settings = test_settings();
    PlayerDatabaseService::new(&test.state.db, clash_client, &settings)
        .get_player_database(&clan(), options)
        .await
}

fn find<'p>(database: &'p PlayerDatabaseDto, tag: &str) -> Option<&'p PlayerDto> {
    database.players.iter().find(|player| player.tag == tag)
}

/// Expect one aggregate per tag with records of every class merged
#[tokio::test]
async fn merges_records_across_classes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_note(TEST_CLAN_TAG, "#PQL0289", Some("X"), factory::at("2024-01-01"))
        .with_warning(TEST_CLAN_TAG, "pql0289", None, factory::at("2024-02-01"), true)
        .build()
        .await?;
    let client = test_clash_client_without_token(&test);

    let database = build(&test, &client, options(false, false)).await.unwrap();

    assert_eq!(database.players.len(), 1);
    let player = &database.players[0];
    assert_eq!(player.name, "X");
    assert_eq!(player.notes.len(), 1);
    assert_eq!(player.warnings.len(), 1);
    assert_eq!(player.last_updated, Some(factory::at("2024-02-01")));
    assert_eq!(database.summary.player_count, 1);
    assert_eq!(database.summary.clan_tag, TEST_CLAN_TAG);

    Ok(())
}

/// Expect archived notes only in archived-inclusive mode
#[tokio::test]
async fn excludes_archived_records_by_default() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_note(TEST_CLAN_TAG, "#PQL0289", Some("Alice"), factory::at("2024-01-01"))
        .with_archived_note(TEST_CLAN_TAG, "#PQL0289", Some("Alice"), factory::at("2024-01-02"))
        .with_archived_note(TEST_CLAN_TAG, "#Q8PL2", Some("Bob"), factory::at("2024-01-03"))
        .build()
        .await?;
    let client = test_clash_client_without_token(&test);

    let default = build(&test, &client, options(false, false)).await.unwrap();
    assert_eq!(default.players.len(), 1);
    assert_eq!(default.players[0].notes.len(), 1);
    assert!(!default.summary.include_archived);

    let archived = build(&test, &client, options(true, false)).await.unwrap();
    assert_eq!(archived.players.len(), 2);
    assert_eq!(find(&archived, "#PQL0289").unwrap().notes.len(), 2);
    assert!(archived.summary.include_archived);

    Ok(())
}

/// Expect linked accounts without cross-attribution of records
#[tokio::test]
async fn expands_alias_links_without_moving_records() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_snapshot(
            TEST_CLAN_TAG,
            factory::date("2024-02-01"),
            &[("#PQL0289", Some("Alice"))],
        )
        .with_warning(TEST_OTHER_CLAN_TAG, "#Q8PL2", Some("Alice Alt"), factory::at("2024-01-15"), true)
        .with_alias_link(TEST_CLAN_TAG, "#PQL0289", "#Q8PL2")
        .build()
        .await?;
    let client = test_clash_client_without_token(&test);

    let database = build(&test, &client, options(false, false)).await.unwrap();

    let alice = find(&database, "#PQL0289").unwrap();
    assert!(alice.warnings.is_empty());
    assert_eq!(alice.linked_accounts.len(), 1);
    assert_eq!(alice.linked_accounts[0].tag, "#Q8PL2");
    assert_eq!(alice.linked_accounts[0].name, "Alice Alt");
    assert_eq!(alice.linked_accounts[0].membership, MembershipStatus::Never);

    let alt = find(&database, "#Q8PL2").unwrap();
    assert_eq!(alt.warnings.len(), 1);
    assert!(alt.warnings[0].alias_sourced);
    assert_eq!(alt.linked_accounts[0].tag, "#PQL0289");
    assert_eq!(alt.linked_accounts[0].membership, MembershipStatus::Current);

    assert_eq!(database.summary.linked_account_count, 2);

    Ok(())
}

/// Expect chained links to make every account of one person discoverable
#[tokio::test]
async fn follows_chained_alias_links() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_note(TEST_CLAN_TAG, "#PQL0289", Some("Alice"), factory::at("2024-01-01"))
        .with_alias_link(TEST_CLAN_TAG, "#PQL0289", "#Q8PL2")
        .with_alias_link(TEST_CLAN_TAG, "#Q8PL2", "#Y9VJ2")
        .with_removed_alias_link(TEST_CLAN_TAG, "#PQL0289", "#RRCC9")
        .build()
        .await?;
    let client = test_clash_client_without_token(&test);

    let database = build(&test, &client, options(false, false)).await.unwrap();

    let alice = find(&database, "#PQL0289").unwrap();
    let linked: Vec<&str> = alice.linked_accounts.iter().map(|l| l.tag.as_str()).collect();
    assert_eq!(linked, vec!["#Q8PL2", "#Y9VJ2"]);

    Ok(())
}

/// Expect records and links stored with unnormalized tags to join the same players
#[tokio::test]
async fn joins_records_stored_with_any_tag_spelling() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_note(TEST_CLAN_TAG, "#PQL0289", Some("Alice"), factory::at("2024-01-01"))
        .with_note(" #2pr8R8V8P", "#Y9VJ2", Some("Carol"), factory::at("2024-01-02"))
        .with_alias_link(TEST_CLAN_TAG, "#Pql0289", "#Q8PL2")
        .with_warning(TEST_OTHER_CLAN_TAG, " q8pl2", Some("Alice Alt"), factory::at("2024-01-03"), true)
        .build()
        .await?;
    let client = test_clash_client_without_token(&test);

    let database = build(&test, &client, options(false, false)).await.unwrap();

    assert!(find(&database, "#Y9VJ2").is_some());
    let alice = find(&database, "#PQL0289").unwrap();
    assert_eq!(alice.linked_accounts.len(), 1);
    assert_eq!(alice.linked_accounts[0].tag, "#Q8PL2");
    assert_eq!(alice.linked_accounts[0].name, "Alice Alt");
    let alt = find(&database, "#Q8PL2").unwrap();
    assert_eq!(alt.warnings.len(), 1);

    Ok(())
}

/// Expect test accounts to be dropped everywhere
#[tokio::test]
async fn excludes_test_tags() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_note(TEST_CLAN_TAG, "#test123", Some("Tester"), factory::at("2024-01-01"))
        .with_note(TEST_CLAN_TAG, "#PQL0289", Some("Alice"), factory::at("2024-01-01"))
        .with_alias_link(TEST_CLAN_TAG, "#PQL0289", "#TEST456")
        .with_alias_link(TEST_CLAN_TAG, "#TEST123", "#Q8PL2")
        .with_snapshot(
            TEST_CLAN_TAG,
            factory::date("2024-02-01"),
            &[("#TEST789", Some("Roster Tester"))],
        )
        .build()
        .await?;
    let client = test_clash_client_without_token(&test);

    let database = build(&test, &client, options(false, true)).await.unwrap();

    assert_eq!(database.players.len(), 1);
    assert_eq!(database.players[0].tag, "#PQL0289");
    assert!(database.players[0].linked_accounts.is_empty());

    Ok(())
}

/// Expect current roster members without records to be listed, unknown names looked up live
#[tokio::test]
async fn lists_current_members_without_records() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_note(TEST_CLAN_TAG, "#PQL0289", Some("Alice"), factory::at("2024-01-01"))
        .with_snapshot(
            TEST_CLAN_TAG,
            factory::date("2024-01-01"),
            &[("#Y9VJ2", Some("Carol"))],
        )
        .with_snapshot(
            TEST_CLAN_TAG,
            factory::date("2024-02-01"),
            &[("#PQL0289", Some("Alice")), ("#Q8PL2", None)],
        )
        .with_player_endpoint("Q8PL2", "Bob Live", 1)
        .build()
        .await?;
    let client = test_clash_client(&test);

    let database = build(&test, &client, options(false, false)).await.unwrap();

    assert_eq!(database.players.len(), 2);
    let bob = find(&database, "#Q8PL2").unwrap();
    assert_eq!(bob.name, "Bob Live");
    assert!(bob.is_current_member);
    assert_eq!(bob.last_updated, None);
    assert!(find(&database, "#Y9VJ2").is_none());

    assert_eq!(database.summary.current_member_count, 2);
    assert_eq!(
        database.summary.latest_snapshot_date,
        Some(factory::date("2024-02-01"))
    );
    test.assert_mocks();

    Ok(())
}

/// Expect historical mode to add former members with their last sighting
#[tokio::test]
async fn historical_mode_adds_former_members() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_snapshot(
            TEST_CLAN_TAG,
            factory::date("2024-01-01"),
            &[("#Y9VJ2", Some("Carol")), ("#PQL0289", Some("Alice"))],
        )
        .with_snapshot(
            TEST_CLAN_TAG,
            factory::date("2024-02-01"),
            &[("#PQL0289", Some("Alice"))],
        )
        .build()
        .await?;
    let client = test_clash_client_without_token(&test);

    let database = build(&test, &client, options(false, true)).await.unwrap();

    assert_eq!(database.players.len(), 2);
    let carol = find(&database, "#Y9VJ2").unwrap();
    assert_eq!(carol.name, "Carol");
    assert_eq!(carol.membership, MembershipStatus::Former);
    assert!(!carol.is_current_member);
    assert_eq!(carol.last_seen, Some(factory::date("2024-01-01")));
    assert_eq!(database.summary.current_member_count, 1);
    assert!(database.summary.include_historical);

    Ok(())
}

/// Expect every tag to land in exactly one membership class
#[tokio::test]
async fn membership_partitions_players() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_note(TEST_CLAN_TAG, "#RRCC9", Some("Dave"), factory::at("2024-01-01"))
        .with_snapshot(
            TEST_CLAN_TAG,
            factory::date("2024-01-01"),
            &[("#Y9VJ2", Some("Carol"))],
        )
        .with_snapshot(
            TEST_CLAN_TAG,
            factory::date("2024-02-01"),
            &[("#PQL0289", Some("Alice"))],
        )
        .build()
        .await?;
    let client = test_clash_client_without_token(&test);

    let database = build(&test, &client, options(false, true)).await.unwrap();

    let statuses: Vec<(&str, MembershipStatus)> = database
        .players
        .iter()
        .map(|p| (p.tag.as_str(), p.membership))
        .collect();
    assert!(statuses.contains(&("#PQL0289", MembershipStatus::Current)));
    assert!(statuses.contains(&("#Y9VJ2", MembershipStatus::Former)));
    assert!(statuses.contains(&("#RRCC9", MembershipStatus::Never)));
    for player in &database.players {
        assert_eq!(
            player.is_current_member,
            player.membership == MembershipStatus::Current
        );
    }

    Ok(())
}

/// Expect a failing live lookup to leave only that player on the placeholder name
#[tokio::test]
async fn api_failure_degrades_to_placeholder() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_player_tables()
        .with_note(TEST_CLAN_TAG, "#PQL0289", None, factory::at("2024-01-01"))
        .with_note(TEST_CLAN_TAG, "#Q8PL2", None, factory::at("2024-01-02"))
        .with_player_error_endpoint("PQL0289", 500, 1)
        .with_player_endpoint("Q8PL2", "Bob Live", 1)
        .build()
        .await?;
    let client = test_clash_client(&test);

    let database = build(&test, &client, options(false, false)).await.unwrap();

    assert_eq!(find(&database, "#PQL0289").unwrap().name, "Unknown Player");
    assert_eq!(find(&database, "#Q8PL2").unwrap().name, "Bob Live");
    test.assert_mocks();

    Ok(())
}

/// Expect degraded snapshot and alias tables not to fail the request
#[tokio::test]
async fn missing_auxiliary_tables_degrade() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PlayerNote)
        .with_table(entity::prelude::PlayerWarning)
        .with_table(entity::prelude::PlayerTenureAction)
        .with_table(entity::prelude::PlayerDepartureAction)
        .with_note(TEST_CLAN_TAG, "#PQL0289", Some("Alice"), factory::at("2024-01-01"))
        .build()
        .await?;
    let client = test_clash_client_without_token(&test);

    let database = build(&test, &client, options(false, true)).await.unwrap();

    assert_eq!(database.players.len(), 1);
    assert_eq!(database.players[0].name, "Alice");
    assert_eq!(database.players[0].membership, MembershipStatus::Never);
    assert_eq!(database.summary.latest_snapshot_date, None);

    Ok(())
}

/// Expect a seed fetch failure to fail the request
#[tokio::test]
async fn seed_failure_fails_request() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::PlayerNote)?;
    let client = test_clash_client_without_token(&test);

    let result = build(&test, &client, options(false, false)).await;

    assert!(matches!(result, Err(PlayerError::RecordFetch { .. })));

    Ok(())
}
