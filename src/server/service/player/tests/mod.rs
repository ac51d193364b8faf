mod get_player_database;

use clanboard_test_utils::prelude::*;

use super::*;
use crate::server::util::test::{test_clash_client, test_clash_client_without_token, test_settings};

fn tag(raw: &str) -> PlayerTag {
    PlayerTag::normalize(raw).unwrap()
}

fn clan() -> PlayerTag {
    tag(TEST_CLAN_TAG)
}
