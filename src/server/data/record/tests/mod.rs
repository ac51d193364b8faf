
use clanboard_test_utils::prelude::*;

use crate::server::util::tag::PlayerTag;

fn tag(raw: &str) -> PlayerTag {
    PlayerTag::normalize(raw).unwrap()
}
