//! Alias graph over "same person" links.
//!
//! Keeps the direct, symmetric adjacency of every live link and the connected components of
//! the whole edge set, so that chains of links (A↔B, B↔C) make every account of one person
//! discoverable from any of the others.

use std::collections::{BTreeSet, HashMap, VecDeque};

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::alias_link::AliasLinkRepository, model::db::AliasLinkModel, util::tag::PlayerTag,
};

/// Upper bound on link lookups when following chains outward from the seed tags.
const MAX_DISCOVERY_ROUNDS: usize = 16;

#[derive(Clone, Debug, Default)]
pub struct AliasGraph {
    adjacency: HashMap<PlayerTag, BTreeSet<PlayerTag>>,
    component_ids: HashMap<PlayerTag, usize>,
    components: Vec<BTreeSet<PlayerTag>>,
}

impl AliasGraph {
    /// Builds the graph from link rows.
    ///
    /// Links with an unparseable side and self-links are skipped.
    pub fn build<'l>(links: impl IntoIterator<Item = &'l AliasLinkModel>) -> Self {
        Self::from_pairs(
            links
                .into_iter()
                .map(|link| (link.player_tag_1.as_str(), link.player_tag_2.as_str())),
        )
    }

    pub fn from_pairs<'p>(pairs: impl IntoIterator<Item = (&'p str, &'p str)>) -> Self {
        let mut adjacency: HashMap<PlayerTag, BTreeSet<PlayerTag>> = HashMap::new();

        for (raw_a, raw_b) in pairs {
            let (Some(a), Some(b)) = (PlayerTag::normalize(raw_a), PlayerTag::normalize(raw_b))
            else {
                tracing::debug!(tag_1 = %raw_a, tag_2 = %raw_b, "Skipping alias link with unparseable tag");
                continue;
            };

            if a == b {
                continue;
            }

            adjacency.entry(a.clone()).or_default().insert(b.clone());
            adjacency.entry(b).or_default().insert(a);
        }

        let mut graph = Self {
            adjacency,
            ..Default::default()
        };
        graph.compute_components();
        graph
    }

    fn compute_components(&mut self) {
        let mut starts: Vec<&PlayerTag> = self.adjacency.keys().collect();
        starts.sort();

        for start in starts {
            if self.component_ids.contains_key(start) {
                continue;
            }

            let id = self.components.len();
            let mut component = BTreeSet::new();
            let mut queue = VecDeque::from([start.clone()]);

            while let Some(tag) = queue.pop_front() {
                if !component.insert(tag.clone()) {
                    continue;
                }
                self.component_ids.insert(tag.clone(), id);

                if let Some(neighbours) = self.adjacency.get(&tag) {
                    queue.extend(neighbours.iter().filter(|n| !component.contains(*n)).cloned());
                }
            }

            self.components.push(component);
        }
    }

    /// Tags directly linked to `tag` (one hop).
    pub fn linked(&self, tag: &PlayerTag) -> Option<&BTreeSet<PlayerTag>> {
        self.adjacency.get(tag)
    }

    /// Every tag in the same connected component as `tag`, including `tag` itself.
    ///
    /// A tag without links is its own single-element component.
    pub fn component_of(&self, tag: &PlayerTag) -> BTreeSet<PlayerTag> {
        match self.component_ids.get(tag) {
            Some(&id) => self.components[id].clone(),
            None => BTreeSet::from([tag.clone()]),
        }
    }

    /// Every other account of the person controlling `tag`.
    pub fn linked_accounts(&self, tag: &PlayerTag) -> Vec<PlayerTag> {
        match self.component_ids.get(tag) {
            Some(&id) => self.components[id]
                .iter()
                .filter(|linked| *linked != tag)
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Every tag that appears in at least one link.
    pub fn tags(&self) -> impl Iterator<Item = &PlayerTag> {
        self.adjacency.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Loads every live link reachable from the seed tags and builds the graph.
///
/// Links touching the seeds are fetched first, then links touching each newly discovered tag,
/// until no new tags appear or the round limit is hit.
pub async fn discover_alias_graph(
    db: &DatabaseConnection,
    seeds: &BTreeSet<PlayerTag>,
) -> Result<AliasGraph, DbErr> {
    let repo = AliasLinkRepository::new(db);

    let mut links: HashMap<i32, AliasLinkModel> = HashMap::new();
    let mut seen: BTreeSet<PlayerTag> = seeds.clone();
    let mut frontier: Vec<PlayerTag> = seeds.iter().cloned().collect();

    for round in 0..MAX_DISCOVERY_ROUNDS {
        if frontier.is_empty() {
            break;
        }

        let touching = repo.get_live_touching(&frontier).await?;
        frontier.clear();

        for link in touching {
            for raw in [&link.player_tag_1, &link.player_tag_2] {
                if let Some(tag) = PlayerTag::normalize(raw) {
                    if seen.insert(tag.clone()) {
                        frontier.push(tag);
                    }
                }
            }
            links.entry(link.id).or_insert(link);
        }

        if round + 1 == MAX_DISCOVERY_ROUNDS && !frontier.is_empty() {
            tracing::warn!(
                pending = frontier.len(),
                "Alias link discovery stopped after {} rounds",
                MAX_DISCOVERY_ROUNDS
            );
        }
    }

    Ok(AliasGraph::build(links.values()))
}


#[cfg(test)]
mod discovery_tests {
    use clanboard_test_utils::prelude::*;

    use super::*;

    fn tag(raw: &str) -> PlayerTag {
        PlayerTag::normalize(raw).unwrap()
    }

    /// Expect links reachable through a chain to be discovered from one seed
    #[tokio::test]
    async fn follows_link_chains() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_player_tables()
            .with_alias_link(TEST_CLAN_TAG, "#PQL0289", "#Q8PL2")
            .with_alias_link(TEST_OTHER_CLAN_TAG, "#Q8PL2", "#Y9VJ2")
            .with_alias_link(TEST_CLAN_TAG, "#RRCC9", "#UUGG8")
            .build()
            .await?;

        let graph =
            discover_alias_graph(&test.state.db, &BTreeSet::from([tag("#PQL0289")])).await?;

        assert_eq!(
            graph.component_of(&tag("#PQL0289")),
            BTreeSet::from([tag("#PQL0289"), tag("#Q8PL2"), tag("#Y9VJ2")])
        );
        assert!(graph.linked(&tag("#RRCC9")).is_none());

        Ok(())
    }

    /// Expect removed links to break the chain
    #[tokio::test]
    async fn ignores_removed_links() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_player_tables()
            .with_alias_link(TEST_CLAN_TAG, "#PQL0289", "#Q8PL2")
            .with_removed_alias_link(TEST_CLAN_TAG, "#Q8PL2", "#Y9VJ2")
            .build()
            .await?;

        let graph =
            discover_alias_graph(&test.state.db, &BTreeSet::from([tag("#PQL0289")])).await?;

        assert_eq!(graph.linked_accounts(&tag("#PQL0289")), vec![tag("#Q8PL2")]);

        Ok(())
    }
}
