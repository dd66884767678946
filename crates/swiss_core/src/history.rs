//! Opponent history: who has already played whom.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

use crate::types::{MatchRecord, PlayerId};

/// Symmetric map from a player to every opponent they have faced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentHistory {
    opponents: HashMap<PlayerId, HashSet<PlayerId>>,
}

impl OpponentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from reported matches. Ties count as having met.
    pub fn from_matches<'a, I>(matches: I) -> Self
    where
        I: IntoIterator<Item = &'a MatchRecord>,
    {
        let mut history = Self::new();
        for m in matches {
            history.record(m.winner_id, m.challenger_id);
        }
        history
    }

    /// Build from an explicit mapping, adding the reverse edge of every entry.
    pub fn from_map(map: &HashMap<PlayerId, HashSet<PlayerId>>) -> Self {
        let mut history = Self::new();
        for (&player, opponents) in map {
            history.opponents.entry(player).or_default();
            for &opponent in opponents {
                history.record(player, opponent);
            }
        }
        history
    }

    /// Note that `a` and `b` have met.
    pub fn record(&mut self, a: PlayerId, b: PlayerId) {
        self.opponents.entry(a).or_default().insert(b);
        self.opponents.entry(b).or_default().insert(a);
    }

    pub fn have_met(&self, a: PlayerId, b: PlayerId) -> bool {
        self.opponents.get(&a).is_some_and(|set| set.contains(&b))
            || self.opponents.get(&b).is_some_and(|set| set.contains(&a))
    }

    /// Opponents of `id`, empty if the player has no history.
    pub fn opponents_of(&self, id: PlayerId) -> impl Iterator<Item = PlayerId> + '_ {
        self.opponents.get(&id).into_iter().flatten().copied()
    }

    /// Every id mentioned in the history, as a key or as an opponent.
    pub fn player_ids(&self) -> BTreeSet<PlayerId> {
        self.opponents
            .iter()
            .flat_map(|(&id, set)| std::iter::once(id).chain(set.iter().copied()))
            .collect()
    }

    /// Iterate `(player, opponents)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &HashSet<PlayerId>)> {
        self.opponents.iter().map(|(&id, set)| (id, set))
    }

    /// Number of players with at least one entry.
    pub fn len(&self) -> usize {
        self.opponents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opponents.is_empty()
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod history_tests;
