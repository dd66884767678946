//! Pending pool of players waiting for an opponent.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::DrawStrategy;
use crate::types::Player;

/// Working set of unpaired candidates, kept sorted by player id so that every
/// draw depends only on the pool contents and the strategy.
#[derive(Debug)]
pub(crate) struct PendingPool {
    players: Vec<Player>,
    rng: Option<StdRng>,
}

impl PendingPool {
    pub fn new(strategy: DrawStrategy) -> Self {
        let rng = match strategy {
            DrawStrategy::Ascending => None,
            DrawStrategy::Seeded(seed) => Some(StdRng::seed_from_u64(seed)),
        };
        Self {
            players: Vec::new(),
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Merge a group's players into the pool.
    pub fn extend(&mut self, players: &[Player]) {
        for player in players {
            self.put_back(player.clone());
        }
    }

    /// Return a player to the pool.
    pub fn put_back(&mut self, player: Player) {
        let pos = self.players.partition_point(|p| p.id < player.id);
        self.players.insert(pos, player);
    }

    /// Remove the next player in draw order.
    pub fn draw(&mut self) -> Option<Player> {
        if self.players.is_empty() {
            return None;
        }
        let idx = match self.rng.as_mut() {
            Some(rng) => rng.gen_range(0..self.players.len()),
            None => 0,
        };
        Some(self.players.remove(idx))
    }

    /// Remove the first player in draw order that satisfies `accept`.
    ///
    /// With a seeded strategy every acceptable player is equally likely.
    pub fn draw_where<F>(&mut self, accept: F) -> Option<Player>
    where
        F: Fn(&Player) -> bool,
    {
        let eligible: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| accept(p))
            .map(|(i, _)| i)
            .collect();
        if eligible.is_empty() {
            return None;
        }
        let pick = match self.rng.as_mut() {
            Some(rng) => eligible[rng.gen_range(0..eligible.len())],
            None => eligible[0],
        };
        Some(self.players.remove(pick))
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod pool_tests;
