//! Swiss pairing engine.
//!
//! Standing groups are drained best-first through a pending pool. A player is
//! drawn, then an opponent; whenever the pool runs dry the next group is
//! merged in, which is how a leftover player from an odd-sized group ends up
//! facing the best of the group below. A drawn opponent the player has
//! already met is replaced according to the configured [`RepairPolicy`].

use std::collections::HashSet;
use std::slice::Iter;

use tracing::{debug, warn};

use crate::backtrack;
use crate::config::{PairingConfig, RepairPolicy};
use crate::error::{PairingError, Result};
use crate::history::OpponentHistory;
use crate::partition::partition_standings;
use crate::pool::PendingPool;
use crate::types::{Pairing, Player, StandingGroup, StandingRow};

/// Computes the pairings for the next round. Holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct PairingEngine {
    config: PairingConfig,
}

impl PairingEngine {
    pub fn new(config: PairingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PairingConfig {
        &self.config
    }

    /// Partition a standings table and pair it.
    pub fn pair_standings(
        &self,
        standings: &[StandingRow],
        history: &OpponentHistory,
    ) -> Result<Vec<Pairing>> {
        self.pair_groups(&partition_standings(standings), history)
    }

    /// Pair already partitioned standing groups, best group first.
    ///
    /// Every player appears in exactly one pairing. An odd player count
    /// fails with [`PairingError::InsufficientPlayers`].
    pub fn pair_groups(
        &self,
        groups: &[StandingGroup],
        history: &OpponentHistory,
    ) -> Result<Vec<Pairing>> {
        validate(groups, history)?;

        match self.config.repair {
            RepairPolicy::Backtrack(limit) => {
                let ordered: Vec<&Player> = groups.iter().flat_map(|g| g.players.iter()).collect();
                if let Some(pairings) = backtrack::search(&ordered, history, limit) {
                    return Ok(pairings);
                }
                self.pool_pairing(groups, history, RepairPolicy::ScanPool)
            }
            policy => self.pool_pairing(groups, history, policy),
        }
    }

    fn pool_pairing(
        &self,
        groups: &[StandingGroup],
        history: &OpponentHistory,
        policy: RepairPolicy,
    ) -> Result<Vec<Pairing>> {
        let total: usize = groups.iter().map(StandingGroup::len).sum();
        let mut pairings = Vec::with_capacity(total / 2);
        let mut pool = PendingPool::new(self.config.draw);
        let mut remaining = groups.iter();

        refill(&mut pool, &mut remaining);
        while let Some(player) = pool.draw() {
            refill(&mut pool, &mut remaining);
            let Some(candidate) = pool.draw() else {
                return Err(PairingError::InsufficientPlayers {
                    unpaired: player.id,
                });
            };
            refill(&mut pool, &mut remaining);

            let opponent = if history.have_met(player.id, candidate.id) {
                repair(&mut pool, history, &player, candidate, policy)
            } else {
                candidate
            };

            if history.have_met(player.id, opponent.id) {
                warn!(
                    player = player.id,
                    opponent = opponent.id,
                    "no unplayed opponent available, accepting a repeat pairing"
                );
            }
            debug!(player = player.id, opponent = opponent.id, "paired");
            pairings.push(Pairing::new(&player, &opponent));

            refill(&mut pool, &mut remaining);
        }

        Ok(pairings)
    }
}

/// Pair a standings table with the default engine.
pub fn compute_pairings(
    standings: &[StandingRow],
    opponents: &OpponentHistory,
) -> Result<Vec<Pairing>> {
    PairingEngine::default().pair_standings(standings, opponents)
}

/// Merge groups into the pool while it is empty and groups remain.
fn refill(pool: &mut PendingPool, remaining: &mut Iter<'_, StandingGroup>) {
    while pool.is_empty() {
        let Some(group) = remaining.next() else {
            return;
        };
        pool.extend(&group.players);
        debug!(
            wins = group.record.wins,
            matches = group.record.matches,
            ties = group.record.ties,
            pool = pool.len(),
            "merged standing group into pool"
        );
    }
}

/// Replace `candidate`, whom `player` has already met. Returns the opponent
/// to use; `candidate` goes back to the pool if it was replaced.
fn repair(
    pool: &mut PendingPool,
    history: &OpponentHistory,
    player: &Player,
    candidate: Player,
    policy: RepairPolicy,
) -> Player {
    let replacement = match policy {
        RepairPolicy::SingleSwap => pool.draw(),
        RepairPolicy::ScanPool | RepairPolicy::Backtrack(_) => {
            pool.draw_where(|p| !history.have_met(player.id, p.id))
        }
    };

    match replacement {
        Some(replacement) => {
            pool.put_back(candidate);
            replacement
        }
        None => candidate,
    }
}

fn validate(groups: &[StandingGroup], history: &OpponentHistory) -> Result<()> {
    let mut known = HashSet::new();
    for player in groups.iter().flat_map(|g| g.players.iter()) {
        if !known.insert(player.id) {
            return Err(PairingError::DuplicatePlayer { player: player.id });
        }
    }

    let mut entries: Vec<_> = history.iter().collect();
    entries.sort_by_key(|(id, _)| *id);
    for (player, opponents) in entries {
        let mut opponents: Vec<_> = opponents.iter().copied().collect();
        opponents.sort_unstable();
        for opponent in opponents {
            if player == opponent || !known.contains(&player) || !known.contains(&opponent) {
                return Err(PairingError::InconsistentOpponentData { player, opponent });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
