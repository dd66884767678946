//! In-memory player registry and match log
//!
//! Provides the standings table and opponent history the pairing engine
//! consumes. Nothing is written to disk.

use swiss_core::{
    sort_standings, MatchRecord, OpponentHistory, Pairing, PairingEngine, Player, PlayerId,
    StandingRow,
};
use tracing::debug;

use crate::error::{Result, TournamentError};
use crate::event::EventFile;

/// Default name for tournaments created without one
pub const DEFAULT_NAME: &str = "Swiss tournament";

/// Registered players and every reported match
#[derive(Debug, Clone)]
pub struct Tournament {
    /// Name/description of the tournament
    pub name: String,
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
    /// Serial id for the next registration; never reused after a reset
    next_id: PlayerId,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

impl Tournament {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            players: Vec::new(),
            matches: Vec::new(),
            next_id: 1,
        }
    }

    /// Replay an event file: register its players in order, then report its
    /// matches. Player ids are the 1-based registration order.
    pub fn from_event(event: &EventFile) -> Result<Self> {
        let mut tournament = Self::new(event.name.as_deref().unwrap_or(DEFAULT_NAME));
        for entry in &event.players {
            tournament.register_player(&entry.name);
        }
        for entry in &event.matches {
            tournament.report_match(entry.winner, entry.challenger, entry.tie)?;
        }
        Ok(tournament)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Register a player and return their id. Names need not be unique.
    pub fn register_player(&mut self, name: &str) -> PlayerId {
        let id = self.next_id;
        self.next_id += 1;
        self.players.push(Player::new(id, name));
        debug!(id, name, "registered player");
        id
    }

    pub fn count_players(&self) -> usize {
        self.players.len()
    }

    /// Record the outcome of a match. With `tie` set, neither side is
    /// credited a win.
    pub fn report_match(&mut self, winner: PlayerId, challenger: PlayerId, tie: bool) -> Result<()> {
        if winner == challenger {
            return Err(TournamentError::SelfMatch { id: winner });
        }
        for id in [winner, challenger] {
            if !self.is_registered(id) {
                return Err(TournamentError::UnknownPlayer { id });
            }
        }

        self.matches.push(MatchRecord {
            winner_id: winner,
            challenger_id: challenger,
            tie,
        });
        debug!(winner, challenger, tie, "reported match");
        Ok(())
    }

    /// Remove all match records.
    pub fn delete_matches(&mut self) {
        self.matches.clear();
    }

    /// Remove all players, and with them all matches.
    pub fn delete_players(&mut self) {
        self.matches.clear();
        self.players.clear();
    }

    /// Standings for every registered player, best record first.
    pub fn player_standings(&self) -> Vec<StandingRow> {
        let mut rows: Vec<StandingRow> = self
            .players
            .iter()
            .map(|player| {
                let mut row = StandingRow::new(player.id, &player.name, 0, 0, 0);
                for m in self.matches.iter().filter(|m| m.involves(player.id)) {
                    row.matches += 1;
                    if m.tie {
                        row.ties += 1;
                    } else if m.winner_id == player.id {
                        row.wins += 1;
                    }
                }
                row
            })
            .collect();
        sort_standings(&mut rows);
        rows
    }

    /// Opponents each player has already faced.
    pub fn player_opponents(&self) -> OpponentHistory {
        OpponentHistory::from_matches(&self.matches)
    }

    /// Pairings for the next round from the current standings.
    pub fn swiss_pairings(&self, engine: &PairingEngine) -> Result<Vec<Pairing>> {
        let pairings = engine.pair_standings(&self.player_standings(), &self.player_opponents())?;
        Ok(pairings)
    }

    fn is_registered(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
