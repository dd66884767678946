//! Value types shared by the partitioner, the pairing engine and providers.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Unique player identifier, assigned at registration.
pub type PlayerId = u32;

/// A registered player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

/// A reported match. A tie counts as a played match for both sides and as a
/// win for neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner_id: PlayerId,
    pub challenger_id: PlayerId,
    #[serde(default)]
    pub tie: bool,
}

impl MatchRecord {
    pub fn decisive(winner_id: PlayerId, challenger_id: PlayerId) -> Self {
        Self {
            winner_id,
            challenger_id,
            tie: false,
        }
    }

    pub fn tied(a: PlayerId, b: PlayerId) -> Self {
        Self {
            winner_id: a,
            challenger_id: b,
            tie: true,
        }
    }

    pub fn involves(&self, id: PlayerId) -> bool {
        self.winner_id == id || self.challenger_id == id
    }
}

/// The `(wins, matches, ties)` triple that decides standing-group membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub matches: u32,
    pub ties: u32,
}

/// One row of the standings table, derived from all matches of a player.
///
/// Losses are implicit: `matches = wins + losses + ties`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches: u32,
    pub ties: u32,
}

impl StandingRow {
    pub fn new(player_id: PlayerId, name: &str, wins: u32, matches: u32, ties: u32) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            wins,
            matches,
            ties,
        }
    }

    pub fn record(&self) -> Record {
        Record {
            wins: self.wins,
            matches: self.matches,
            ties: self.ties,
        }
    }

    pub fn losses(&self) -> u32 {
        self.matches.saturating_sub(self.wins + self.ties)
    }

    /// Canonical standings order: wins desc, ties desc, matches asc, id asc.
    pub fn ranking_cmp(&self, other: &Self) -> Ordering {
        other
            .wins
            .cmp(&self.wins)
            .then_with(|| other.ties.cmp(&self.ties))
            .then_with(|| self.matches.cmp(&other.matches))
            .then_with(|| self.player_id.cmp(&other.player_id))
    }
}

/// Sort rows into canonical standings order.
pub fn sort_standings(rows: &mut [StandingRow]) {
    rows.sort_by(StandingRow::ranking_cmp);
}

/// Players sharing one identical record, in standings order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingGroup {
    pub record: Record,
    pub players: Vec<Player>,
}

impl StandingGroup {
    pub fn new(record: Record) -> Self {
        Self {
            record,
            players: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }
}

/// One pairing for the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub player_id: PlayerId,
    pub player_name: String,
    pub opponent_id: PlayerId,
    pub opponent_name: String,
}

impl Pairing {
    pub fn new(player: &Player, opponent: &Player) -> Self {
        Self {
            player_id: player.id,
            player_name: player.name.clone(),
            opponent_id: opponent.id,
            opponent_name: opponent.name.clone(),
        }
    }

    pub fn involves(&self, id: PlayerId) -> bool {
        self.player_id == id || self.opponent_id == id
    }

    /// Both ids, smaller first, for order-insensitive comparison.
    pub fn key(&self) -> (PlayerId, PlayerId) {
        if self.player_id <= self.opponent_id {
            (self.player_id, self.opponent_id)
        } else {
            (self.opponent_id, self.player_id)
        }
    }
}
