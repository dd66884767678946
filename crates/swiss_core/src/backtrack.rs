//! Exhaustive search for a round without repeat pairings.
//!
//! Players are taken in standings order. The highest unpaired player is
//! matched with the nearest unpaired player below them that they have not
//! met; on a dead end the search undoes the last choice and tries the next
//! candidate. The first complete matching found therefore keeps opponents as
//! close in the standings as the history allows.

use crate::history::OpponentHistory;
use crate::types::{Pairing, Player};

/// Find a repeat-free round for `players`, or `None` if the player count is
/// odd, no such round exists, or the search exceeds `limit` steps.
pub(crate) fn search(
    players: &[&Player],
    history: &OpponentHistory,
    limit: usize,
) -> Option<Vec<Pairing>> {
    if players.len() % 2 == 1 {
        return None;
    }

    let mut search = Search {
        players,
        history,
        partner: vec![None; players.len()],
        steps: 0,
        limit,
    };
    if !search.extend() {
        tracing::debug!(steps = search.steps, "backtracking found no repeat-free round");
        return None;
    }
    tracing::debug!(steps = search.steps, "backtracking found a repeat-free round");

    let pairings = search
        .partner
        .iter()
        .enumerate()
        .filter_map(|(i, partner)| match partner {
            Some(j) if i < *j => Some(Pairing::new(players[i], players[*j])),
            _ => None,
        })
        .collect();
    Some(pairings)
}

struct Search<'a> {
    players: &'a [&'a Player],
    history: &'a OpponentHistory,
    partner: Vec<Option<usize>>,
    steps: usize,
    limit: usize,
}

impl Search<'_> {
    fn extend(&mut self) -> bool {
        let Some(i) = self.partner.iter().position(Option::is_none) else {
            return true;
        };

        for j in (i + 1)..self.players.len() {
            if self.steps >= self.limit {
                return false;
            }
            if self.partner[j].is_some()
                || self.history.have_met(self.players[i].id, self.players[j].id)
            {
                continue;
            }

            self.steps += 1;
            self.partner[i] = Some(j);
            self.partner[j] = Some(i);
            if self.extend() {
                return true;
            }
            self.partner[i] = None;
            self.partner[j] = None;
        }

        false
    }
}
