//! Standing-group partitioner.
//!
//! Splits a standings table into groups of players with an identical
//! `(wins, matches, ties)` record. Groups come out in the order their record
//! first appears, so a table in canonical order yields the best group first.

use std::collections::HashMap;

use crate::types::{Player, Record, StandingGroup, StandingRow};

/// Partition `standings` into standing groups.
///
/// Every row lands in exactly one group. Rows sharing a record do not need to
/// be adjacent in the input; they join the group created by the first row
/// with that record.
pub fn partition_standings(standings: &[StandingRow]) -> Vec<StandingGroup> {
    let mut groups: Vec<StandingGroup> = Vec::new();
    let mut index_of: HashMap<Record, usize> = HashMap::new();

    for row in standings {
        let record = row.record();
        let idx = *index_of.entry(record).or_insert_with(|| {
            groups.push(StandingGroup::new(record));
            groups.len() - 1
        });
        groups[idx].players.push(Player::new(row.player_id, &row.name));
    }

    groups
}

#[cfg(test)]
#[path = "partition_tests.rs"]
mod partition_tests;
