use super::*;
use crate::config::DrawStrategy;
use crate::types::{sort_standings, MatchRecord};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

fn row(id: u32, wins: u32, matches: u32, ties: u32) -> StandingRow {
    StandingRow::new(id, &format!("Player {id}"), wins, matches, ties)
}

fn fresh(ids: &[u32]) -> Vec<StandingRow> {
    ids.iter().map(|&id| row(id, 0, 0, 0)).collect()
}

fn history(pairs: &[(u32, u32)]) -> OpponentHistory {
    let matches: Vec<_> = pairs.iter().map(|&(a, b)| MatchRecord::decisive(a, b)).collect();
    OpponentHistory::from_matches(&matches)
}

fn keys(pairings: &[Pairing]) -> Vec<(u32, u32)> {
    let mut keys: Vec<_> = pairings.iter().map(Pairing::key).collect();
    keys.sort();
    keys
}

fn engine(repair: RepairPolicy) -> PairingEngine {
    PairingEngine::new(PairingConfig::default().with_repair(repair))
}

fn assert_complete(standings: &[StandingRow], pairings: &[Pairing]) {
    assert_eq!(pairings.len() * 2, standings.len());
    for row in standings {
        let count = pairings.iter().filter(|p| p.involves(row.player_id)).count();
        assert_eq!(count, 1, "Player {} should be paired exactly once", row.player_id);
    }
    for pairing in pairings {
        assert_ne!(pairing.player_id, pairing.opponent_id, "Self pairing");
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_empty_standings_pair_to_empty_round() {
    let pairings = compute_pairings(&[], &OpponentHistory::new()).unwrap();
    assert!(pairings.is_empty());
}

#[test]
fn test_two_players_no_history() {
    let standings = vec![row(1, 0, 0, 0), row(2, 0, 0, 0)];
    let pairings = compute_pairings(&standings, &OpponentHistory::new()).unwrap();

    assert_eq!(pairings.len(), 1);
    assert_eq!(pairings[0].player_id, 1);
    assert_eq!(pairings[0].player_name, "Player 1");
    assert_eq!(pairings[0].opponent_id, 2);
    assert_eq!(pairings[0].opponent_name, "Player 2");
}

#[test]
fn test_tied_top_group_pairs_within_group() {
    // 1 beat 2, 3 beat 4
    let standings = vec![row(1, 1, 1, 0), row(3, 1, 1, 0), row(2, 0, 1, 0), row(4, 0, 1, 0)];
    let pairings = compute_pairings(&standings, &history(&[(1, 2), (3, 4)])).unwrap();

    assert_eq!(keys(&pairings), vec![(1, 3), (2, 4)]);
}

#[test]
fn test_conflict_repair_swaps_opponent() {
    let standings = fresh(&[1, 2, 3, 4]);
    let pairings = compute_pairings(&standings, &history(&[(1, 2)])).unwrap();

    assert_complete(&standings, &pairings);
    assert_eq!(keys(&pairings), vec![(1, 3), (2, 4)]);
}

#[test]
fn test_odd_leading_group_merges_down() {
    let standings = vec![row(1, 1, 1, 0), row(2, 0, 0, 0), row(3, 0, 0, 0), row(4, 0, 0, 0)];
    let pairings = compute_pairings(&standings, &OpponentHistory::new()).unwrap();

    assert_complete(&standings, &pairings);
    assert_eq!(pairings[0].player_id, 1);
    assert!([2, 3, 4].contains(&pairings[0].opponent_id));
}

#[test]
fn test_pairs_stay_within_their_group() {
    let standings = vec![row(4, 1, 1, 0), row(2, 1, 1, 0), row(1, 0, 1, 0), row(3, 0, 1, 0)];
    let pairings = compute_pairings(&standings, &OpponentHistory::new()).unwrap();

    assert_eq!(keys(&pairings), vec![(1, 3), (2, 4)]);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_odd_player_count_is_an_error() {
    let result = compute_pairings(&fresh(&[1, 2, 3]), &OpponentHistory::new());
    assert_eq!(result, Err(PairingError::InsufficientPlayers { unpaired: 3 }));
}

#[test]
fn test_single_player_is_an_error() {
    let result = compute_pairings(&fresh(&[9]), &OpponentHistory::new());
    assert_eq!(result, Err(PairingError::InsufficientPlayers { unpaired: 9 }));
}

#[test]
fn test_unknown_opponent_is_rejected() {
    let result = compute_pairings(&fresh(&[1, 2]), &history(&[(1, 99)]));
    assert_eq!(
        result,
        Err(PairingError::InconsistentOpponentData {
            player: 1,
            opponent: 99
        })
    );
}

#[test]
fn test_self_opponent_is_rejected() {
    let mut map = HashMap::new();
    map.insert(2, HashSet::from([2]));
    let result = compute_pairings(&fresh(&[1, 2]), &OpponentHistory::from_map(&map));
    assert_eq!(
        result,
        Err(PairingError::InconsistentOpponentData {
            player: 2,
            opponent: 2
        })
    );
}

#[test]
fn test_duplicate_player_is_rejected() {
    let result = compute_pairings(&fresh(&[1, 2, 2, 3]), &OpponentHistory::new());
    assert_eq!(result, Err(PairingError::DuplicatePlayer { player: 2 }));
}

#[test]
fn test_backtrack_with_odd_count_is_an_error() {
    let result = engine(RepairPolicy::backtrack()).pair_standings(&fresh(&[1, 2, 3]), &OpponentHistory::new());
    assert!(matches!(result, Err(PairingError::InsufficientPlayers { .. })));
}

// =============================================================================
// Repair policies
// =============================================================================

#[test]
fn test_single_swap_accepts_second_conflict() {
    // 1 has met both 2 and 3; the single swap lands on 3 and keeps it.
    let standings = fresh(&[1, 2, 3, 4]);
    let pairings = engine(RepairPolicy::SingleSwap)
        .pair_standings(&standings, &history(&[(1, 2), (1, 3)]))
        .unwrap();

    assert_complete(&standings, &pairings);
    assert_eq!(keys(&pairings), vec![(1, 3), (2, 4)]);
}

#[test]
fn test_scan_pool_finds_unplayed_opponent() {
    let standings = fresh(&[1, 2, 3, 4]);
    let pairings = engine(RepairPolicy::ScanPool)
        .pair_standings(&standings, &history(&[(1, 2), (1, 3)]))
        .unwrap();

    assert_eq!(keys(&pairings), vec![(1, 4), (2, 3)]);
}

#[test]
fn test_conflict_with_empty_pool_keeps_candidate() {
    let standings = fresh(&[1, 2]);
    for policy in [RepairPolicy::SingleSwap, RepairPolicy::ScanPool, RepairPolicy::backtrack()] {
        let pairings = engine(policy).pair_standings(&standings, &history(&[(1, 2)])).unwrap();
        assert_eq!(keys(&pairings), vec![(1, 2)]);
    }
}

#[test]
fn test_backtrack_avoids_repeat_greedy_cannot() {
    let standings = fresh(&[1, 2, 3, 4, 5, 6]);
    let met = history(&[(5, 6)]);

    let greedy = engine(RepairPolicy::ScanPool).pair_standings(&standings, &met).unwrap();
    assert!(keys(&greedy).contains(&(5, 6)), "Greedy pool pairing gets stuck on 5-6");

    let searched = engine(RepairPolicy::backtrack()).pair_standings(&standings, &met).unwrap();
    assert_complete(&standings, &searched);
    assert_eq!(keys(&searched), vec![(1, 2), (3, 5), (4, 6)]);
}

#[test]
fn test_backtrack_budget_exhausted_falls_back() {
    let standings = fresh(&[1, 2, 3, 4, 5, 6]);
    let pairings = engine(RepairPolicy::Backtrack(0))
        .pair_standings(&standings, &history(&[(5, 6)]))
        .unwrap();

    assert_complete(&standings, &pairings);
    assert!(keys(&pairings).contains(&(5, 6)));
}

#[test]
fn test_backtrack_accepts_repeat_when_unavoidable() {
    // Everyone has met everyone: no repeat-free round exists.
    let standings = fresh(&[1, 2, 3, 4]);
    let met = history(&[(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)]);
    let pairings = engine(RepairPolicy::backtrack()).pair_standings(&standings, &met).unwrap();

    assert_complete(&standings, &pairings);
}

// =============================================================================
// Properties
// =============================================================================

/// Random standings of `n` players plus the history of one previous round in
/// which everyone played exactly one opponent.
fn random_round(rng: &mut StdRng, n: u32) -> (Vec<StandingRow>, OpponentHistory) {
    let mut ids: Vec<u32> = (1..=n).collect();
    ids.shuffle(rng);

    let mut matches = Vec::new();
    let mut standings = Vec::new();
    for pair in ids.chunks(2) {
        let (a, b) = (pair[0], pair[1]);
        if rng.gen_bool(0.2) {
            matches.push(MatchRecord::tied(a, b));
            standings.push(row(a, 0, 1, 1));
            standings.push(row(b, 0, 1, 1));
        } else {
            matches.push(MatchRecord::decisive(a, b));
            standings.push(row(a, 1, 1, 0));
            standings.push(row(b, 0, 1, 0));
        }
    }
    sort_standings(&mut standings);
    (standings, OpponentHistory::from_matches(&matches))
}

#[test]
fn test_every_policy_pairs_everyone_once() {
    let mut rng = StdRng::seed_from_u64(11);
    let policies = [RepairPolicy::SingleSwap, RepairPolicy::ScanPool, RepairPolicy::backtrack()];

    for _ in 0..100 {
        let n = rng.gen_range(1..=10) * 2;
        let (standings, met) = random_round(&mut rng, n);
        for policy in policies {
            for draw in [DrawStrategy::Ascending, DrawStrategy::Seeded(rng.gen())] {
                let engine = PairingEngine::new(PairingConfig { draw, repair: policy });
                let pairings = engine.pair_standings(&standings, &met).unwrap();
                assert_complete(&standings, &pairings);
            }
        }
    }
}

#[test]
fn test_backtrack_never_repeats_after_one_round() {
    let mut rng = StdRng::seed_from_u64(23);

    for _ in 0..100 {
        let n = rng.gen_range(2..=10) * 2;
        let (standings, met) = random_round(&mut rng, n);
        let pairings = engine(RepairPolicy::backtrack()).pair_standings(&standings, &met).unwrap();

        for pairing in &pairings {
            assert!(
                !met.have_met(pairing.player_id, pairing.opponent_id),
                "Repeat pairing {:?}",
                pairing.key()
            );
        }
    }
}

#[test]
fn test_seeded_draw_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(5);
    let (standings, met) = random_round(&mut rng, 16);

    for seed in [0, 1, 42, u64::MAX] {
        let engine = PairingEngine::new(PairingConfig::seeded(seed));
        let first = engine.pair_standings(&standings, &met).unwrap();
        let second = engine.pair_standings(&standings, &met).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_default_engine_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(99);
    let (standings, met) = random_round(&mut rng, 12);

    assert_eq!(
        compute_pairings(&standings, &met).unwrap(),
        compute_pairings(&standings, &met).unwrap()
    );
}
