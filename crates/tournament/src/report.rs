//! Text and JSON reports for standings and pairings

use swiss_core::{Pairing, StandingRow};

/// Render the standings table
pub fn standings_report(name: &str, standings: &[StandingRow]) -> String {
    let mut report = String::new();
    report.push_str(&format!("=== Standings: {} ===\n\n", name));
    report.push_str(&format!(
        "{:>4} {:>5} {:<30} {:>3} {:>3} {:>3} {:>3}\n",
        "#", "ID", "Player", "W", "T", "L", "M"
    ));
    report.push_str(&"-".repeat(58));
    report.push('\n');

    for (rank, row) in standings.iter().enumerate() {
        report.push_str(&format!(
            "{:>4} {:>5} {:<30} {:>3} {:>3} {:>3} {:>3}\n",
            rank + 1,
            row.player_id,
            row.name,
            row.wins,
            row.ties,
            row.losses(),
            row.matches
        ));
    }

    report
}

/// Render the pairings for the next round
pub fn pairings_report(name: &str, pairings: &[Pairing]) -> String {
    let mut report = String::new();
    report.push_str(&format!("=== Pairings: {} ===\n\n", name));
    if pairings.is_empty() {
        report.push_str("No players to pair.\n");
        return report;
    }

    report.push_str(&format!(
        "{:>5} {:<30} vs {:>5} {:<30}\n",
        "ID", "Player", "ID", "Opponent"
    ));
    report.push_str(&"-".repeat(75));
    report.push('\n');

    for pairing in pairings {
        report.push_str(&format!(
            "{:>5} {:<30} vs {:>5} {:<30}\n",
            pairing.player_id, pairing.player_name, pairing.opponent_id, pairing.opponent_name
        ));
    }

    report
}

/// Pretty-printed JSON for any serializable report payload
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
