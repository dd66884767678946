use super::*;
use crate::{Tournament, TournamentError};
use swiss_core::{DrawStrategy, RepairPolicy};

const CLUB_NIGHT: &str = r#"
name = "Club night"

[[players]]
name = "Twilight Sparkle"

[[players]]
name = "Fluttershy"

[[players]]
name = "Applejack"

[[players]]
name = "Pinkie Pie"

[[matches]]
winner = 1
challenger = 2

[[matches]]
winner = 3
challenger = 4
tie = true

[pairing]
draw = { seeded = 42 }
repair = "scan-pool"
"#;

#[test]
fn test_parse_full_event() {
    let event = EventFile::parse(CLUB_NIGHT).unwrap();

    assert_eq!(event.name.as_deref(), Some("Club night"));
    assert_eq!(event.players.len(), 4);
    assert_eq!(event.matches.len(), 2);
    assert!(!event.matches[0].tie);
    assert!(event.matches[1].tie);
    assert_eq!(event.pairing.draw, DrawStrategy::Seeded(42));
    assert_eq!(event.pairing.repair, RepairPolicy::ScanPool);
}

#[test]
fn test_missing_sections_use_defaults() {
    let event = EventFile::parse("[[players]]\nname = \"Solo\"\n").unwrap();

    assert!(event.name.is_none());
    assert!(event.matches.is_empty());
    assert_eq!(event.pairing, PairingConfig::default());
}

#[test]
fn test_backtrack_limit_from_file() {
    let event = EventFile::parse("[pairing]\nrepair = { backtrack = 500 }\n").unwrap();
    assert_eq!(event.pairing.repair, RepairPolicy::Backtrack(500));
    assert_eq!(event.pairing.draw, DrawStrategy::Ascending);
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let result = EventFile::parse("[[players]\nname = ");
    assert!(matches!(result, Err(TournamentError::Parse(_))));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = EventFile::load(Path::new("/nonexistent/event.toml"));
    assert!(matches!(result, Err(TournamentError::Io(_))));
}

#[test]
fn test_replay_into_tournament() {
    let event = EventFile::parse(CLUB_NIGHT).unwrap();
    let tournament = Tournament::from_event(&event).unwrap();

    assert_eq!(tournament.name, "Club night");
    assert_eq!(tournament.count_players(), 4);
    let top = &tournament.player_standings()[0];
    assert_eq!((top.player_id, top.wins), (1, 1));
}

#[test]
fn test_replay_rejects_unknown_player() {
    let event = EventFile::parse("[[players]]\nname = \"Solo\"\n\n[[matches]]\nwinner = 1\nchallenger = 2\n").unwrap();
    assert!(matches!(
        Tournament::from_event(&event),
        Err(TournamentError::UnknownPlayer { id: 2 })
    ));
}
