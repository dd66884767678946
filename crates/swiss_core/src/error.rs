use thiserror::Error;

use crate::types::PlayerId;

/// Failures reported by the pairing engine.
///
/// An empty standings table is not an error: it pairs to an empty round.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairingError {
    #[error("odd number of players: player {unpaired} has no opponent left to draw")]
    InsufficientPlayers { unpaired: PlayerId },

    #[error("opponent history links player {player} to {opponent}, which is not a valid opponent in these standings")]
    InconsistentOpponentData { player: PlayerId, opponent: PlayerId },

    #[error("player {player} appears more than once in the standings")]
    DuplicatePlayer { player: PlayerId },
}

pub type Result<T> = std::result::Result<T, PairingError>;
