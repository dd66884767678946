use swiss_core::{PairingError, PlayerId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("Unknown player: {id}")]
    UnknownPlayer { id: PlayerId },

    #[error("Player {id} cannot play against themselves")]
    SelfMatch { id: PlayerId },

    #[error("Pairing failed: {0}")]
    Pairing(#[from] PairingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse event file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TournamentError>;
