//! Declarative event files
//!
//! An event file lists registered players and reported matches and may carry
//! a `[pairing]` table configuring the engine. It is read-only input; the
//! tournament state is never written back.

use serde::{Deserialize, Serialize};
use std::path::Path;
use swiss_core::{PairingConfig, PlayerId};

/// Contents of an event file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventFile {
    #[serde(default)]
    pub name: Option<String>,
    /// Players in registration order; the first one gets id 1
    #[serde(default)]
    pub players: Vec<PlayerEntry>,
    #[serde(default)]
    pub matches: Vec<MatchEntry>,
    #[serde(default)]
    pub pairing: PairingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub winner: PlayerId,
    pub challenger: PlayerId,
    #[serde(default)]
    pub tie: bool,
}

impl EventFile {
    /// Parse an event file from TOML text
    pub fn parse(contents: &str) -> crate::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load an event file from disk
    pub fn load(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod event_tests;
