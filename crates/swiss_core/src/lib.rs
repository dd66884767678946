//! Swiss-system pairing core
//!
//! Given the current standings and the opponents every player has already
//! faced, produce the pairings for the next round:
//! - players are grouped by identical `(wins, matches, ties)` record
//! - groups are paired best-first, overflowing into the next group when a
//!   group runs out of players
//! - repeat opponents are avoided according to a [`RepairPolicy`]
//!
//! # Usage
//!
//! ```rust
//! use swiss_core::{compute_pairings, MatchRecord, OpponentHistory, StandingRow};
//!
//! let standings = vec![
//!     StandingRow::new(1, "Ada", 1, 1, 0),
//!     StandingRow::new(3, "Cy", 1, 1, 0),
//!     StandingRow::new(2, "Bo", 0, 1, 0),
//!     StandingRow::new(4, "Di", 0, 1, 0),
//! ];
//! let matches = [MatchRecord::decisive(1, 2), MatchRecord::decisive(3, 4)];
//! let history = OpponentHistory::from_matches(&matches);
//!
//! let pairings = compute_pairings(&standings, &history).unwrap();
//! assert_eq!(pairings.len(), 2);
//! assert_eq!((pairings[0].player_id, pairings[0].opponent_id), (1, 3));
//! ```

mod backtrack;
mod pool;

pub mod config;
pub mod error;
pub mod history;
pub mod pairing;
pub mod partition;
pub mod types;

pub use config::*;
pub use error::*;
pub use history::*;
pub use pairing::*;
pub use partition::*;
pub use types::*;
