//! Swiss tournament runner
//!
//! This crate provides the plumbing around the pairing core:
//! - Registering players and reporting match results in memory
//! - Deriving standings and opponent history from the match log
//! - Replaying declarative event files
//! - Text and JSON reports
//!
//! # Usage
//!
//! ```bash
//! # Current standings of an event
//! cargo run -p tournament -- standings club_night.toml
//!
//! # Next round's pairings, avoiding rematches with a full search
//! cargo run -p tournament -- pair club_night.toml --repair backtrack --json
//! ```

mod error;
mod event;
mod registry;
mod report;

pub use error::*;
pub use event::*;
pub use registry::*;
pub use report::*;
