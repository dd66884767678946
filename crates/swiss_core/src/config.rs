//! Pairing engine configuration

use serde::{Deserialize, Serialize};

/// Default step budget for the backtracking search.
pub const DEFAULT_BACKTRACK_LIMIT: usize = 100_000;

/// How players are removed from the pending pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawStrategy {
    /// Always take the smallest player id left in the pool.
    #[default]
    Ascending,
    /// Take a uniformly random pool member from an RNG seeded with this value.
    Seeded(u64),
}

/// What to do when the drawn opponent has already been played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepairPolicy {
    /// Draw one replacement and accept it even if it is also a repeat.
    #[default]
    SingleSwap,
    /// Take the first pool member not yet played; repeat only if all are.
    ScanPool,
    /// Search the whole standings for a repeat-free round within the given
    /// number of steps, falling back to `ScanPool` when none is found.
    Backtrack(usize),
}

impl RepairPolicy {
    pub fn backtrack() -> Self {
        RepairPolicy::Backtrack(DEFAULT_BACKTRACK_LIMIT)
    }

    /// Parse the names used on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "single-swap" | "single" | "swap" => Some(RepairPolicy::SingleSwap),
            "scan-pool" | "scan" => Some(RepairPolicy::ScanPool),
            "backtrack" => Some(RepairPolicy::backtrack()),
            _ => None,
        }
    }
}

/// Engine configuration. The default reproduces the classic behaviour:
/// deterministic ascending draws with a single-swap repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PairingConfig {
    pub draw: DrawStrategy,
    pub repair: RepairPolicy,
}

impl PairingConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            draw: DrawStrategy::Seeded(seed),
            ..Default::default()
        }
    }

    pub fn with_repair(mut self, repair: RepairPolicy) -> Self {
        self.repair = repair;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
