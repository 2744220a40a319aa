//! # Hero Grid
//!
//! Generates Dota 2 hero grid layouts from STRATZ win rate and matchup statistics.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (hero records, matchups, grid cells)
//! - **gateway**: Statistics service access (GraphQL)
//! - **calculate**: Aggregation, win rates and top-hero selection
//! - **matchup**: Matchup list annotation
//! - **grid**: Fixed grid layout
//! - **pipeline**: Per-run orchestration
//! - **storage**: Output file writing
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod gateway;
pub mod grid;
pub mod matchup;
pub mod models;
pub mod pipeline;
pub mod storage;

pub use models::*;

/// Parse a comma-separated game mode list (e.g. "ALL_PICK, TURBO").
///
/// Entries are trimmed and upper-cased; empty entries are dropped.
pub fn parse_modes(s: &str) -> Vec<String> {
    s.split(',')
        .map(|m| m.trim())
        .filter(|m| !m.is_empty())
        .map(|m| m.to_uppercase())
        .collect()
}
