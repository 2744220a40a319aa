//! Core data models for the hero grid generator.

mod grid;
mod hero;
mod matchup;
mod position;
mod stats;
mod version;

pub use grid::*;
pub use hero::*;
pub use matchup::*;
pub use position::*;
pub use stats::*;
pub use version::*;
