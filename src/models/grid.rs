//! Hero grid output models.

use serde::{Deserialize, Serialize};

use super::{HeroId, HeroMatchups, HeroRecord, Position};

/// Output format version understood by the game client.
pub const GRID_DOCUMENT_VERSION: u32 = 3;

/// A ranked hero together with its matchup lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedHero {
    pub record: HeroRecord,
    pub matchups: HeroMatchups,
}

impl RankedHero {
    pub fn new(record: HeroRecord, matchups: HeroMatchups) -> Self {
        Self { record, matchups }
    }

    pub fn hero_id(&self) -> HeroId {
        self.record.hero_id
    }
}

/// Ranked heroes of one position, highest win rate first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionGridData {
    pub position: Position,
    pub heroes: Vec<RankedHero>,
}

/// One rectangle of the grid layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    /// Column header, empty except on the first row
    pub category_name: String,
    pub x_position: f64,
    pub y_position: f64,
    pub width: f64,
    pub height: f64,
    pub hero_ids: Vec<HeroId>,
}

/// One named grid (one per position).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub config_name: String,
    pub categories: Vec<GridCell>,
}

/// The full hero grid document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridDocument {
    pub version: u32,
    pub configs: Vec<GridConfig>,
}

impl Default for GridDocument {
    fn default() -> Self {
        Self {
            version: GRID_DOCUMENT_VERSION,
            configs: Vec::new(),
        }
    }
}
