//! Hero grid layout.
//!
//! Converts ranked heroes into fixed-geometry grid cells. One row per hero,
//! one column per statistic category.

use crate::models::{
    GridCell, GridConfig, GridDocument, HeroId, MatchupCategory, Position, PositionGridData,
    RankedHero, GRID_DOCUMENT_VERSION,
};

/// Horizontal placement of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub x: f64,
    pub width: f64,
}

/// Column geometry shared by every row and every position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub hero: Column,
    pub best_vs: Column,
    pub worst_vs: Column,
    pub best_with: Column,
    pub worst_with: Column,
    pub row_height: f64,
}

impl GridLayout {
    pub const STANDARD: GridLayout = GridLayout {
        hero: Column { x: 0.0, width: 59.48 },
        best_vs: Column {
            x: 32.09,
            width: 293.48,
        },
        worst_vs: Column {
            x: 354.52,
            width: 291.91,
        },
        best_with: Column {
            x: 664.43,
            width: 291.91,
        },
        worst_with: Column {
            x: 932.09,
            width: 291.91,
        },
        row_height: 50.0,
    };

    pub fn column(&self, category: MatchupCategory) -> Column {
        match category {
            MatchupCategory::BestVs => self.best_vs,
            MatchupCategory::WorstVs => self.worst_vs,
            MatchupCategory::BestWith => self.best_with,
            MatchupCategory::WorstWith => self.worst_with,
        }
    }

    pub fn row_y(&self, row_index: usize) -> f64 {
        row_index as f64 * self.row_height
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Grid config name for a position, e.g. "POSITION_1 Pos. 7.38".
pub fn config_name(position: Position, game_version: &str) -> String {
    format!("{} Pos. {}", position.as_str(), game_version)
}

/// Builds the grid document. Performs no I/O.
#[derive(Debug, Clone, Default)]
pub struct GridLayoutBuilder {
    layout: GridLayout,
}

impl GridLayoutBuilder {
    pub fn new(layout: GridLayout) -> Self {
        Self { layout }
    }

    pub fn build(&self, positions: &[PositionGridData], game_version: &str) -> GridDocument {
        let configs = positions
            .iter()
            .map(|data| GridConfig {
                config_name: config_name(data.position, game_version),
                categories: self.build_categories(&data.heroes),
            })
            .collect();

        GridDocument {
            version: GRID_DOCUMENT_VERSION,
            configs,
        }
    }

    /// Five cells per hero: the hero itself, then the four matchup columns.
    pub fn build_categories(&self, heroes: &[RankedHero]) -> Vec<GridCell> {
        let mut cells = Vec::with_capacity(heroes.len() * 5);

        for (row_index, hero) in heroes.iter().enumerate() {
            let y = self.layout.row_y(row_index);
            cells.push(self.cell(
                String::new(),
                self.layout.hero,
                y,
                vec![hero.hero_id()],
            ));

            for category in MatchupCategory::ALL {
                let label = if row_index == 0 {
                    category.label().to_string()
                } else {
                    String::new()
                };
                cells.push(self.cell(
                    label,
                    self.layout.column(category),
                    y,
                    hero.matchups.hero_ids(category),
                ));
            }
        }

        cells
    }

    fn cell(&self, category_name: String, column: Column, y: f64, hero_ids: Vec<HeroId>) -> GridCell {
        GridCell {
            category_name,
            x_position: column.x,
            y_position: y,
            width: column.width,
            height: self.layout.row_height,
            hero_ids,
        }
    }
}
