//! Drafting positions and rank brackets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five drafting roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "POSITION_1")]
    Position1,
    #[serde(rename = "POSITION_2")]
    Position2,
    #[serde(rename = "POSITION_3")]
    Position3,
    #[serde(rename = "POSITION_4")]
    Position4,
    #[serde(rename = "POSITION_5")]
    Position5,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::Position1,
        Position::Position2,
        Position::Position3,
        Position::Position4,
        Position::Position5,
    ];

    /// Enum value expected by the statistics service, also used in grid config names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Position1 => "POSITION_1",
            Position::Position2 => "POSITION_2",
            Position::Position3 => "POSITION_3",
            Position::Position4 => "POSITION_4",
            Position::Position5 => "POSITION_5",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Skill-tier filter supplied on the command line (e.g. `CRUSADER`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankBracket(String);

impl RankBracket {
    pub fn new(tier: &str) -> Self {
        Self(tier.trim().to_uppercase())
    }

    /// Full bracket value, used by the daily win statistics query.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Paired "basic" bracket, used by the matchup query.
    ///
    /// Values without a pairing pass through unchanged.
    pub fn basic(&self) -> &str {
        match self.0.as_str() {
            "UNCALIBRATED" => "UNCALIBRATED",
            "HERALD" | "GUARDIAN" => "HERALD_GUARDIAN",
            "CRUSADER" | "ARCHON" => "CRUSADER_ARCHON",
            "LEGEND" | "ANCIENT" => "LEGEND_ANCIENT",
            "DIVINE" | "IMMORTAL" => "DIVINE_IMMORTAL",
            other => other,
        }
    }
}

impl fmt::Display for RankBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
