//! Game patch versions.

use serde::{Deserialize, Serialize};

/// A game patch as listed by the constants endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameVersion {
    pub id: u32,

    /// Human readable version (e.g. "7.38")
    pub name: String,

    /// Release time, unix seconds
    #[serde(default)]
    pub as_of_date_time: Option<i64>,
}

impl GameVersion {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            as_of_date_time: None,
        }
    }
}

/// Find a version by exact name.
pub fn find_game_version<'a>(versions: &'a [GameVersion], name: &str) -> Option<&'a GameVersion> {
    versions.iter().find(|v| v.name == name)
}

/// The most recent version (highest id).
pub fn latest_game_version(versions: &[GameVersion]) -> Option<&GameVersion> {
    versions.iter().max_by_key(|v| v.id)
}
