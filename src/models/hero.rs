//! Hero metadata and the per-run hero lookup table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Numeric hero identifier as used by the statistics service.
pub type HeroId = u32;

/// Static hero metadata from the constants endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroInfo {
    pub id: HeroId,

    /// Internal name (e.g. "npc_dota_hero_antimage")
    #[serde(default)]
    pub name: Option<String>,

    /// Human readable name (e.g. "Anti-Mage")
    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub short_name: Option<String>,

    #[serde(default)]
    pub aliases: Vec<String>,
}

impl HeroInfo {
    pub fn new(id: HeroId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            name: None,
            display_name: Some(display_name.into()),
            short_name: None,
            aliases: Vec::new(),
        }
    }
}

/// Fallback display name for heroes missing from the lookup.
pub fn fallback_hero_name(hero_id: HeroId) -> String {
    format!("Hero {}", hero_id)
}

/// Read-only mapping from hero id to metadata, built once per run.
#[derive(Debug, Clone, Default)]
pub struct HeroLookup {
    heroes: HashMap<HeroId, HeroInfo>,
}

impl HeroLookup {
    pub fn new(heroes: Vec<HeroInfo>) -> Self {
        heroes.into_iter().collect()
    }

    /// Resolve a display name, falling back to "Hero {id}".
    pub fn display_name(&self, hero_id: HeroId) -> String {
        self.heroes
            .get(&hero_id)
            .and_then(|h| h.display_name.clone())
            .unwrap_or_else(|| fallback_hero_name(hero_id))
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }
}

impl FromIterator<HeroInfo> for HeroLookup {
    fn from_iter<I: IntoIterator<Item = HeroInfo>>(iter: I) -> Self {
        Self {
            heroes: iter.into_iter().map(|h| (h.id, h)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_known_hero() {
        let lookup = HeroLookup::new(vec![HeroInfo::new(1, "Alice"), HeroInfo::new(2, "Bob")]);
        assert_eq!(lookup.display_name(2), "Bob");
        assert_eq!(lookup.len(), 2);
    }

    #[test]
    fn test_display_name_fallback() {
        let lookup = HeroLookup::new(vec![HeroInfo::new(1, "Alice")]);
        assert_eq!(lookup.display_name(99), "Hero 99");
    }

    #[test]
    fn test_display_name_missing_field_falls_back() {
        let mut info = HeroInfo::new(7, "ignored");
        info.display_name = None;
        let lookup = HeroLookup::new(vec![info]);
        assert_eq!(lookup.display_name(7), "Hero 7");
    }

    #[test]
    fn test_hero_info_deserialization() {
        let json = r#"{
            "id": 1,
            "name": "npc_dota_hero_antimage",
            "displayName": "Anti-Mage",
            "shortName": "antimage",
            "aliases": ["am", "magina"]
        }"#;

        let info: HeroInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.id, 1);
        assert_eq!(info.display_name.as_deref(), Some("Anti-Mage"));
        assert_eq!(info.aliases, vec!["am", "magina"]);
    }

    #[test]
    fn test_hero_info_sparse_deserialization() {
        let info: HeroInfo = serde_json::from_str(r#"{"id": 5}"#).unwrap();
        assert!(info.display_name.is_none());
        assert!(info.aliases.is_empty());
    }
}
