//! Hero-versus-hero and hero-with-hero matchup models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::HeroId;

/// Ordering mode requested from the matchup endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchupOrder {
    Synergy,
    Loss,
    Disadvantage,
    Advantage,
}

impl MatchupOrder {
    /// Numeric `orderBy` value sent with the query.
    pub fn as_query_value(&self) -> u8 {
        match self {
            MatchupOrder::Synergy => 0,
            MatchupOrder::Loss => 1,
            MatchupOrder::Disadvantage => 2,
            MatchupOrder::Advantage => 3,
        }
    }
}

impl fmt::Display for MatchupOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchupOrder::Synergy => write!(f, "synergy"),
            MatchupOrder::Loss => write!(f, "loss"),
            MatchupOrder::Disadvantage => write!(f, "disadvantage"),
            MatchupOrder::Advantage => write!(f, "advantage"),
        }
    }
}

/// Which half of a matchup response a list is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchupSide {
    /// Allied heroes
    With,
    /// Opposing heroes
    Vs,
}

/// The four matchup columns shown for every hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchupCategory {
    BestVs,
    WorstVs,
    BestWith,
    WorstWith,
}

impl MatchupCategory {
    pub const ALL: [MatchupCategory; 4] = [
        MatchupCategory::BestVs,
        MatchupCategory::WorstVs,
        MatchupCategory::BestWith,
        MatchupCategory::WorstWith,
    ];

    /// Ordering used to fetch this category.
    ///
    /// `WorstWith` uses the loss ordering. The service has no inverse-synergy
    /// ordering, so this is an approximation of worst synergy.
    pub fn order(&self) -> MatchupOrder {
        match self {
            MatchupCategory::BestVs => MatchupOrder::Advantage,
            MatchupCategory::WorstVs => MatchupOrder::Disadvantage,
            MatchupCategory::BestWith => MatchupOrder::Synergy,
            MatchupCategory::WorstWith => MatchupOrder::Loss,
        }
    }

    pub fn side(&self) -> MatchupSide {
        match self {
            MatchupCategory::BestVs | MatchupCategory::WorstVs => MatchupSide::Vs,
            MatchupCategory::BestWith | MatchupCategory::WorstWith => MatchupSide::With,
        }
    }

    /// True when the ordering is a stand-in rather than the real metric.
    pub fn is_approximate(&self) -> bool {
        matches!(self, MatchupCategory::WorstWith)
    }

    /// Column header text in the grid.
    pub fn label(&self) -> &'static str {
        match self {
            MatchupCategory::BestVs => "Best VS",
            MatchupCategory::WorstVs => "Worst VS",
            MatchupCategory::BestWith => "Best With",
            MatchupCategory::WorstWith => "Worst With",
        }
    }
}

/// One matchup row as returned by the statistics service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatchup {
    pub hero_id2: HeroId,

    #[serde(default)]
    pub win_count: u64,

    #[serde(default)]
    pub match_count: u64,

    #[serde(default)]
    pub synergy: f64,
}

impl RawMatchup {
    pub fn new(hero_id2: HeroId) -> Self {
        Self {
            hero_id2,
            win_count: 0,
            match_count: 0,
            synergy: 0.0,
        }
    }
}

/// Both halves of a matchup response for one hero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroMatchupStats {
    #[serde(default)]
    pub with: Vec<RawMatchup>,

    #[serde(default)]
    pub vs: Vec<RawMatchup>,
}

impl HeroMatchupStats {
    /// Take the half of the response a category reads from.
    pub fn into_side(self, side: MatchupSide) -> Vec<RawMatchup> {
        match side {
            MatchupSide::With => self.with,
            MatchupSide::Vs => self.vs,
        }
    }
}

/// A matchup annotated with the other hero's display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupEntry {
    /// Hero the matchup list was requested for
    pub hero_id: HeroId,

    /// The allied or opposing hero
    pub hero_id2: HeroId,

    pub win_count: u64,

    pub match_count: u64,

    pub synergy: f64,

    /// Display name of `hero_id2`
    pub hero_name: String,
}

/// The four annotated matchup lists of one hero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroMatchups {
    pub best_vs: Vec<MatchupEntry>,
    pub worst_vs: Vec<MatchupEntry>,
    pub best_with: Vec<MatchupEntry>,
    /// Loss-ordered, see [`MatchupCategory::order`]
    pub worst_with: Vec<MatchupEntry>,
}

impl HeroMatchups {
    pub fn get(&self, category: MatchupCategory) -> &[MatchupEntry] {
        match category {
            MatchupCategory::BestVs => &self.best_vs,
            MatchupCategory::WorstVs => &self.worst_vs,
            MatchupCategory::BestWith => &self.best_with,
            MatchupCategory::WorstWith => &self.worst_with,
        }
    }

    pub fn set(&mut self, category: MatchupCategory, entries: Vec<MatchupEntry>) {
        match category {
            MatchupCategory::BestVs => self.best_vs = entries,
            MatchupCategory::WorstVs => self.worst_vs = entries,
            MatchupCategory::BestWith => self.best_with = entries,
            MatchupCategory::WorstWith => self.worst_with = entries,
        }
    }

    /// Opponent/ally ids of one category, in list order.
    pub fn hero_ids(&self, category: MatchupCategory) -> Vec<HeroId> {
        self.get(category).iter().map(|e| e.hero_id2).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_orderings() {
        assert_eq!(MatchupCategory::BestVs.order(), MatchupOrder::Advantage);
        assert_eq!(MatchupCategory::WorstVs.order(), MatchupOrder::Disadvantage);
        assert_eq!(MatchupCategory::BestWith.order(), MatchupOrder::Synergy);
        assert_eq!(MatchupCategory::WorstWith.order(), MatchupOrder::Loss);
    }

    #[test]
    fn test_only_worst_with_is_approximate() {
        let approximate: Vec<_> = MatchupCategory::ALL
            .iter()
            .filter(|c| c.is_approximate())
            .collect();
        assert_eq!(approximate, vec![&MatchupCategory::WorstWith]);
    }

    #[test]
    fn test_category_sides() {
        assert_eq!(MatchupCategory::BestVs.side(), MatchupSide::Vs);
        assert_eq!(MatchupCategory::WorstWith.side(), MatchupSide::With);
    }

    #[test]
    fn test_order_display() {
        assert_eq!(MatchupOrder::Disadvantage.to_string(), "disadvantage");
        assert_eq!(MatchupOrder::Synergy.as_query_value(), 0);
    }

    #[test]
    fn test_matchup_stats_deserialization() {
        let json = r#"{
            "with": [{"heroId2": 5, "winCount": 30, "matchCount": 50, "synergy": 2.5}],
            "vs": [{"heroId2": 9}]
        }"#;

        let stats: HeroMatchupStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.with.len(), 1);
        assert_eq!(stats.with[0].synergy, 2.5);
        assert_eq!(stats.vs[0].hero_id2, 9);
        assert_eq!(stats.vs[0].match_count, 0);
    }

    #[test]
    fn test_hero_matchups_set_and_ids() {
        let entry = |id| MatchupEntry {
            hero_id: 1,
            hero_id2: id,
            win_count: 0,
            match_count: 0,
            synergy: 0.0,
            hero_name: String::new(),
        };

        let mut matchups = HeroMatchups::default();
        matchups.set(MatchupCategory::WorstVs, vec![entry(4), entry(2)]);

        assert_eq!(matchups.hero_ids(MatchupCategory::WorstVs), vec![4, 2]);
        assert!(matchups.get(MatchupCategory::BestVs).is_empty());
    }
}
