//! Win/match statistics models.

use serde::{Deserialize, Serialize};

use super::HeroId;

/// One per-day row from the statistics service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDailyStat {
    pub hero_id: HeroId,

    /// Start of the day bucket, unix seconds
    pub day: i64,

    #[serde(default)]
    pub win_count: u64,

    #[serde(default)]
    pub match_count: u64,

    #[serde(default)]
    pub game_version_id: Option<u32>,
}

impl RawDailyStat {
    pub fn new(hero_id: HeroId, day: i64, win_count: u64, match_count: u64) -> Self {
        Self {
            hero_id,
            day,
            win_count,
            match_count,
            game_version_id: None,
        }
    }

    pub fn with_game_version(mut self, game_version_id: u32) -> Self {
        self.game_version_id = Some(game_version_id);
        self
    }
}

/// Aggregated statistics for one hero within a position and day window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroRecord {
    pub hero_id: HeroId,

    pub win_count: u64,

    pub match_count: u64,

    /// Win rate (0.0 to 1.0), filled in by ranking
    pub win_rate: f64,

    /// Display name, filled in by ranking
    pub hero_name: String,
}

impl HeroRecord {
    /// Create an unranked record with zeroed counters.
    pub fn new(hero_id: HeroId) -> Self {
        Self {
            hero_id,
            win_count: 0,
            match_count: 0,
            win_rate: 0.0,
            hero_name: String::new(),
        }
    }

    pub fn with_counts(mut self, win_count: u64, match_count: u64) -> Self {
        self.win_count = win_count;
        self.match_count = match_count;
        self
    }

    pub fn with_win_rate(mut self, win_rate: f64) -> Self {
        self.win_rate = win_rate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_daily_stat_deserialization() {
        let json = r#"{"heroId": 14, "day": 1735689600, "winCount": 120, "matchCount": 250}"#;
        let stat: RawDailyStat = serde_json::from_str(json).unwrap();

        assert_eq!(stat.hero_id, 14);
        assert_eq!(stat.day, 1735689600);
        assert_eq!(stat.win_count, 120);
        assert_eq!(stat.match_count, 250);
        assert!(stat.game_version_id.is_none());
    }

    #[test]
    fn test_raw_daily_stat_missing_counts_default_to_zero() {
        let stat: RawDailyStat = serde_json::from_str(r#"{"heroId": 3, "day": 100}"#).unwrap();
        assert_eq!(stat.win_count, 0);
        assert_eq!(stat.match_count, 0);
    }

    #[test]
    fn test_hero_record_new_is_unranked() {
        let record = HeroRecord::new(8).with_counts(5, 10);
        assert_eq!(record.win_rate, 0.0);
        assert!(record.hero_name.is_empty());
    }
}
