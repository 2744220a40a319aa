//! Statistics calculation engine.
//!
//! Turns raw per-day rows into ranked hero records:
//! - Windowed aggregation per hero
//! - Win rate and display name resolution
//! - Top-N selection by win rate

use std::collections::HashMap;

use crate::models::{HeroId, HeroLookup, HeroRecord, RawDailyStat};

/// Length of one day bucket in seconds.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Heroes shown per position.
pub const DEFAULT_TOP_HEROES: usize = 16;

/// Inclusive `(start, end)` day bounds covered by a window of `days`.
///
/// The right edge is the latest day present in `stats`, not the current time.
/// Returns `None` for empty input.
pub fn window_bounds<'a, I>(stats: I, days: u32) -> Option<(i64, i64)>
where
    I: IntoIterator<Item = &'a RawDailyStat>,
{
    let max_day = stats.into_iter().map(|s| s.day).max()?;
    let span = i64::from(days.max(1)) - 1;
    Some((max_day - span * SECONDS_PER_DAY, max_day))
}

/// Whether a row passes the game version filter.
///
/// With a filter set, rows without a version id are excluded.
pub fn matches_game_version(stat: &RawDailyStat, game_version_id: Option<u32>) -> bool {
    match game_version_id {
        Some(wanted) => stat.game_version_id == Some(wanted),
        None => true,
    }
}

/// Merge per-day rows into one record per hero.
///
/// Rows from other game versions are dropped before the window is applied
/// when `game_version_id` is set. Output follows the order in which heroes
/// first appear.
pub fn aggregate_daily_stats(
    stats: &[RawDailyStat],
    days: u32,
    game_version_id: Option<u32>,
) -> Vec<HeroRecord> {
    let filtered: Vec<&RawDailyStat> = stats
        .iter()
        .filter(|s| matches_game_version(s, game_version_id))
        .collect();

    let Some((cutoff, _)) = window_bounds(filtered.iter().copied(), days) else {
        return Vec::new();
    };

    let mut index: HashMap<HeroId, usize> = HashMap::new();
    let mut records: Vec<HeroRecord> = Vec::new();

    for stat in filtered.into_iter().filter(|s| s.day >= cutoff) {
        let slot = *index.entry(stat.hero_id).or_insert_with(|| {
            records.push(HeroRecord::new(stat.hero_id));
            records.len() - 1
        });
        let record = &mut records[slot];
        record.win_count += stat.win_count;
        record.match_count += stat.match_count;
    }

    records
}

/// Calculate win rate from wins and matches played.
pub fn calculate_win_rate(wins: u64, matches: u64) -> f64 {
    if matches == 0 {
        0.0
    } else {
        wins as f64 / matches as f64
    }
}

/// Fill in win rate and display name for one record.
pub fn rank_hero(record: &mut HeroRecord, lookup: &HeroLookup) {
    record.win_rate = calculate_win_rate(record.win_count, record.match_count);
    record.hero_name = lookup.display_name(record.hero_id);
}

pub fn rank_heroes(records: &mut [HeroRecord], lookup: &HeroLookup) {
    for record in records.iter_mut() {
        rank_hero(record, lookup);
    }
}

/// Keep the `count` best records by win rate.
///
/// The sort is stable, so equal win rates keep their input order.
pub fn select_top(mut records: Vec<HeroRecord>, count: usize) -> Vec<HeroRecord> {
    records.sort_by(|a, b| b.win_rate.total_cmp(&a.win_rate));
    records.truncate(count);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HeroInfo;

    fn lookup() -> HeroLookup {
        HeroLookup::new(vec![HeroInfo::new(1, "Alice"), HeroInfo::new(2, "Bob")])
    }

    fn ranked(hero_id: HeroId, win_rate: f64) -> HeroRecord {
        HeroRecord::new(hero_id).with_win_rate(win_rate)
    }

    #[test]
    fn test_aggregate_merges_same_hero() {
        let stats = vec![
            RawDailyStat::new(1, 100, 10, 20),
            RawDailyStat::new(1, 100, 5, 10),
        ];

        let records = aggregate_daily_stats(&stats, 30, None);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].hero_id, 1);
        assert_eq!(records[0].win_count, 15);
        assert_eq!(records[0].match_count, 30);
    }

    #[test]
    fn test_aggregate_one_record_per_hero_in_first_seen_order() {
        let stats = vec![
            RawDailyStat::new(7, 100, 1, 2),
            RawDailyStat::new(3, 100, 4, 8),
            RawDailyStat::new(7, 100 + SECONDS_PER_DAY, 2, 3),
        ];

        let records = aggregate_daily_stats(&stats, 30, None);

        let ids: Vec<HeroId> = records.iter().map(|r| r.hero_id).collect();
        assert_eq!(ids, vec![7, 3]);
        assert_eq!(records[0].win_count, 3);
        assert_eq!(records[0].match_count, 5);
    }

    #[test]
    fn test_aggregate_window_uses_latest_day() {
        let latest = 10 * SECONDS_PER_DAY;
        let stats = vec![
            RawDailyStat::new(1, latest, 1, 1),
            // exactly on the left edge of a 3-day window
            RawDailyStat::new(1, latest - 2 * SECONDS_PER_DAY, 1, 1),
            // one day too old
            RawDailyStat::new(1, latest - 3 * SECONDS_PER_DAY, 100, 100),
            RawDailyStat::new(2, latest - 5 * SECONDS_PER_DAY, 9, 9),
        ];

        let records = aggregate_daily_stats(&stats, 3, None);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].win_count, 2);
        assert_eq!(records[0].match_count, 2);
    }

    #[test]
    fn test_aggregate_single_day_window() {
        let stats = vec![
            RawDailyStat::new(1, 2 * SECONDS_PER_DAY, 3, 4),
            RawDailyStat::new(1, SECONDS_PER_DAY, 1, 1),
        ];

        let records = aggregate_daily_stats(&stats, 1, None);
        assert_eq!(records[0].match_count, 4);
    }

    #[test]
    fn test_aggregate_game_version_filter() {
        let stats = vec![
            RawDailyStat::new(1, 100, 10, 20).with_game_version(180),
            RawDailyStat::new(1, 100, 50, 50).with_game_version(178),
            RawDailyStat::new(2, 100, 1, 2).with_game_version(178),
        ];

        let records = aggregate_daily_stats(&stats, 30, Some(180));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].hero_id, 1);
        assert_eq!(records[0].win_count, 10);
    }

    #[test]
    fn test_aggregate_filter_drops_unversioned_rows() {
        let stats = vec![
            RawDailyStat::new(1, 100, 10, 20),
            RawDailyStat::new(2, 100, 1, 2).with_game_version(178),
            RawDailyStat::new(3, 100, 4, 5).with_game_version(180),
        ];

        let records = aggregate_daily_stats(&stats, 30, Some(180));
        let ids: Vec<HeroId> = records.iter().map(|r| r.hero_id).collect();
        assert_eq!(ids, vec![3]);

        // Without a filter every row counts
        assert_eq!(aggregate_daily_stats(&stats, 30, None).len(), 3);
    }

    #[test]
    fn test_matches_game_version() {
        let unversioned = RawDailyStat::new(1, 100, 0, 0);
        let versioned = RawDailyStat::new(1, 100, 0, 0).with_game_version(180);

        assert!(matches_game_version(&unversioned, None));
        assert!(!matches_game_version(&unversioned, Some(180)));
        assert!(matches_game_version(&versioned, Some(180)));
        assert!(!matches_game_version(&versioned, Some(178)));
    }

    #[test]
    fn test_aggregate_filter_applies_before_window() {
        // The newest row belongs to another version and must not move the window edge
        let stats = vec![
            RawDailyStat::new(1, 100 * SECONDS_PER_DAY, 9, 9).with_game_version(178),
            RawDailyStat::new(2, 10 * SECONDS_PER_DAY, 1, 2).with_game_version(180),
        ];

        let records = aggregate_daily_stats(&stats, 1, Some(180));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].hero_id, 2);
    }

    #[test]
    fn test_aggregate_empty_input() {
        assert!(aggregate_daily_stats(&[], 30, None).is_empty());
        assert!(aggregate_daily_stats(&[], 30, Some(1)).is_empty());
    }

    #[test]
    fn test_window_bounds() {
        let stats = vec![RawDailyStat::new(1, 5 * SECONDS_PER_DAY, 0, 0)];
        assert_eq!(
            window_bounds(&stats, 2),
            Some((4 * SECONDS_PER_DAY, 5 * SECONDS_PER_DAY))
        );
        assert_eq!(window_bounds(std::iter::empty::<&RawDailyStat>(), 2), None);
        assert_eq!(
            window_bounds(&stats, 0),
            Some((5 * SECONDS_PER_DAY, 5 * SECONDS_PER_DAY))
        );
    }

    #[test]
    fn test_calculate_win_rate() {
        assert_eq!(calculate_win_rate(50, 100), 0.5);
        assert_eq!(calculate_win_rate(0, 0), 0.0);
        assert_eq!(calculate_win_rate(7, 7), 1.0);
    }

    #[test]
    fn test_rank_hero_sets_rate_and_name() {
        let mut record = HeroRecord::new(1).with_counts(15, 30);
        rank_hero(&mut record, &lookup());

        assert_eq!(record.win_rate, 0.5);
        assert_eq!(record.hero_name, "Alice");
    }

    #[test]
    fn test_rank_hero_unknown_id_and_no_matches() {
        let mut record = HeroRecord::new(99);
        rank_hero(&mut record, &lookup());

        assert_eq!(record.win_rate, 0.0);
        assert!(!record.win_rate.is_nan());
        assert_eq!(record.hero_name, "Hero 99");
    }

    #[test]
    fn test_aggregate_then_rank() {
        let stats = vec![
            RawDailyStat::new(1, 100, 10, 20),
            RawDailyStat::new(1, 100, 5, 10),
        ];

        let mut records = aggregate_daily_stats(&stats, 30, None);
        rank_heroes(&mut records, &lookup());

        assert_eq!(records[0].win_count, 15);
        assert_eq!(records[0].match_count, 30);
        assert_eq!(records[0].win_rate, 0.5);
    }

    #[test]
    fn test_select_top_sorts_descending() {
        let records = vec![ranked(1, 0.40), ranked(2, 0.60), ranked(3, 0.50)];

        let top = select_top(records, DEFAULT_TOP_HEROES);

        let ids: Vec<HeroId> = top.iter().map(|r| r.hero_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_select_top_is_stable_on_ties() {
        let records = vec![
            ranked(5, 0.5),
            ranked(1, 0.7),
            ranked(9, 0.5),
            ranked(2, 0.5),
        ];

        let top = select_top(records, DEFAULT_TOP_HEROES);

        let ids: Vec<HeroId> = top.iter().map(|r| r.hero_id).collect();
        assert_eq!(ids, vec![1, 5, 9, 2]);
    }

    #[test]
    fn test_select_top_truncates() {
        let records: Vec<HeroRecord> = (0..40)
            .map(|i| ranked(i, f64::from(i) / 40.0))
            .collect();

        let top = select_top(records, DEFAULT_TOP_HEROES);

        assert_eq!(top.len(), 16);
        assert_eq!(top[0].hero_id, 39);
        assert!(top.windows(2).all(|w| w[0].win_rate >= w[1].win_rate));
    }

    #[test]
    fn test_select_top_fewer_than_count() {
        let top = select_top(vec![ranked(1, 0.1), ranked(2, 0.2)], DEFAULT_TOP_HEROES);
        assert_eq!(top.len(), 2);
        assert!(select_top(Vec::new(), DEFAULT_TOP_HEROES).is_empty());
    }
}
