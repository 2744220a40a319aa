//! Matchup annotation.
//!
//! Fetches the four matchup lists of a hero and attaches the other hero's
//! display name to every entry.

use tracing::debug;

use crate::gateway::{GatewayError, StatsGateway};
use crate::models::{
    HeroId, HeroLookup, HeroMatchups, MatchupCategory, MatchupEntry, RankBracket, RawMatchup,
};

/// Matchup entries shown per category.
pub const DEFAULT_MATCHUP_LIMIT: usize = 10;

/// Convert raw rows into named entries, keeping at most `limit`.
pub fn annotate_entries(
    hero_id: HeroId,
    rows: Vec<RawMatchup>,
    lookup: &HeroLookup,
    limit: usize,
) -> Vec<MatchupEntry> {
    rows.into_iter()
        .take(limit)
        .map(|row| MatchupEntry {
            hero_id,
            hero_id2: row.hero_id2,
            win_count: row.win_count,
            match_count: row.match_count,
            synergy: row.synergy,
            hero_name: lookup.display_name(row.hero_id2),
        })
        .collect()
}

/// Fetches and annotates matchup lists for one rank bracket.
pub struct MatchupAnnotator<'a> {
    gateway: &'a dyn StatsGateway,
    lookup: &'a HeroLookup,
    bracket: &'a RankBracket,
    limit: usize,
}

impl<'a> MatchupAnnotator<'a> {
    pub fn new(
        gateway: &'a dyn StatsGateway,
        lookup: &'a HeroLookup,
        bracket: &'a RankBracket,
        limit: usize,
    ) -> Self {
        Self {
            gateway,
            lookup,
            bracket,
            limit,
        }
    }

    /// Fetch one category. An empty upstream answer yields an empty list.
    pub async fn fetch_category(
        &self,
        hero_id: HeroId,
        category: MatchupCategory,
    ) -> Result<Vec<MatchupEntry>, GatewayError> {
        let stats = self
            .gateway
            .fetch_hero_matchups(hero_id, self.bracket, category.order(), self.limit)
            .await?;

        let entries = annotate_entries(
            hero_id,
            stats.into_side(category.side()),
            self.lookup,
            self.limit,
        );

        debug!(
            "Hero {} {}: {} entries (order={}{})",
            hero_id,
            category.label(),
            entries.len(),
            category.order(),
            if category.is_approximate() {
                ", approximate"
            } else {
                ""
            }
        );

        Ok(entries)
    }

    /// Fetch all four categories, one request at a time.
    pub async fn annotate_hero(&self, hero_id: HeroId) -> Result<HeroMatchups, GatewayError> {
        let mut matchups = HeroMatchups::default();
        for category in MatchupCategory::ALL {
            let entries = self.fetch_category(hero_id, category).await?;
            matchups.set(category, entries);
        }
        Ok(matchups)
    }
}
