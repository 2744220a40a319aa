//! Statistics service gateway.
//!
//! The pipeline only talks to the statistics service through the
//! `StatsGateway` trait. `StratzGateway` is the GraphQL implementation.

mod queries;
mod stratz;

pub use stratz::{StratzGateway, StratzGatewayConfig};

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    GameVersion, HeroId, HeroInfo, HeroMatchupStats, MatchupOrder, Position, RankBracket,
    RawDailyStat,
};

/// Errors that can occur while querying the statistics service.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API token not set (expected in ${0})")]
    MissingToken(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

/// Parameters of a daily win statistics query.
#[derive(Debug, Clone)]
pub struct WinStatsQuery<'a> {
    pub position: Position,
    pub bracket: &'a RankBracket,
    pub modes: &'a [String],
    /// Number of day buckets to request
    pub take: u32,
}

/// Query capabilities the pipeline depends on.
///
/// A response whose payload is null or absent is treated as "nothing found":
/// list-returning queries yield an empty list and matchup queries yield empty
/// `with`/`vs` halves. Only transport, status and GraphQL `errors` failures
/// are reported as `GatewayError`.
#[async_trait]
pub trait StatsGateway: Send + Sync {
    /// Gateway name for logging.
    fn name(&self) -> &'static str;

    /// List every known game version.
    async fn list_game_versions(&self) -> Result<Vec<GameVersion>, GatewayError>;

    /// List all heroes, optionally as of a specific game version.
    async fn list_heroes(
        &self,
        game_version_id: Option<u32>,
        language: &str,
    ) -> Result<Vec<HeroInfo>, GatewayError>;

    /// Per-day win/match rows for one position.
    async fn fetch_daily_win_stats(
        &self,
        query: &WinStatsQuery<'_>,
    ) -> Result<Vec<RawDailyStat>, GatewayError>;

    /// Allied and opposing matchups of one hero in the requested order.
    async fn fetch_hero_matchups(
        &self,
        hero_id: HeroId,
        bracket: &RankBracket,
        order_by: MatchupOrder,
        limit: usize,
    ) -> Result<HeroMatchupStats, GatewayError>;
}

/// In-memory gateway for testing.
#[cfg(test)]
pub struct MockGateway {
    pub versions: Vec<GameVersion>,
    pub heroes: Vec<HeroInfo>,
    pub daily: std::collections::HashMap<Position, Vec<RawDailyStat>>,
    pub matchups: std::collections::HashMap<(HeroId, MatchupOrder), HeroMatchupStats>,
    /// Calls whose recorded name starts with this prefix fail
    pub fail_on: Option<String>,
    calls: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockGateway {
    pub fn new() -> Self {
        Self {
            versions: Vec::new(),
            heroes: Vec::new(),
            daily: std::collections::HashMap::new(),
            matchups: std::collections::HashMap::new(),
            fail_on: None,
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Names of the calls made so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), GatewayError> {
        let failed = self
            .fail_on
            .as_deref()
            .is_some_and(|prefix| call.starts_with(prefix));
        self.calls.lock().unwrap().push(call.clone());
        if failed {
            return Err(GatewayError::GraphQl(format!("mock failure on {}", call)));
        }
        Ok(())
    }
}

#[cfg(test)]
#[async_trait]
impl StatsGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn list_game_versions(&self) -> Result<Vec<GameVersion>, GatewayError> {
        self.record("list_game_versions".to_string())?;
        Ok(self.versions.clone())
    }

    async fn list_heroes(
        &self,
        game_version_id: Option<u32>,
        _language: &str,
    ) -> Result<Vec<HeroInfo>, GatewayError> {
        self.record(format!("list_heroes:{:?}", game_version_id))?;
        Ok(self.heroes.clone())
    }

    async fn fetch_daily_win_stats(
        &self,
        query: &WinStatsQuery<'_>,
    ) -> Result<Vec<RawDailyStat>, GatewayError> {
        self.record(format!("daily:{}:{}", query.position, query.take))?;
        Ok(self.daily.get(&query.position).cloned().unwrap_or_default())
    }

    async fn fetch_hero_matchups(
        &self,
        hero_id: HeroId,
        bracket: &RankBracket,
        order_by: MatchupOrder,
        _limit: usize,
    ) -> Result<HeroMatchupStats, GatewayError> {
        self.record(format!("matchups:{}:{}:{}", hero_id, bracket.basic(), order_by))?;
        Ok(self
            .matchups
            .get(&(hero_id, order_by))
            .cloned()
            .unwrap_or_default())
    }
}
