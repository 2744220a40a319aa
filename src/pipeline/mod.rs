//! Grid generation pipeline.
//!
//! Coordinates one run, sequentially:
//! 1. Resolve the game version and build the hero lookup
//! 2. Per position: fetch daily stats, aggregate, rank, select the top heroes
//! 3. Annotate every selected hero with its matchup lists
//! 4. Lay out the grid document

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::DateTime;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::calculate::{
    aggregate_daily_stats, matches_game_version, rank_heroes, select_top, window_bounds,
    DEFAULT_TOP_HEROES,
};
use crate::gateway::{GatewayError, StatsGateway, WinStatsQuery};
use crate::grid::GridLayoutBuilder;
use crate::matchup::{MatchupAnnotator, DEFAULT_MATCHUP_LIMIT};
use crate::models::{
    find_game_version, latest_game_version, GridDocument, HeroLookup, Position,
    PositionGridData, RankBracket, RankedHero,
};

/// Most day buckets the statistics service returns per query.
pub const MAX_FETCH_DAYS: u32 = 12;

/// Label used when the service lists no versions at all.
const UNKNOWN_VERSION_LABEL: &str = "unknown";

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Game version {requested} not found. Available versions: {}", .available.join(", "))]
    UnknownGameVersion {
        requested: String,
        available: Vec<String>,
    },
}

/// Parameters of one run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Aggregation window in days
    pub days: u32,

    pub rank: RankBracket,

    /// Game mode identifiers (e.g. "ALL_PICK")
    pub modes: Vec<String>,

    /// Exact version name to filter by (e.g. "7.38")
    pub game_version: Option<String>,

    /// Language for hero display names
    pub language: String,

    pub top_heroes: usize,

    pub matchup_limit: usize,
}

impl PipelineConfig {
    pub fn new(days: u32, rank: RankBracket, modes: Vec<String>) -> Self {
        Self {
            days,
            rank,
            modes,
            game_version: None,
            language: "ENGLISH".to_string(),
            top_heroes: DEFAULT_TOP_HEROES,
            matchup_limit: DEFAULT_MATCHUP_LIMIT,
        }
    }

    pub fn with_game_version(mut self, game_version: Option<String>) -> Self {
        self.game_version = game_version;
        self
    }

    /// Day buckets requested upstream, capped at the service maximum.
    pub fn fetch_days(&self) -> u32 {
        self.days.clamp(1, MAX_FETCH_DAYS)
    }
}

/// Game version a run is filtered by and labelled with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    /// Only set when the user asked for a specific version
    pub filter_id: Option<u32>,
    pub label: String,
}

/// Result of a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub document: GridDocument,
    pub game_version: ResolvedVersion,
    pub positions: Vec<PositionGridData>,
    pub duration: Duration,
}

impl PipelineOutput {
    pub fn hero_count(&self) -> usize {
        self.positions.iter().map(|p| p.heroes.len()).sum()
    }
}

/// Grid generation pipeline.
pub struct GridPipeline {
    gateway: Arc<dyn StatsGateway>,
    config: PipelineConfig,
    builder: GridLayoutBuilder,
}

impl GridPipeline {
    pub fn new(gateway: Arc<dyn StatsGateway>, config: PipelineConfig) -> Self {
        Self {
            gateway,
            config,
            builder: GridLayoutBuilder::default(),
        }
    }

    /// Run all positions and build the grid document.
    pub async fn run(&self) -> Result<PipelineOutput, PipelineError> {
        let started = Instant::now();

        let version = self.resolve_game_version().await?;
        let lookup = self.fetch_hero_lookup(version.filter_id).await?;

        info!(
            "Generating grid for {} (rank={}, modes={:?}, days={}, via {})",
            version.label,
            self.config.rank,
            self.config.modes,
            self.config.days,
            self.gateway.name()
        );

        let mut positions = Vec::with_capacity(Position::ALL.len());
        for position in Position::ALL {
            positions.push(
                self.process_position(position, &lookup, version.filter_id)
                    .await?,
            );
        }

        let document = self.builder.build(&positions, &version.label);

        Ok(PipelineOutput {
            document,
            game_version: version,
            positions,
            duration: started.elapsed(),
        })
    }

    /// Resolve `--game_version` by exact name.
    ///
    /// Without a requested version the latest one is used as a label only.
    pub async fn resolve_game_version(&self) -> Result<ResolvedVersion, PipelineError> {
        let versions = self.gateway.list_game_versions().await?;

        match self.config.game_version.as_deref() {
            Some(requested) => match find_game_version(&versions, requested) {
                Some(version) => {
                    info!("Filtering by game version {} (id {})", version.name, version.id);
                    Ok(ResolvedVersion {
                        filter_id: Some(version.id),
                        label: version.name.clone(),
                    })
                }
                None => Err(PipelineError::UnknownGameVersion {
                    requested: requested.to_string(),
                    available: versions.iter().map(|v| v.name.clone()).collect(),
                }),
            },
            None => {
                let label = match latest_game_version(&versions) {
                    Some(latest) => latest.name.clone(),
                    None => {
                        warn!("Service listed no game versions");
                        UNKNOWN_VERSION_LABEL.to_string()
                    }
                };
                Ok(ResolvedVersion {
                    filter_id: None,
                    label,
                })
            }
        }
    }

    pub async fn fetch_hero_lookup(
        &self,
        game_version_id: Option<u32>,
    ) -> Result<HeroLookup, PipelineError> {
        let heroes = self
            .gateway
            .list_heroes(game_version_id, &self.config.language)
            .await?;
        let lookup = HeroLookup::new(heroes);
        info!("Loaded {} heroes", lookup.len());
        Ok(lookup)
    }

    /// Fetch, aggregate, rank, select and annotate one position.
    pub async fn process_position(
        &self,
        position: Position,
        lookup: &HeroLookup,
        game_version_id: Option<u32>,
    ) -> Result<PositionGridData, PipelineError> {
        let stats = self
            .gateway
            .fetch_daily_win_stats(&WinStatsQuery {
                position,
                bracket: &self.config.rank,
                modes: &self.config.modes,
                take: self.config.fetch_days(),
            })
            .await?;

        let in_version = stats
            .iter()
            .filter(|s| matches_game_version(s, game_version_id));
        if let Some((start, end)) = window_bounds(in_version, self.config.days) {
            debug!(
                "{}: {} rows, window {} .. {}",
                position,
                stats.len(),
                DateTime::from_timestamp(start, 0)
                    .map(|d| d.date_naive().to_string())
                    .unwrap_or_else(|| start.to_string()),
                DateTime::from_timestamp(end, 0)
                    .map(|d| d.date_naive().to_string())
                    .unwrap_or_else(|| end.to_string()),
            );
        }

        let mut records = aggregate_daily_stats(&stats, self.config.days, game_version_id);
        rank_heroes(&mut records, lookup);
        let top = select_top(records, self.config.top_heroes);

        let annotator = MatchupAnnotator::new(
            self.gateway.as_ref(),
            lookup,
            &self.config.rank,
            self.config.matchup_limit,
        );

        let mut heroes = Vec::with_capacity(top.len());
        for record in top {
            let matchups = annotator.annotate_hero(record.hero_id).await?;
            heroes.push(RankedHero::new(record, matchups));
        }

        info!("{}: selected {} heroes", position, heroes.len());

        Ok(PositionGridData { position, heroes })
    }
}
