use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hero_grid::config::AppConfig;
use hero_grid::gateway::{StatsGateway, StratzGateway};
use hero_grid::pipeline::{GridPipeline, PipelineConfig, MAX_FETCH_DAYS};
use hero_grid::storage::{render_grid_document, write_grid_document};
use hero_grid::{parse_modes, RankBracket};

#[derive(Parser)]
#[command(name = "hero-grid")]
#[command(about = "Dota 2 hero grid generator using the STRATZ API")]
#[command(version)]
struct Cli {
    /// Number of days to aggregate
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    days: u32,

    /// Rank tier filter (e.g. CRUSADER)
    #[arg(long)]
    rank: String,

    /// Comma-separated game mode identifiers (e.g. ALL_PICK,CAPTAINS_MODE)
    #[arg(long)]
    modes: String,

    /// Game version filter (e.g. "7.38")
    #[arg(long = "game_version")]
    game_version: Option<String>,

    /// Path to configuration file
    #[arg(long, default_value = "./hero-grid.toml")]
    config: PathBuf,

    /// Output file (overrides the config file)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Print the grid to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,
}

fn init_tracing(log_level: &str, json_logs: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!("Starting hero-grid v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config {:?}", cli.config))?;

    let modes = parse_modes(&cli.modes);
    if modes.is_empty() {
        bail!("--modes must name at least one game mode");
    }

    if cli.days > MAX_FETCH_DAYS {
        tracing::warn!(
            "--days {} exceeds the {} days the service returns; fetching {} days",
            cli.days,
            MAX_FETCH_DAYS,
            MAX_FETCH_DAYS
        );
    }

    let gateway: Arc<dyn StatsGateway> = Arc::new(
        StratzGateway::from_env(
            config.stratz.endpoint_url()?,
            &config.stratz.token_env,
            config.stratz.timeout(),
            &config.stratz.user_agent,
        )
        .context("Failed to create STRATZ client")?,
    );

    let mut pipeline_config = PipelineConfig::new(cli.days, RankBracket::new(&cli.rank), modes)
        .with_game_version(cli.game_version.clone());
    pipeline_config.language = config.stratz.language.clone();
    pipeline_config.top_heroes = config.grid.top_heroes;
    pipeline_config.matchup_limit = config.grid.matchup_limit;

    let pipeline = GridPipeline::new(gateway, pipeline_config);
    let output = pipeline.run().await.context("Grid generation failed")?;

    if cli.dry_run {
        println!("{}", render_grid_document(&output.document)?);
        eprintln!("\n(dry run - no file written)");
        return Ok(());
    }

    let path = cli.output.unwrap_or(config.grid.output);
    let written = write_grid_document(&path, &output.document)
        .with_context(|| format!("Failed to write {:?}", path))?;

    println!("\n=== Hero Grid ===");
    println!("Game version:     {}", output.game_version.label);
    println!("Positions:        {}", output.positions.len());
    println!("Heroes:           {}", output.hero_count());
    println!("Duration:         {:?}", output.duration);
    println!("Saved to:         {}", written.display());

    Ok(())
}
