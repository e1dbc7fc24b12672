mod format;
mod parse;
mod report;

use std::path::PathBuf;

use anyhow::Context as _;
use boxtrack_core::{load_dataset, AppConfig, Dataset};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "boxtrack")]
#[command(about = "Box-office tracking reports for a single film")]
struct Cli {
    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
    /// YAML dataset to use instead of the compiled-in data
    #[arg(long, global = true, env = "BOXTRACK_DATASET_PATH")]
    dataset: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Headline figures: current total, chart position, progress to target
    Summary,
    /// Weekly revenue table with derived metrics
    Weekly,
    /// Project revenue to the end of the run and assess the target
    Projection {
        /// Target cumulative revenue (defaults to the current record holder)
        #[arg(long)]
        target: Option<u64>,
    },
    /// All-time chart with the tracked film highlighted
    Ranking,
    /// Parse a daily status line, e.g. "1/31(六) #片名 3027.8萬，累計: 3億6604.6萬"
    Parse {
        text: String,
        /// Year the line's date falls in (inferred when omitted)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Chart x-axis tick indices for a viewport width
    Ticks {
        /// Number of plotted points (defaults to the number of weeks)
        #[arg(long)]
        length: Option<usize>,
        /// Viewport width in CSS pixels
        #[arg(long, default_value = "1024")]
        width: u32,
    },
}

/// Everything a command handler needs, resolved once in `main`.
pub(crate) struct Context {
    pub dataset: Dataset,
    pub config: AppConfig,
    pub target_revenue: u64,
    pub json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = boxtrack_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(config.env.ansi_logs())
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    let dataset = match cli.dataset.as_ref().or(config.dataset_path.as_ref()) {
        Some(path) => {
            tracing::info!(path = %path.display(), "using dataset file instead of embedded data");
            load_dataset(path)
                .with_context(|| format!("failed to load dataset from {}", path.display()))?
        }
        None => Dataset::embedded(),
    };
    let target_revenue = config.target_revenue.unwrap_or(dataset.target_revenue);
    if config.target_revenue.is_some() {
        tracing::warn!(target_revenue, "target revenue overridden by configuration");
    }

    let ctx = Context {
        dataset,
        config,
        target_revenue,
        json: cli.json,
    };

    match cli.command.unwrap_or(Commands::Summary) {
        Commands::Summary => report::run_summary(&ctx),
        Commands::Weekly => report::run_weekly(&ctx),
        Commands::Projection { target } => report::run_projection(&ctx, target),
        Commands::Ranking => report::run_ranking(&ctx),
        Commands::Parse { text, year } => parse::run_parse(&ctx, &text, year),
        Commands::Ticks { length, width } => report::run_ticks(&ctx, length, width),
    }
}
