pub mod app_config;
pub mod config;
pub mod daily;
pub mod dataset;
pub mod metrics;
pub mod model;
pub mod projection;
pub mod summary;
pub mod ticks;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use daily::{parse_daily_info, parse_daily_info_for_year, parse_daily_info_now};
pub use dataset::{load_dataset, validate_dataset, Dataset};
pub use metrics::{average_ticket_price, calculate_derived_metrics, decay_rate};
pub use model::{
    DailySnapshot, DataAnomaly, DataQuality, DerivedMetrics, Feasibility, MovieInfo,
    MovieRanking, ProjectedWeek, TargetProjection, WeeklyRecord,
};
pub use projection::{calculate_target_projection, ProjectionParams, MAX_FINAL_WEEK};
pub use summary::{
    current_ranking, format_date_range_short, gap_to_first, latest_cumulative_revenue,
    latest_cumulative_tickets, progress_percentage,
};
pub use ticks::{explicit_ticks, max_ticks, tick_count, ViewportClass};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read dataset file {path}: {source}")]
    DatasetFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset file: {0}")]
    DatasetFileParse(#[from] serde_yaml::Error),

    #[error("dataset validation failed: {0}")]
    Validation(String),
}
