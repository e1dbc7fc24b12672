use std::path::PathBuf;

use crate::projection::ProjectionParams;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    /// Log filter used when `BOXTRACK_LOG_LEVEL` is unset: tests and
    /// production only surface warnings.
    #[must_use]
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Environment::Development => "info",
            Environment::Test | Environment::Production => "warn",
        }
    }

    /// ANSI colour is only emitted on a developer's terminal.
    #[must_use]
    pub fn ansi_logs(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// YAML dataset to use instead of the compiled-in one.
    pub dataset_path: Option<PathBuf>,
    /// Overrides the dataset's target revenue.
    pub target_revenue: Option<u64>,
    /// Year assumed for parsed daily lines. When unset the parser infers it.
    pub reference_year: Option<i32>,
    pub final_week: u32,
    pub official_release_week: u32,
    pub theater_drop_week: u32,
}

impl AppConfig {
    /// Projection tunables with the configured week thresholds.
    #[must_use]
    pub fn projection_params(&self) -> ProjectionParams {
        ProjectionParams {
            final_week: self.final_week,
            official_release_week: self.official_release_week,
            theater_drop_week: self.theater_drop_week,
            ..ProjectionParams::default()
        }
    }
}
