use std::path::PathBuf;
use std::str::FromStr;

use crate::app_config::{AppConfig, Environment};
use crate::projection::MAX_FINAL_WEEK;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration from an env-var lookup function so tests can use a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let env = parse_environment(&or_default("BOXTRACK_ENV", "development"))?;
    let log_level = or_default("BOXTRACK_LOG_LEVEL", env.default_log_level());
    let dataset_path = optional("BOXTRACK_DATASET_PATH").map(PathBuf::from);

    let target_revenue = optional("BOXTRACK_TARGET_REVENUE")
        .map(|raw| parse_value::<u64>("BOXTRACK_TARGET_REVENUE", &raw))
        .transpose()?;
    if target_revenue == Some(0) {
        return Err(ConfigError::InvalidEnvVar {
            var: "BOXTRACK_TARGET_REVENUE".to_string(),
            reason: "target revenue must be positive".to_string(),
        });
    }

    let reference_year = optional("BOXTRACK_REFERENCE_YEAR")
        .map(|raw| parse_value::<i32>("BOXTRACK_REFERENCE_YEAR", &raw))
        .transpose()?;

    let final_week =
        parse_value::<u32>("BOXTRACK_FINAL_WEEK", &or_default("BOXTRACK_FINAL_WEEK", "13"))?;
    let official_release_week = parse_value::<u32>(
        "BOXTRACK_OFFICIAL_RELEASE_WEEK",
        &or_default("BOXTRACK_OFFICIAL_RELEASE_WEEK", "5"),
    )?;
    let theater_drop_week = parse_value::<u32>(
        "BOXTRACK_THEATER_DROP_WEEK",
        &or_default("BOXTRACK_THEATER_DROP_WEEK", "11"),
    )?;
    validate_weeks(final_week, official_release_week, theater_drop_week)?;

    Ok(AppConfig {
        env,
        log_level,
        dataset_path,
        target_revenue,
        reference_year,
        final_week,
        official_release_week,
        theater_drop_week,
    })
}

fn validate_weeks(
    final_week: u32,
    official_release_week: u32,
    theater_drop_week: u32,
) -> Result<(), ConfigError> {
    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    if final_week == 0 || final_week > MAX_FINAL_WEEK {
        return Err(invalid(
            "BOXTRACK_FINAL_WEEK",
            format!("final week must be between 1 and {MAX_FINAL_WEEK}, got {final_week}"),
        ));
    }
    if official_release_week == 0 || official_release_week > final_week {
        return Err(invalid(
            "BOXTRACK_OFFICIAL_RELEASE_WEEK",
            format!(
                "official release week must be between 1 and the final week ({final_week}), got {official_release_week}"
            ),
        ));
    }
    // One past the final week disables the drop.
    if theater_drop_week == 0 || theater_drop_week > final_week + 1 {
        return Err(invalid(
            "BOXTRACK_THEATER_DROP_WEEK",
            format!(
                "theater drop week must be between 1 and {}, got {theater_drop_week}",
                final_week + 1
            ),
        ));
    }
    Ok(())
}

fn parse_value<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BOXTRACK_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
