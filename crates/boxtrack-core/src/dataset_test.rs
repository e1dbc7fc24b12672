use std::io::Write;
use std::path::Path;

use super::*;

fn repo_dataset_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("dataset.yaml")
}

#[test]
fn embedded_dataset_is_valid() {
    assert!(validate_dataset(&Dataset::embedded()).is_ok());
}

#[test]
fn embedded_dataset_shape() {
    let dataset = Dataset::embedded();
    assert_eq!(dataset.weekly.len(), 9);
    assert_eq!(dataset.rankings.len(), 10);
    assert_eq!(dataset.target_revenue, 534_351_817);
    assert_eq!(dataset.weekly[8].cumulative_revenue, 393_702_763);
    assert_eq!(
        dataset.active_ranking().map(|m| m.title.as_str()),
        Some("陽光女子合唱團")
    );
    assert_eq!(
        u32::try_from(dataset.weekly.len()).unwrap(),
        dataset.movie.data_quality.total_weeks
    );
}

#[test]
fn repository_yaml_matches_embedded() {
    let path = repo_dataset_path();
    assert!(
        path.exists(),
        "dataset.yaml missing at {path:?} — required for this test"
    );
    let loaded = load_dataset(&path).expect("repository dataset should load");
    assert_eq!(loaded, Dataset::embedded());
}

#[test]
fn load_dataset_missing_file_is_io_error() {
    let err = load_dataset(Path::new("/nonexistent/boxtrack/dataset.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::DatasetFileIo { .. }));
}

#[test]
fn load_dataset_rejects_malformed_yaml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "weekly: [this is not a dataset").unwrap();
    let err = load_dataset(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::DatasetFileParse(_)));
}

#[test]
fn load_dataset_validates_after_parsing() {
    let mut dataset = Dataset::embedded();
    dataset.target_revenue = 0;
    let yaml = serde_yaml::to_string(&dataset).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    let err = load_dataset(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn validate_rejects_week_gap() {
    let mut dataset = Dataset::embedded();
    dataset.weekly.remove(3);
    let err = validate_dataset(&dataset).unwrap_err();
    assert!(err.to_string().contains("without gaps"), "{err}");
}

#[test]
fn validate_rejects_decreasing_cumulative_revenue() {
    let mut dataset = Dataset::embedded();
    dataset.weekly[5].cumulative_revenue = 1;
    let err = validate_dataset(&dataset).unwrap_err();
    assert!(err.to_string().contains("cumulative revenue decreases at week 6"), "{err}");
}

#[test]
fn validate_rejects_decreasing_cumulative_tickets() {
    let mut dataset = Dataset::embedded();
    dataset.weekly[2].cumulative_tickets = 0;
    let err = validate_dataset(&dataset).unwrap_err();
    assert!(err.to_string().contains("cumulative tickets decrease at week 3"), "{err}");
}

#[test]
fn validate_rejects_unsorted_rankings() {
    let mut dataset = Dataset::embedded();
    dataset.rankings[9].revenue = 600_000_000;
    let err = validate_dataset(&dataset).unwrap_err();
    assert!(err.to_string().contains("out of order"), "{err}");
}

#[test]
fn validate_rejects_misnumbered_rankings() {
    let mut dataset = Dataset::embedded();
    dataset.rankings[0].rank = 2;
    let err = validate_dataset(&dataset).unwrap_err();
    assert!(err.to_string().contains("has rank 2 at position 1"), "{err}");
}

#[test]
fn validate_rejects_multiple_active_entries() {
    let mut dataset = Dataset::embedded();
    dataset.rankings[0].is_active = true;
    let err = validate_dataset(&dataset).unwrap_err();
    assert!(err.to_string().contains("2 ranking entries are marked active"), "{err}");
}

#[test]
fn validate_accepts_empty_weekly_series() {
    let mut dataset = Dataset::embedded();
    dataset.weekly.clear();
    dataset.latest_daily = None;
    assert!(validate_dataset(&dataset).is_ok());
}
