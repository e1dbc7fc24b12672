use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::{
    DailySnapshot, DataAnomaly, DataQuality, MovieInfo, MovieRanking, WeeklyRecord,
};
use crate::ConfigError;

/// Everything the reports are computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub movie: MovieInfo,
    /// Provisional figure newer than the last published week, if any.
    #[serde(default)]
    pub latest_daily: Option<DailySnapshot>,
    pub weekly: Vec<WeeklyRecord>,
    /// All-time national chart, highest revenue first.
    pub rankings: Vec<MovieRanking>,
    /// Revenue of the current record holder.
    pub target_revenue: u64,
}

/// Load and validate a dataset from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_dataset(path: &Path) -> Result<Dataset, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::DatasetFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let dataset: Dataset = serde_yaml::from_str(&content)?;
    validate_dataset(&dataset)?;

    Ok(dataset)
}

/// Check the ordering invariants the analytics rely on.
///
/// # Errors
///
/// Returns `ConfigError::Validation` describing the first violation found.
pub fn validate_dataset(dataset: &Dataset) -> Result<(), ConfigError> {
    if dataset.target_revenue == 0 {
        return Err(ConfigError::Validation(
            "target revenue must be positive".to_string(),
        ));
    }

    let mut previous: Option<&WeeklyRecord> = None;
    for (index, week) in dataset.weekly.iter().enumerate() {
        if usize::try_from(week.week).ok() != Some(index + 1) {
            return Err(ConfigError::Validation(format!(
                "weekly record at position {} has week {}; weeks must start at 1 without gaps",
                index + 1,
                week.week
            )));
        }
        if let Some(prev) = previous {
            if week.cumulative_revenue < prev.cumulative_revenue {
                return Err(ConfigError::Validation(format!(
                    "cumulative revenue decreases at week {}",
                    week.week
                )));
            }
            if week.cumulative_tickets < prev.cumulative_tickets {
                return Err(ConfigError::Validation(format!(
                    "cumulative tickets decrease at week {}",
                    week.week
                )));
            }
        }
        previous = Some(week);
    }

    let mut active = 0usize;
    for (index, entry) in dataset.rankings.iter().enumerate() {
        if usize::try_from(entry.rank).ok() != Some(index + 1) {
            return Err(ConfigError::Validation(format!(
                "ranking '{}' has rank {} at position {}",
                entry.title,
                entry.rank,
                index + 1
            )));
        }
        if index > 0 && entry.revenue > dataset.rankings[index - 1].revenue {
            return Err(ConfigError::Validation(format!(
                "ranking '{}' out of order: revenue exceeds the entry above it",
                entry.title
            )));
        }
        if entry.is_active {
            active += 1;
        }
    }
    if active > 1 {
        return Err(ConfigError::Validation(format!(
            "{active} ranking entries are marked active; at most one is allowed"
        )));
    }

    Ok(())
}

impl Dataset {
    /// The compiled-in tracking data for 陽光女子合唱團 (Sunshine Women's Choir).
    #[must_use]
    pub fn embedded() -> Self {
        let last_updated = datetime(2026, 2, 5, 22, 1, 35);
        Self {
            movie: MovieInfo {
                title: "陽光女子合唱團".to_string(),
                english_title: "Sunshine Women's Choir".to_string(),
                release_date: date(2025, 12, 31),
                rating: "輔12級".to_string(),
                runtime: "02:14:00".to_string(),
                distributor: "壹壹喜喜電影股份有限公司".to_string(),
                last_updated,
                data_quality: DataQuality {
                    last_updated,
                    data_source: "國家影視聽中心票房資訊系統".to_string(),
                    total_weeks: 9,
                    missing_data: Vec::new(),
                    anomalies: vec![
                        anomaly(2, "changeRate", "第 2 週增幅 878.33% 為試映期擴大戲院數"),
                        anomaly(4, "changeRate", "第 4 週增幅 1473.26% 為試映期轉正式上映前擴大"),
                        anomaly(5, "theaters", "第 5 週為正式上映，91 間戲院"),
                    ],
                },
            },
            latest_daily: Some(DailySnapshot {
                date: date(2026, 2, 4),
                day_of_week: "三".to_string(),
                daily_revenue: 11_423_000,
                cumulative_revenue: 428_952_000,
                cumulative_tickets: Some(1_558_415),
                updated_at: last_updated,
                is_estimate: true,
                note: None,
            }),
            weekly: vec![
                weekly(1, "2025/12/01~2025/12/07", 57_720, 222, 57_720, 222, None, 1),
                weekly(2, "2025/12/08~2025/12/14", 564_690, 2_112, 622_410, 2_334, Some(878.33), 6),
                weekly(3, "2025/12/15~2025/12/21", 142_920, 503, 765_330, 2_837, Some(-74.69), 2),
                weekly(4, "2025/12/22~2025/12/28", 2_248_502, 8_163, 3_013_832, 11_000, Some(1473.26), 88),
                weekly(5, "2025/12/29~2026/01/04", 7_463_509, 28_216, 10_477_341, 39_216, Some(231.93), 91),
                weekly(6, "2026/01/05~2026/01/11", 17_761_289, 66_033, 28_238_630, 105_249, Some(137.98), 90),
                weekly(7, "2026/01/12~2026/01/18", 67_685_840, 246_540, 95_924_470, 351_789, Some(281.09), 89),
                weekly(8, "2026/01/19~2026/01/25", 152_537_995, 550_716, 248_462_465, 902_505, Some(125.36), 88),
                weekly(9, "2026/01/26~2026/02/01", 145_240_298, 526_434, 393_702_763, 1_428_939, Some(-4.78), 90),
            ],
            rankings: vec![
                ranking(1, "海角七號", 534_351_817, 2008, false),
                ranking(2, "賽德克·巴萊（上）：太陽旗", 472_650_000, 2011, false),
                ranking(3, "那些年，我們一起追的女孩", 429_054_382, 2011, false),
                ranking(4, "陽光女子合唱團", 428_952_000, 2025, true),
                ranking(5, "大尾鱸鰻", 428_027_419, 2013, false),
                ranking(6, "我的少女時代", 410_000_000, 2015, false),
                ranking(7, "當男人戀愛時", 405_402_260, 2021, false),
                ranking(8, "關於我和鬼變成家人的那件事", 363_806_015, 2023, false),
                ranking(9, "KANO", 348_360_000, 2014, false),
                ranking(10, "陣頭", 317_499_033, 2012, false),
            ],
            target_revenue: 534_351_817,
        }
    }

    /// The tracked film's chart entry, if present.
    #[must_use]
    pub fn active_ranking(&self) -> Option<&MovieRanking> {
        self.rankings.iter().find(|m| m.is_active)
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn datetime(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, min, sec)
        .unwrap_or_default()
}

fn anomaly(week: u32, field: &str, note: &str) -> DataAnomaly {
    DataAnomaly {
        week,
        field: field.to_string(),
        note: note.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn weekly(
    week: u32,
    date_range: &str,
    revenue: u64,
    tickets: u64,
    cumulative_revenue: u64,
    cumulative_tickets: u64,
    change_rate: Option<f64>,
    theaters: u32,
) -> WeeklyRecord {
    WeeklyRecord {
        week,
        date_range: date_range.to_string(),
        revenue,
        tickets,
        cumulative_revenue,
        cumulative_tickets,
        change_rate,
        theaters,
    }
}

fn ranking(rank: u32, title: &str, revenue: u64, year: u16, is_active: bool) -> MovieRanking {
    MovieRanking {
        rank,
        title: title.to_string(),
        revenue,
        year,
        is_active,
    }
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
