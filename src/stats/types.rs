//! Result types produced by the aggregators.
//!
//! These are plain data, serializable for JSON output; all formatting
//! lives in the output layer.

use serde::Serialize;

/// Modes of the derived time fields. Each list holds every value tied for
/// the highest count, ascending; all three are empty for an empty view.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TimeStats {
    pub common_months: Vec<u32>,
    pub common_weekdays: Vec<u32>,
    pub common_hours: Vec<u32>,
}

/// Most popular start station, end station, and station pair.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StationStats {
    pub common_start: String,
    pub common_end: String,
    pub common_trip: (String, String),
}

/// Total travel time in days and mean trip length in minutes, both rounded
/// to one decimal.
#[derive(Debug, Serialize, PartialEq)]
pub struct DurationStats {
    pub total_days: f64,
    pub mean_minutes: f64,
}

/// One category of a distribution: its count and its share of the
/// distribution's denominator.
#[derive(Debug, Serialize, PartialEq)]
pub struct Bucket<K> {
    pub key: K,
    pub count: u64,
    pub share: f64,
}

/// A per-category row count without a share (user-type counts).
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Demographics sub-reports. Each is `None` when the source file lacks the
/// backing column, which is a normal condition rather than an error.
#[derive(Debug, Serialize, PartialEq)]
pub struct UserStats {
    pub user_types: Option<Vec<CategoryCount>>,
    pub genders: Option<Vec<Bucket<String>>>,
    pub birth_decades: Option<Vec<Bucket<i32>>>,
}

/// Everything one exploration cycle produces.
#[derive(Debug, Serialize, PartialEq)]
pub struct Report {
    pub city: String,
    pub month: String,
    pub day: String,
    pub rows: usize,
    pub time: TimeStats,
    pub stations: Option<StationStats>,
    pub duration: DurationStats,
    pub users: UserStats,
}
