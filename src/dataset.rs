//! Dataset loading, derived-field computation, and month/day filtering.
//!
//! Each exploration cycle reads the city's CSV from disk, parses the
//! timestamp columns, derives the time fields once, applies the resolved
//! month/day restriction, and hands the resulting [`FilteredView`] to the
//! aggregators. Nothing is cached across cycles.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::filters::Vocabularies;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maps city display names to their backing CSV files.
#[derive(Debug, Clone)]
pub struct CityRegistry {
    sources: Vec<(String, PathBuf)>,
}

impl CityRegistry {
    /// Registry with explicit (city, path) pairs, for tests and custom data.
    pub fn new(sources: Vec<(String, PathBuf)>) -> Self {
        CityRegistry { sources }
    }

    /// The built-in three-city registry, with files under `data_dir`.
    pub fn from_dir(data_dir: &Path) -> Self {
        let entry = |city: &str, file: &str| (city.to_string(), data_dir.join(file));
        CityRegistry {
            sources: vec![
                entry("Chicago", "chicago.csv"),
                entry("New York City", "new_york_city.csv"),
                entry("Washington", "washington.csv"),
            ],
        }
    }

    pub fn source_for(&self, city: &str) -> Result<&Path> {
        self.sources
            .iter()
            .find(|(name, _)| name == city)
            .map(|(_, path)| path.as_path())
            .ok_or_else(|| Error::DatasetNotFound(city.to_string()))
    }
}

/// One CSV row as it appears on disk. The source files carry a leading
/// unnamed index column, which serde ignores, and encode birth years as
/// floats ("1992.0").
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    duration_secs: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// A trip record with its derived time fields computed at load.
#[derive(Debug, Clone)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // derived from start_time
    pub year: i32,
    pub month: u32,
    pub weekday: u32,
    pub hour: u32,
    pub age: Option<i32>,
}

impl Trip {
    fn from_raw(raw: RawTrip, row: usize) -> Result<Self> {
        let start_time = parse_timestamp(&raw.start_time, row)?;
        let end_time = parse_timestamp(&raw.end_time, row)?;

        let year = start_time.year();
        let birth_year = raw.birth_year.map(|y| y as i32);

        Ok(Trip {
            start_time,
            end_time,
            duration_secs: raw.duration_secs,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: raw.user_type,
            gender: raw.gender,
            birth_year,
            year,
            month: start_time.month(),
            weekday: start_time.weekday().num_days_from_monday(),
            hour: start_time.hour(),
            age: birth_year.map(|b| year - b),
        })
    }
}

fn parse_timestamp(value: &str, row: usize) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| Error::Timestamp {
        row,
        value: value.to_string(),
    })
}

/// Which optional columns the source file carries. Read from the CSV
/// header, so a column that exists but is empty in every row still counts
/// as present.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnSet {
    pub user_type: bool,
    pub gender: bool,
    pub birth_year: bool,
}

impl ColumnSet {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let has = |name: &str| headers.iter().any(|h| h == name);
        ColumnSet {
            user_type: has("User Type"),
            gender: has("Gender"),
            birth_year: has("Birth Year"),
        }
    }
}

/// A city's trips restricted to the resolved month/day selectors, plus the
/// schema flags the demographics aggregator needs.
#[derive(Debug, Clone)]
pub struct FilteredView {
    pub city: String,
    pub columns: ColumnSet,
    pub trips: Vec<Trip>,
}

impl FilteredView {
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }
}

/// Loads the dataset for `city` and filters it by the resolved `month` and
/// `day` selectors ("All" leaves that axis unrestricted).
///
/// # Errors
///
/// Returns [`Error::DatasetNotFound`] for an unregistered city, and I/O,
/// CSV, or timestamp errors if the backing file cannot be read.
pub fn load_data(
    registry: &CityRegistry,
    vocab: &Vocabularies,
    city: &str,
    month: &str,
    day: &str,
) -> Result<FilteredView> {
    let path = registry.source_for(city)?;
    debug!(city, path = %path.display(), "Loading city dataset");

    let mut reader = csv::Reader::from_path(path)?;
    let columns = ColumnSet::from_headers(reader.headers()?);

    let mut trips = Vec::new();
    for (row, record) in reader.deserialize::<RawTrip>().enumerate() {
        trips.push(Trip::from_raw(record?, row)?);
    }
    let loaded = trips.len();

    let month_filter = vocab.month_number(month);
    let day_filter = vocab.weekday_number(day);

    if let Some(m) = month_filter {
        trips.retain(|t| t.month == m);
    }
    if let Some(d) = day_filter {
        trips.retain(|t| t.weekday == d);
    }

    info!(
        city,
        month,
        day,
        loaded,
        filtered = trips.len(),
        "Dataset ready"
    );

    Ok(FilteredView {
        city: city.to_string(),
        columns,
        trips,
    })
}
