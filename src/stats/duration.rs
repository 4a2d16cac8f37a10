//! Total and mean trip duration.

use crate::dataset::FilteredView;
use crate::stats::types::DurationStats;
use crate::stats::utility::round1;

const SECS_PER_DAY: f64 = 86_400.0;
const SECS_PER_MINUTE: f64 = 60.0;

/// Total travel time in days and mean trip length in minutes, rounded to
/// one decimal. An empty view reports zeros.
pub fn duration_stats(view: &FilteredView) -> DurationStats {
    let total_secs: f64 = view.trips.iter().map(|t| t.duration_secs).sum();
    let mean_secs = if view.is_empty() {
        0.0
    } else {
        total_secs / view.len() as f64
    };

    DurationStats {
        total_days: round1(total_secs / SECS_PER_DAY),
        mean_minutes: round1(mean_secs / SECS_PER_MINUTE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{ColumnSet, FilteredView, Trip};

    fn trip(duration_secs: f64) -> Trip {
        let start_time = chrono::NaiveDate::from_ymd_opt(2017, 3, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Trip {
            start_time,
            end_time: start_time,
            duration_secs,
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            user_type: None,
            gender: None,
            birth_year: None,
            year: 2017,
            month: 3,
            weekday: 2,
            hour: 8,
            age: None,
        }
    }

    fn view(trips: Vec<Trip>) -> FilteredView {
        FilteredView {
            city: "Test".to_string(),
            columns: ColumnSet::default(),
            trips,
        }
    }

    #[test]
    fn test_duration_stats() {
        // one day + one hour total, 12.5 hours mean
        let v = view(vec![trip(86_400.0), trip(3_600.0)]);
        let stats = duration_stats(&v);
        assert_eq!(stats.total_days, 1.0);
        assert_eq!(stats.mean_minutes, 750.0);
    }

    #[test]
    fn test_duration_stats_rounding() {
        let v = view(vec![trip(100.0), trip(101.0)]);
        let stats = duration_stats(&v);
        // mean 100.5s = 1.675 min, rounded to 1.7
        assert_eq!(stats.mean_minutes, 1.7);
        assert_eq!(stats.total_days, 0.0);
    }

    #[test]
    fn test_duration_stats_empty_view() {
        let stats = duration_stats(&view(vec![]));
        assert_eq!(stats.total_days, 0.0);
        assert_eq!(stats.mean_minutes, 0.0);
    }
}
