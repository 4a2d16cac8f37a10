//! Most popular start station, end station, and station pair.

use crate::dataset::FilteredView;
use crate::stats::types::StationStats;
use crate::stats::utility::mode_first;

/// `None` on an empty view, where no mode is defined.
pub fn station_stats(view: &FilteredView) -> Option<StationStats> {
    let common_start = mode_first(view.trips.iter().map(|t| t.start_station.as_str()))?;
    let common_end = mode_first(view.trips.iter().map(|t| t.end_station.as_str()))?;
    let (trip_start, trip_end) = mode_first(
        view.trips
            .iter()
            .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
    )?;

    Some(StationStats {
        common_start: common_start.to_string(),
        common_end: common_end.to_string(),
        common_trip: (trip_start.to_string(), trip_end.to_string()),
    })
}
