//! Most frequent times of travel: month, weekday, and start hour.

use crate::dataset::FilteredView;
use crate::stats::types::TimeStats;
use crate::stats::utility::modes;

pub fn time_stats(view: &FilteredView) -> TimeStats {
    TimeStats {
        common_months: modes(view.trips.iter().map(|t| t.month)),
        common_weekdays: modes(view.trips.iter().map(|t| t.weekday)),
        common_hours: modes(view.trips.iter().map(|t| t.hour)),
    }
}
