//! Summary-statistic aggregators over a filtered trip view.
//!
//! Each submodule computes one independent category of statistic; they
//! share nothing but the [`FilteredView`](crate::dataset::FilteredView)
//! they read. [`report`] runs all four and bundles the results.

pub mod duration;
pub mod stations;
pub mod time;
pub mod types;
pub mod users;
pub mod utility;

use std::time::Instant;

use tracing::debug;

use crate::dataset::FilteredView;
use crate::stats::types::Report;

/// Runs every aggregator over `view` and collects the results, recording
/// the applied month/day selectors for the output layer.
pub fn report(view: &FilteredView, month: &str, day: &str) -> Report {
    let started = Instant::now();

    let time = time::time_stats(view);
    let stations = stations::station_stats(view);
    let duration = duration::duration_stats(view);
    let users = users::user_stats(view);

    debug!(
        rows = view.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Aggregation complete"
    );

    Report {
        city: view.city.clone(),
        month: month.to_string(),
        day: day.to_string(),
        rows: view.len(),
        time,
        stations,
        duration,
        users,
    }
}
