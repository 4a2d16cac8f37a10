//! Console rendering of a finished report.
//!
//! The aggregators return plain data; everything about presentation,
//! including mapping derived month/weekday numbers back to names, lives
//! here.

use std::fmt::Write;

use anyhow::Result;

use crate::filters::Vocabularies;
use crate::stats::types::Report;

/// Renders the report as the human-readable text block the interactive
/// loop prints.
pub fn format_report(report: &Report, vocab: &Vocabularies) -> String {
    let mut out = String::new();
    let divider = "-".repeat(40);

    let _ = writeln!(
        out,
        "{} trips in {} (month: {}, day: {})",
        report.rows, report.city, report.month, report.day
    );
    out.push_str(&divider);
    out.push('\n');

    if report.rows == 0 {
        out.push_str("No trips match the chosen filters.\n");
        return out;
    }

    out.push_str("Most frequent times of travel:\n");
    let _ = writeln!(
        out,
        "- Most common month: {}",
        join_names(&report.time.common_months, |m| month_name(vocab, *m))
    );
    let _ = writeln!(
        out,
        "- Most common day of week: {}",
        join_names(&report.time.common_weekdays, |d| weekday_name(vocab, *d))
    );
    let _ = writeln!(
        out,
        "- Most common hour of day: {}",
        join_names(&report.time.common_hours, u32::to_string)
    );

    if let Some(stations) = &report.stations {
        out.push_str("Most popular stations and trip:\n");
        let _ = writeln!(out, "- Most common start station: \"{}\"", stations.common_start);
        let _ = writeln!(out, "- Most common end station: \"{}\"", stations.common_end);
        let _ = writeln!(
            out,
            "- Most common journey: \"{}\" -> \"{}\"",
            stations.common_trip.0, stations.common_trip.1
        );
    }

    out.push_str("Trip duration:\n");
    let _ = writeln!(out, "- Total time traveled: {} days", report.duration.total_days);
    let _ = writeln!(
        out,
        "- Average trip duration: {} minutes",
        report.duration.mean_minutes
    );

    if let Some(user_types) = &report.users.user_types {
        out.push_str("Count of users by type:\n");
        for entry in user_types {
            let _ = writeln!(out, "- {}: {}", entry.category, entry.count);
        }
    }
    if let Some(genders) = &report.users.genders {
        out.push_str("Count of users by gender:\n");
        for bucket in genders {
            let _ = writeln!(out, "- {}: {}%", bucket.key, percent(bucket.share));
        }
    }
    if let Some(decades) = &report.users.birth_decades {
        out.push_str("Birth year distribution:\n");
        for bucket in decades {
            let _ = writeln!(out, "- {}s: {}%", bucket.key, percent(bucket.share));
        }
    }

    out.push_str(&divider);
    out.push('\n');
    out
}

/// Prints the report as text to stdout.
pub fn print_report(report: &Report, vocab: &Vocabularies) {
    print!("{}", format_report(report, vocab));
}

/// Prints the report as pretty JSON to stdout.
pub fn print_json(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn month_name(vocab: &Vocabularies, month: u32) -> String {
    // month 1 is vocabulary index 1; index 0 is the "All" sentinel
    vocab
        .months
        .get(month as usize)
        .cloned()
        .unwrap_or_else(|| month.to_string())
}

fn weekday_name(vocab: &Vocabularies, weekday: u32) -> String {
    vocab
        .days
        .get(weekday as usize + 1)
        .cloned()
        .unwrap_or_else(|| weekday.to_string())
}

fn join_names<T>(values: &[T], name: impl Fn(&T) -> String) -> String {
    values.iter().map(name).collect::<Vec<_>>().join(", ")
}

fn percent(share: f64) -> f64 {
    (share * 10_000.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::types::{Bucket, DurationStats, TimeStats, UserStats};

    fn report(rows: usize) -> Report {
        Report {
            city: "Chicago".to_string(),
            month: "March".to_string(),
            day: "All".to_string(),
            rows,
            time: TimeStats {
                common_months: vec![3],
                common_weekdays: vec![0, 4],
                common_hours: vec![8],
            },
            stations: None,
            duration: DurationStats {
                total_days: 1.5,
                mean_minutes: 12.3,
            },
            users: UserStats {
                user_types: None,
                genders: Some(vec![Bucket {
                    key: "Unknown".to_string(),
                    count: 1,
                    share: 0.2,
                }]),
                birth_decades: None,
            },
        }
    }

    #[test]
    fn test_format_report_names_and_percentages() {
        let text = format_report(&report(5), &Vocabularies::default());
        assert!(text.contains("Most common month: March"));
        assert!(text.contains("Most common day of week: Monday, Friday"));
        assert!(text.contains("- Unknown: 20%"));
        assert!(text.contains("Total time traveled: 1.5 days"));
    }

    #[test]
    fn test_format_report_empty_view() {
        let text = format_report(&report(0), &Vocabularies::default());
        assert!(text.contains("No trips match"));
        assert!(!text.contains("Most common month"));
    }

    #[test]
    fn test_percent_rounds_to_two_decimals() {
        assert_eq!(percent(1.0 / 3.0), 33.33);
        assert_eq!(percent(0.2), 20.0);
    }
}
