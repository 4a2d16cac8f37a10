use std::path::PathBuf;

use bikeshare_explorer::dataset::{CityRegistry, load_data};
use bikeshare_explorer::filters::Vocabularies;
use bikeshare_explorer::stats;
use bikeshare_explorer::stats::users::{birth_decade_distribution, gender_distribution};

fn fixture_registry() -> CityRegistry {
    let fixtures = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    CityRegistry::new(vec![
        ("Metropolis".to_string(), fixtures.join("metropolis.csv")),
        ("Capital".to_string(), fixtures.join("capital.csv")),
    ])
}

#[test]
fn test_all_all_filter_is_identity() {
    let registry = fixture_registry();
    let vocab = Vocabularies::default();

    let view = load_data(&registry, &vocab, "Metropolis", "All", "All").unwrap();
    assert_eq!(view.len(), 5);
}

#[test]
fn test_march_filter_station_stats() {
    let registry = fixture_registry();
    let vocab = Vocabularies::default();

    let view = load_data(&registry, &vocab, "Metropolis", "March", "All").unwrap();
    assert_eq!(view.len(), 2);
    assert!(view.trips.iter().all(|t| t.month == 3));

    let stations = stats::stations::station_stats(&view).unwrap();
    assert_eq!(stations.common_start, "A");
    assert_eq!(stations.common_end, "B");
    assert_eq!(stations.common_trip, ("A".to_string(), "B".to_string()));
}

#[test]
fn test_day_filter_matches_weekday_only() {
    let registry = fixture_registry();
    let vocab = Vocabularies::default();

    // Two fixture trips started on a Friday
    let view = load_data(&registry, &vocab, "Metropolis", "All", "Friday").unwrap();
    assert_eq!(view.len(), 2);
    assert!(view.trips.iter().all(|t| t.weekday == 4));
}

#[test]
fn test_gender_distribution_on_unfiltered_set() {
    let registry = fixture_registry();
    let vocab = Vocabularies::default();

    let view = load_data(&registry, &vocab, "Metropolis", "All", "All").unwrap();
    let dist = gender_distribution(&view);

    let unknown = dist.iter().find(|b| b.key == "Unknown").unwrap();
    assert!((unknown.share - 0.2).abs() < 1e-9);

    let known: f64 = dist
        .iter()
        .filter(|b| b.key != "Unknown")
        .map(|b| b.share)
        .sum();
    assert!((known - 0.8).abs() < 1e-9);
}

#[test]
fn test_birth_decades_skip_missing_years() {
    let registry = fixture_registry();
    let vocab = Vocabularies::default();

    let view = load_data(&registry, &vocab, "Metropolis", "All", "All").unwrap();
    let dist = birth_decade_distribution(&view, 10);

    // 4 of 5 rows carry a birth year: 1972, 1989, 1991, 1995
    let decades: Vec<i32> = dist.iter().map(|b| b.key).collect();
    assert_eq!(decades, vec![1970, 1980, 1990]);
    assert_eq!(dist.iter().map(|b| b.count).sum::<u64>(), 4);

    let sum: f64 = dist.iter().map(|b| b.share).sum();
    assert!((sum - 1.0).abs() < 1e-9);
}

#[test]
fn test_demographics_skipped_without_columns() {
    let registry = fixture_registry();
    let vocab = Vocabularies::default();

    let view = load_data(&registry, &vocab, "Capital", "All", "All").unwrap();
    assert!(view.columns.user_type);
    assert!(!view.columns.gender);
    assert!(!view.columns.birth_year);

    let report = stats::report(&view, "All", "All");
    let user_types = report.users.user_types.as_ref().unwrap();
    assert_eq!(user_types.len(), 2);
    assert!(report.users.genders.is_none());
    assert!(report.users.birth_decades.is_none());
}

#[test]
fn test_full_report_over_march_view() {
    let registry = fixture_registry();
    let vocab = Vocabularies::default();

    let view = load_data(&registry, &vocab, "Metropolis", "March", "All").unwrap();
    let report = stats::report(&view, "March", "All");

    assert_eq!(report.rows, 2);
    assert_eq!(report.time.common_months, vec![3]);
    // 600s + 1200s = 0.0 days total, 15.0 minutes mean
    assert_eq!(report.duration.total_days, 0.0);
    assert_eq!(report.duration.mean_minutes, 15.0);
}

#[test]
fn test_repeated_loads_are_identical() {
    let registry = fixture_registry();
    let vocab = Vocabularies::default();

    let first = load_data(&registry, &vocab, "Metropolis", "April", "All").unwrap();
    let second = load_data(&registry, &vocab, "Metropolis", "April", "All").unwrap();

    assert_eq!(first.len(), second.len());
    assert_eq!(
        stats::report(&first, "April", "All"),
        stats::report(&second, "April", "All")
    );
}

#[test]
fn test_empty_view_degrades_gracefully() {
    let registry = fixture_registry();
    let vocab = Vocabularies::default();

    // No fixture trips in January
    let view = load_data(&registry, &vocab, "Metropolis", "January", "All").unwrap();
    assert!(view.is_empty());

    let report = stats::report(&view, "January", "All");
    assert!(report.time.common_months.is_empty());
    assert!(report.stations.is_none());
    assert_eq!(report.duration.total_days, 0.0);
    assert_eq!(report.duration.mean_minutes, 0.0);
}
