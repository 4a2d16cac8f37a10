//! User demographics: user-type counts, gender distribution, and
//! birth-decade distribution.
//!
//! Each sub-report runs only when the source file carries its column; a
//! missing column is a normal condition, not an error. The two
//! distributions treat missing values differently on purpose: missing
//! genders count as an explicit "Unknown" category and stay in the
//! denominator, while rows without a birth year are dropped from both the
//! counts and the denominator.

use std::collections::BTreeMap;

use crate::dataset::FilteredView;
use crate::stats::types::{Bucket, CategoryCount, UserStats};
use crate::stats::utility::share;

/// Default bucket width for the birth-year distribution.
pub const DECADE: i32 = 10;

pub fn user_stats(view: &FilteredView) -> UserStats {
    UserStats {
        user_types: view.columns.user_type.then(|| user_type_counts(view)),
        genders: view.columns.gender.then(|| gender_distribution(view)),
        birth_decades: view
            .columns
            .birth_year
            .then(|| birth_decade_distribution(view, DECADE)),
    }
}

/// Count of rows per user-type category, ordered by category name. Rows
/// with no user-type value are left out, as in a grouped enumeration.
pub fn user_type_counts(view: &FilteredView) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for trip in &view.trips {
        if let Some(user_type) = &trip.user_type {
            *counts.entry(user_type).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect()
}

/// Gender distribution over every row in the view. Missing values are
/// bucketed as "Unknown"; shares are fractions of the full row count, so
/// they sum to 1.0 over all categories including Unknown.
pub fn gender_distribution(view: &FilteredView) -> Vec<Bucket<String>> {
    let total = view.len() as u64;
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for trip in &view.trips {
        let gender = trip.gender.as_deref().unwrap_or("Unknown");
        *counts.entry(gender).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(gender, count)| Bucket {
            key: gender.to_string(),
            count,
            share: share(count, total),
        })
        .collect()
}

/// Birth-decade distribution over rows with a known birth year only.
/// Rows without one are excluded from the counts and the denominator, so
/// shares sum to 1.0 over the known rows.
pub fn birth_decade_distribution(view: &FilteredView, granularity: i32) -> Vec<Bucket<i32>> {
    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    let mut known = 0u64;
    for trip in &view.trips {
        if let Some(year) = trip.birth_year {
            known += 1;
            *counts.entry(granularity * year.div_euclid(granularity)).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(decade, count)| Bucket {
            key: decade,
            count,
            share: share(count, known),
        })
        .collect()
}
