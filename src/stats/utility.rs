//! Small numeric helpers shared by the aggregators.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

/// All values tied for the highest occurrence count, ascending. Empty
/// input yields an empty list.
pub fn modes<T>(values: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Hash + Eq + Ord,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let Some(max) = counts.values().copied().max() else {
        return Vec::new();
    };
    let mut tied: Vec<T> = counts
        .into_iter()
        .filter(|(_, c)| *c == max)
        .map(|(v, _)| v)
        .collect();
    tied.sort();
    tied
}

/// The single most frequent value, with count ties broken by whichever
/// value appeared first in the input. `None` for empty input.
pub fn mode_first<T>(values: impl IntoIterator<Item = T>) -> Option<T>
where
    T: Hash + Eq,
{
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (i, v) in values.into_iter().enumerate() {
        counts.entry(v).or_insert((0, i)).0 += 1;
    }
    counts
        .into_iter()
        .max_by_key(|&(_, (count, first))| (count, Reverse(first)))
        .map(|(v, _)| v)
}

/// `part / total` as a fraction, 0.0 when the denominator is zero.
pub fn share(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
