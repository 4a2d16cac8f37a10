//! Free-text filter resolution against fixed city/month/day vocabularies.
//!
//! Matching is prefix-based and case-insensitive. City resolution accepts
//! the first vocabulary match; month and day resolution require a unique
//! match and reject ambiguous input so the prompt loop can ask again.

use crate::error::{Error, FilterKind, Result};

/// The fixed vocabularies a resolver matches against.
///
/// Injected rather than hard-coded so tests can substitute smaller sets.
/// The month and day lists both start with the "All" sentinel, which is why
/// [`Vocabularies::month_number`] and [`Vocabularies::weekday_number`] exist:
/// the sentinel shifts every real calendar index by one.
#[derive(Debug, Clone)]
pub struct Vocabularies {
    pub cities: Vec<String>,
    pub months: Vec<String>,
    pub days: Vec<String>,
}

impl Default for Vocabularies {
    fn default() -> Self {
        let own = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        Vocabularies {
            cities: own(&["Chicago", "New York City", "Washington"]),
            // Only the first half of the year has data in the source files.
            months: own(&["All", "January", "February", "March", "April", "May", "June"]),
            days: own(&[
                "All",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ]),
        }
    }
}

impl Vocabularies {
    /// Resolves a city token. If several cities share the prefix, the first
    /// one in vocabulary order wins; only a zero-match input fails.
    pub fn resolve_city(&self, token: &str) -> Result<String> {
        let matches = prefix_matches(&self.cities, token);
        matches.into_iter().next().ok_or_else(|| Error::NoMatch {
            kind: FilterKind::City,
            input: token.to_string(),
        })
    }

    /// Resolves a month token ("All" or a month name prefix). Requires a
    /// unique match.
    pub fn resolve_month(&self, token: &str) -> Result<String> {
        resolve_unique(&self.months, token, FilterKind::Month)
    }

    /// Resolves a day-of-week token ("All" or a weekday name prefix).
    /// Requires a unique match.
    pub fn resolve_day(&self, token: &str) -> Result<String> {
        resolve_unique(&self.days, token, FilterKind::Day)
    }

    /// Calendar month number (1-12) for a resolved month selector, or
    /// `None` for "All". The 1-based value is exactly the selector's
    /// position in the vocabulary because "All" occupies index 0.
    pub fn month_number(&self, selector: &str) -> Option<u32> {
        self.months
            .iter()
            .position(|m| m == selector)
            .filter(|&i| i > 0)
            .map(|i| i as u32)
    }

    /// Weekday number (0 = Monday) for a resolved day selector, or `None`
    /// for "All". One less than the vocabulary position, again because of
    /// the leading "All" entry.
    pub fn weekday_number(&self, selector: &str) -> Option<u32> {
        self.days
            .iter()
            .position(|d| d == selector)
            .filter(|&i| i > 0)
            .map(|i| (i - 1) as u32)
    }
}

fn prefix_matches(entries: &[String], token: &str) -> Vec<String> {
    let needle = token.trim().to_lowercase();
    entries
        .iter()
        .filter(|e| e.to_lowercase().starts_with(&needle))
        .cloned()
        .collect()
}

fn resolve_unique(entries: &[String], token: &str, kind: FilterKind) -> Result<String> {
    let mut matches = prefix_matches(entries, token);
    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(Error::NoMatch {
            kind,
            input: token.to_string(),
        }),
        _ => Err(Error::Ambiguous {
            kind,
            input: token.to_string(),
            matches,
        }),
    }
}
