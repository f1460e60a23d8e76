//! Staleness and turnaround calculations.
//!
//! "Staleness" is how long a set has sat without forward motion: whole days
//! since the most recent recorded status transition. The most specific
//! (latest-stage) date wins; a set that never moved falls back to its
//! creation date.

use chrono::NaiveDate;
use planforge_models::DrawingSet;

/// Whole days since the set's last recorded status movement.
///
/// Fallback chain, first non-null wins: `bfs_date`, `bfa_date`, `ifa_date`,
/// `created_date`. Dates that failed to parse upstream are already absent
/// here, so they fall through to the next candidate. A movement date in the
/// future clamps to 0 rather than going negative.
pub fn days_since_movement(set: &DrawingSet, today: NaiveDate) -> i64 {
    let last_movement = set
        .bfs_date
        .or(set.bfa_date)
        .or(set.ifa_date)
        .unwrap_or(set.created_date);

    (today - last_movement).num_days().max(0)
}

/// Review turnaround in whole days: `bfa_date - ifa_date`.
///
/// Only meaningful when both dates are present and the span is
/// non-negative; anything else yields `None` and is excluded from the
/// portfolio average.
pub fn turnaround_days(set: &DrawingSet) -> Option<i64> {
    let ifa = set.ifa_date?;
    let bfa = set.bfa_date?;

    let days = (bfa - ifa).num_days();
    if days < 0 {
        return None;
    }
    Some(days)
}
