use std::collections::BTreeMap;

use super::model::{DailyRecord, HourlyRecord, Season};

// ---------------------------------------------------------------------------
// Aggregate result types
// ---------------------------------------------------------------------------

/// How sum aggregates treat groups from the requested order that have no
/// records in the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingGroups {
    /// Leave absent groups out of the result.
    Omit,
    /// Emit absent groups with a zero total, for display continuity.
    ZeroFill,
}

/// Per-group descriptive statistics over rental counts.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub mean: f64,
    pub median: f64,
    pub min: u32,
    pub max: u32,
}

/// Five-number summary of a group, the shape a box plot draws.
/// Quartiles interpolate linearly between order statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct FiveNumber {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

// ---------------------------------------------------------------------------
// Season-keyed aggregates (daily view)
// ---------------------------------------------------------------------------

/// Total rentals per season, emitted in the caller's order.
/// An empty view produces an empty result, even under `ZeroFill`.
pub fn season_totals(
    records: &[DailyRecord],
    indices: &[usize],
    order: &[Season],
    missing: MissingGroups,
) -> Vec<(Season, u64)> {
    if indices.is_empty() {
        return Vec::new();
    }
    let groups = group_rentals(indices.iter().map(|&i| (records[i].season, records[i].rentals)));
    totals_in_order(&groups, order, missing)
}

/// Mean/median/min/max of daily rentals per season, groups present only.
pub fn season_stats(
    records: &[DailyRecord],
    indices: &[usize],
    order: &[Season],
) -> Vec<(Season, SummaryStats)> {
    let groups = group_rentals(indices.iter().map(|&i| (records[i].season, records[i].rentals)));
    stats_in_order(&groups, order)
}

/// Five-number summary of daily rentals per season, groups present only.
pub fn season_spreads(
    records: &[DailyRecord],
    indices: &[usize],
    order: &[Season],
) -> Vec<(Season, FiveNumber)> {
    let groups = group_rentals(indices.iter().map(|&i| (records[i].season, records[i].rentals)));
    order
        .iter()
        .filter_map(|&season| groups.get(&season).map(|vals| (season, five_number(vals))))
        .collect()
}

// ---------------------------------------------------------------------------
// Hour-keyed aggregates (weekday view)
// ---------------------------------------------------------------------------

/// Total rentals per hour, emitted in the caller's (ascending) order.
pub fn hour_totals(
    records: &[HourlyRecord],
    indices: &[usize],
    order: &[u8],
    missing: MissingGroups,
) -> Vec<(u8, u64)> {
    if indices.is_empty() {
        return Vec::new();
    }
    let groups = group_rentals(indices.iter().map(|&i| (records[i].hour, records[i].rentals)));
    totals_in_order(&groups, order, missing)
}

/// Mean/median/min/max of hourly rentals per hour, groups present only.
pub fn hour_stats(
    records: &[HourlyRecord],
    indices: &[usize],
    order: &[u8],
) -> Vec<(u8, SummaryStats)> {
    let groups = group_rentals(indices.iter().map(|&i| (records[i].hour, records[i].rentals)));
    stats_in_order(&groups, order)
}

// ---------------------------------------------------------------------------
// Group-by core
// ---------------------------------------------------------------------------

fn group_rentals<K: Ord + Copy>(pairs: impl Iterator<Item = (K, u32)>) -> BTreeMap<K, Vec<u32>> {
    let mut groups: BTreeMap<K, Vec<u32>> = BTreeMap::new();
    for (key, rentals) in pairs {
        groups.entry(key).or_default().push(rentals);
    }
    groups
}

fn totals_in_order<K: Ord + Copy>(
    groups: &BTreeMap<K, Vec<u32>>,
    order: &[K],
    missing: MissingGroups,
) -> Vec<(K, u64)> {
    order
        .iter()
        .filter_map(|&key| match (groups.get(&key), missing) {
            (Some(vals), _) => Some((key, vals.iter().map(|&v| u64::from(v)).sum())),
            (None, MissingGroups::ZeroFill) => Some((key, 0)),
            (None, MissingGroups::Omit) => None,
        })
        .collect()
}

fn stats_in_order<K: Ord + Copy>(
    groups: &BTreeMap<K, Vec<u32>>,
    order: &[K],
) -> Vec<(K, SummaryStats)> {
    order
        .iter()
        .filter_map(|&key| groups.get(&key).map(|vals| (key, summarize(vals))))
        .collect()
}

// Grouped value vectors are non-empty by construction, so the statistics
// below never see an empty slice.

fn summarize(values: &[u32]) -> SummaryStats {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let sum: u64 = sorted.iter().map(|&v| u64::from(v)).sum();
    SummaryStats {
        mean: sum as f64 / sorted.len() as f64,
        median: quantile_sorted(&sorted, 0.5),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    }
}

fn five_number(values: &[u32]) -> FiveNumber {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    FiveNumber {
        min: f64::from(sorted[0]),
        q1: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q3: quantile_sorted(&sorted, 0.75),
        max: f64::from(sorted[sorted.len() - 1]),
    }
}

/// Quantile of an ascending-sorted slice, linearly interpolated between the
/// two nearest order statistics.
fn quantile_sorted(sorted: &[u32], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return f64::from(sorted[0]);
    }
    let pos = (n - 1) as f64 * q;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    f64::from(sorted[lo]) + (f64::from(sorted[hi]) - f64::from(sorted[lo])) * frac
}
