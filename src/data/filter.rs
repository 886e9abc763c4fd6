use std::fmt;

use super::model::{DailyRecord, HourlyRecord, Season};

// ---------------------------------------------------------------------------
// Filter predicates
// ---------------------------------------------------------------------------

/// The season selector's value: "All" is a pass-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonSelection {
    All,
    Only(Season),
}

impl SeasonSelection {
    pub fn matches(self, season: Season) -> bool {
        match self {
            SeasonSelection::All => true,
            SeasonSelection::Only(s) => s == season,
        }
    }

    /// Group order for season-keyed aggregates under this selection: the
    /// canonical order for "All", the single chosen season otherwise.
    pub fn order(self) -> Vec<Season> {
        match self {
            SeasonSelection::All => Season::CANONICAL_ORDER.to_vec(),
            SeasonSelection::Only(s) => vec![s],
        }
    }
}

impl fmt::Display for SeasonSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonSelection::All => f.write_str("All"),
            SeasonSelection::Only(s) => f.write_str(s.label()),
        }
    }
}

/// Inclusive hour-of-day range. An inverted range (min > max) contains no
/// hour at all, so it filters to an empty view instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    pub min: u8,
    pub max: u8,
}

impl HourRange {
    pub fn contains(self, hour: u8) -> bool {
        self.min <= hour && hour <= self.max
    }
}

// ---------------------------------------------------------------------------
// Index filters – all return positions into the immutable base collections
// ---------------------------------------------------------------------------

/// Daily records matching the season selection.
pub fn season_filter(records: &[DailyRecord], selection: SeasonSelection) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| selection.matches(r.season))
        .map(|(i, _)| i)
        .collect()
}

/// Hourly records with `working_day == true`. This is the base the weekday
/// view refines; it is computed once per session.
pub fn working_days(records: &[HourlyRecord]) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.working_day)
        .map(|(i, _)| i)
        .collect()
}

/// Refine a base index view by season and inclusive hour range.
pub fn restrict_hours(
    records: &[HourlyRecord],
    base: &[usize],
    selection: SeasonSelection,
    range: HourRange,
) -> Vec<usize> {
    base.iter()
        .copied()
        .filter(|&i| {
            let r = &records[i];
            selection.matches(r.season) && range.contains(r.hour)
        })
        .collect()
}

/// Observed (min, max) hour over an index view, or `None` when the view is
/// empty. Drives the hour-range selector's bounds; never hardcoded to 0–23.
pub fn observed_hour_bounds(records: &[HourlyRecord], indices: &[usize]) -> Option<(u8, u8)> {
    let mut bounds: Option<(u8, u8)> = None;
    for &i in indices {
        let hour = records[i].hour;
        bounds = Some(match bounds {
            Some((lo, hi)) => (lo.min(hour), hi.max(hour)),
            None => (hour, hour),
        });
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::WeatherSituation;
    use chrono::NaiveDate;

    fn day(d: u32, season: Season, rentals: u32) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(2011, 1, d).unwrap(),
            season,
            weather: WeatherSituation::Clear,
            working_day: true,
            rentals,
        }
    }

    fn hour_rec(hour: u8, season: Season, working_day: bool, rentals: u32) -> HourlyRecord {
        HourlyRecord {
            date: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
            hour,
            season,
            weather: WeatherSituation::Clear,
            working_day,
            rentals,
        }
    }

    #[test]
    fn all_selection_is_a_pass_through() {
        let records = vec![
            day(1, Season::Spring, 10),
            day(2, Season::Fall, 20),
            day(3, Season::Winter, 30),
        ];
        assert_eq!(season_filter(&records, SeasonSelection::All), vec![0, 1, 2]);
    }

    #[test]
    fn single_season_keeps_only_matches() {
        let records = vec![
            day(1, Season::Spring, 10),
            day(2, Season::Fall, 20),
            day(3, Season::Spring, 30),
        ];
        let idx = season_filter(&records, SeasonSelection::Only(Season::Spring));
        assert_eq!(idx, vec![0, 2]);
    }

    #[test]
    fn filtered_view_is_a_subset_and_filtering_is_idempotent() {
        let records: Vec<HourlyRecord> = (0..24)
            .map(|h| hour_rec(h, Season::Summer, h % 2 == 0, h as u32))
            .collect();
        let base = working_days(&records);
        assert!(base.iter().all(|&i| i < records.len()));
        assert!(base.iter().all(|&i| records[i].working_day));

        let range = HourRange { min: 4, max: 10 };
        let once = restrict_hours(&records, &base, SeasonSelection::All, range);
        let twice = restrict_hours(&records, &once, SeasonSelection::All, range);
        assert_eq!(once, twice);
        assert!(once.iter().all(|&i| base.contains(&i)));
    }

    #[test]
    fn hour_range_bounds_are_inclusive() {
        let records: Vec<HourlyRecord> = (0..24)
            .map(|h| hour_rec(h, Season::Summer, true, 1))
            .collect();
        let base = working_days(&records);
        let idx = restrict_hours(
            &records,
            &base,
            SeasonSelection::All,
            HourRange { min: 7, max: 9 },
        );
        let hours: Vec<u8> = idx.iter().map(|&i| records[i].hour).collect();
        assert_eq!(hours, vec![7, 8, 9]);
    }

    #[test]
    fn inverted_range_yields_empty_not_error() {
        let records: Vec<HourlyRecord> = (0..24)
            .map(|h| hour_rec(h, Season::Summer, true, 1))
            .collect();
        let base = working_days(&records);
        let idx = restrict_hours(
            &records,
            &base,
            SeasonSelection::All,
            HourRange { min: 9, max: 8 },
        );
        assert!(idx.is_empty());
    }

    #[test]
    fn unmatched_season_yields_empty_not_error() {
        let records = vec![day(1, Season::Summer, 10)];
        let idx = season_filter(&records, SeasonSelection::Only(Season::Winter));
        assert!(idx.is_empty());
    }

    #[test]
    fn bounds_come_from_the_working_day_subset() {
        // Working-day hours observed in [6, 20]; weekend rows cover 0-23 and
        // must not widen the bounds.
        let mut records: Vec<HourlyRecord> = (6..=20)
            .map(|h| hour_rec(h, Season::Fall, true, 5))
            .collect();
        records.extend((0..24).map(|h| hour_rec(h, Season::Fall, false, 5)));
        let base = working_days(&records);
        assert_eq!(observed_hour_bounds(&records, &base), Some((6, 20)));
    }

    #[test]
    fn bounds_of_an_empty_view_are_none() {
        let records: Vec<HourlyRecord> = Vec::new();
        assert_eq!(observed_hour_bounds(&records, &[]), None);
    }
}
