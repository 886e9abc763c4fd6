use std::collections::BTreeMap;

use crate::color::ColorMap;
use crate::data::aggregate::{self, FiveNumber, MissingGroups, SummaryStats};
use crate::data::filter::{self, HourRange, SeasonSelection};
use crate::data::model::{BikeData, DailyRecord, Season, WeatherSituation};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Central-panel tabs, one per analysis question plus the write-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Seasons,
    WeekdayHours,
    Findings,
}

/// Seasonal view over the daily table: current selection, the filtered
/// index view, and the aggregates the charts and table consume.
pub struct SeasonView {
    pub selection: SeasonSelection,
    pub indices: Vec<usize>,
    pub totals: Vec<(Season, u64)>,
    pub stats: Vec<(Season, SummaryStats)>,
    pub spreads: Vec<(Season, FiveNumber)>,
    /// Weather composition of the current selection, canonical order.
    pub weather_mix: Vec<(WeatherSituation, usize)>,
}

/// Weekday view over the hourly table, always restricted to working days.
pub struct WeekdayView {
    /// Working-day base view; every refinement starts from this.
    pub working: Vec<usize>,
    /// Observed (min, max) hour of the working-day base, `None` when the
    /// base is empty. The range sliders are bounded by this, not by 0–23.
    pub hour_bounds: Option<(u8, u8)>,
    pub range: HourRange,
    pub selection: SeasonSelection,
    pub indices: Vec<usize>,
    pub totals: Vec<(u8, u64)>,
    pub stats: Vec<(u8, SummaryStats)>,
}

/// The full UI state. The dataset is the session handle: loaded once in
/// `main`, never mutated, only re-viewed through the cached index vectors.
pub struct AppState {
    pub data: BikeData,
    pub tab: Tab,
    pub seasonal: SeasonView,
    pub weekday: WeekdayView,
    pub season_colors: ColorMap<Season>,
    pub hour_colors: ColorMap<u8>,
}

impl AppState {
    pub fn new(data: BikeData) -> Self {
        let working = filter::working_days(&data.hourly);
        let hour_bounds = filter::observed_hour_bounds(&data.hourly, &working);
        let range = match hour_bounds {
            Some((min, max)) => HourRange { min, max },
            None => HourRange { min: 0, max: 23 },
        };

        let mut state = AppState {
            season_colors: ColorMap::from_keys(Season::CANONICAL_ORDER),
            hour_colors: ColorMap::from_keys(0u8..24),
            data,
            tab: Tab::Seasons,
            seasonal: SeasonView {
                selection: SeasonSelection::All,
                indices: Vec::new(),
                totals: Vec::new(),
                stats: Vec::new(),
                spreads: Vec::new(),
                weather_mix: Vec::new(),
            },
            weekday: WeekdayView {
                working,
                hour_bounds,
                range,
                selection: SeasonSelection::All,
                indices: Vec::new(),
                totals: Vec::new(),
                stats: Vec::new(),
            },
        };
        state.refilter_seasonal();
        state.refilter_weekday();
        state
    }

    /// Set the seasonal view's selection and recompute it.
    pub fn set_season(&mut self, selection: SeasonSelection) {
        self.seasonal.selection = selection;
        self.refilter_seasonal();
    }

    /// Set the weekday view's season selection and recompute it.
    pub fn set_weekday_season(&mut self, selection: SeasonSelection) {
        self.weekday.selection = selection;
        self.refilter_weekday();
    }

    /// Set the weekday view's hour range and recompute it. The widgets keep
    /// the pair ordered; an inverted range still only yields an empty view.
    pub fn set_hour_range(&mut self, range: HourRange) {
        self.weekday.range = range;
        self.refilter_weekday();
    }

    /// Recompute the seasonal view: filter → aggregate, cached for render.
    pub fn refilter_seasonal(&mut self) {
        let daily = &self.data.daily;
        let view = &mut self.seasonal;
        view.indices = filter::season_filter(daily, view.selection);

        let order = view.selection.order();
        // Zero-fill so the totals bar chart keeps one slot per season in
        // canonical order; stats and spreads stay present-groups-only.
        view.totals =
            aggregate::season_totals(daily, &view.indices, &order, MissingGroups::ZeroFill);
        view.stats = aggregate::season_stats(daily, &view.indices, &order);
        view.spreads = aggregate::season_spreads(daily, &view.indices, &order);
        view.weather_mix = weather_mix(daily, &view.indices);
    }

    /// Recompute the weekday view: filter → aggregate, cached for render.
    pub fn refilter_weekday(&mut self) {
        let hourly = &self.data.hourly;
        let view = &mut self.weekday;
        view.indices = filter::restrict_hours(hourly, &view.working, view.selection, view.range);

        // Ascending hour order over the selected range; empty when inverted.
        let hours: Vec<u8> = (view.range.min..=view.range.max).collect();
        view.totals = aggregate::hour_totals(hourly, &view.indices, &hours, MissingGroups::Omit);
        view.stats = aggregate::hour_stats(hourly, &view.indices, &hours);
    }
}

/// Count records per weather situation over an index view, canonical order,
/// present situations only.
fn weather_mix(records: &[DailyRecord], indices: &[usize]) -> Vec<(WeatherSituation, usize)> {
    let mut counts: BTreeMap<WeatherSituation, usize> = BTreeMap::new();
    for &i in indices {
        *counts.entry(records[i].weather).or_default() += 1;
    }
    WeatherSituation::ALL
        .iter()
        .filter_map(|&w| counts.get(&w).map(|&c| (w, c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{DailyRecord, HourlyRecord};
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2011, 1, d).unwrap()
    }

    fn sample_data() -> BikeData {
        let daily = vec![
            DailyRecord {
                date: date(1),
                season: Season::Fall,
                weather: WeatherSituation::Clear,
                working_day: true,
                rentals: 100,
            },
            DailyRecord {
                date: date(2),
                season: Season::Spring,
                weather: WeatherSituation::Cloudy,
                working_day: false,
                rentals: 20,
            },
            DailyRecord {
                date: date(3),
                season: Season::Fall,
                weather: WeatherSituation::Clear,
                working_day: true,
                rentals: 60,
            },
        ];
        // Working-day hours span 6..=20; the weekend row at hour 2 must not
        // influence the selector bounds.
        let mut hourly: Vec<HourlyRecord> = (6..=20)
            .map(|hour| HourlyRecord {
                date: date(1),
                hour,
                season: Season::Fall,
                weather: WeatherSituation::Clear,
                working_day: true,
                rentals: u32::from(hour) * 10,
            })
            .collect();
        hourly.push(HourlyRecord {
            date: date(2),
            hour: 2,
            season: Season::Spring,
            weather: WeatherSituation::Clear,
            working_day: false,
            rentals: 7,
        });
        BikeData { daily, hourly }
    }

    #[test]
    fn initial_range_matches_observed_working_day_bounds() {
        let state = AppState::new(sample_data());
        assert_eq!(state.weekday.hour_bounds, Some((6, 20)));
        assert_eq!(state.weekday.range, HourRange { min: 6, max: 20 });
        // All working-day rows selected up front.
        assert_eq!(state.weekday.indices.len(), 15);
    }

    #[test]
    fn season_selection_recomputes_the_seasonal_view() {
        let mut state = AppState::new(sample_data());
        assert_eq!(state.seasonal.indices.len(), 3);

        state.set_season(SeasonSelection::Only(Season::Fall));
        assert_eq!(state.seasonal.indices.len(), 2);
        assert_eq!(state.seasonal.totals, vec![(Season::Fall, 160)]);
        assert_eq!(
            state.seasonal.weather_mix,
            vec![(WeatherSituation::Clear, 2)]
        );
    }

    #[test]
    fn seasonal_totals_keep_all_canonical_slots() {
        // Seasons with no rows still get a zero bar under "All".
        let state = AppState::new(sample_data());
        let seasons: Vec<Season> = state.seasonal.totals.iter().map(|&(s, _)| s).collect();
        assert_eq!(seasons, Season::CANONICAL_ORDER.to_vec());
        assert_eq!(state.seasonal.totals[2], (Season::Summer, 0));
    }

    #[test]
    fn unmatched_selection_degrades_to_empty_views() {
        let mut state = AppState::new(sample_data());
        state.set_season(SeasonSelection::Only(Season::Winter));
        assert!(state.seasonal.indices.is_empty());
        assert!(state.seasonal.totals.is_empty());
        assert!(state.seasonal.stats.is_empty());
        assert!(state.seasonal.spreads.is_empty());
        assert!(state.seasonal.weather_mix.is_empty());
    }

    #[test]
    fn narrowing_the_hour_range_shrinks_the_weekday_view() {
        let mut state = AppState::new(sample_data());
        state.set_hour_range(HourRange { min: 8, max: 10 });
        let hours: Vec<u8> = state
            .weekday
            .indices
            .iter()
            .map(|&i| state.data.hourly[i].hour)
            .collect();
        assert_eq!(hours, vec![8, 9, 10]);
        assert_eq!(state.weekday.totals.len(), 3);
        assert_eq!(state.weekday.totals[0], (8, 80));
    }

    #[test]
    fn inverted_hour_range_yields_empty_weekday_view() {
        let mut state = AppState::new(sample_data());
        state.set_hour_range(HourRange { min: 9, max: 8 });
        assert!(state.weekday.indices.is_empty());
        assert!(state.weekday.totals.is_empty());
        assert!(state.weekday.stats.is_empty());
    }

    #[test]
    fn no_working_days_means_no_bounds_and_empty_weekday_view() {
        let data = BikeData {
            daily: Vec::new(),
            hourly: vec![HourlyRecord {
                date: date(1),
                hour: 12,
                season: Season::Summer,
                weather: WeatherSituation::Clear,
                working_day: false,
                rentals: 5,
            }],
        };
        let state = AppState::new(data);
        assert_eq!(state.weekday.hour_bounds, None);
        assert!(state.weekday.indices.is_empty());
        assert!(state.weekday.totals.is_empty());
    }
}
