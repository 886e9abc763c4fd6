use std::fmt;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Season – categorical column, source-encoded as integer 1–4
// ---------------------------------------------------------------------------

/// Season of a rental record, mapped from the source's integer code.
///
/// The mapping is total on 1–4 and fails (returns `None`) on anything else;
/// unmapped codes must never slip through as bare numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Display order used by every season-keyed chart, table and selector.
    pub const CANONICAL_ORDER: [Season; 4] =
        [Season::Fall, Season::Spring, Season::Summer, Season::Winter];

    /// Map a source code (1–4) to a season.
    pub fn from_code(code: u8) -> Option<Season> {
        match code {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// WeatherSituation – categorical column, source-encoded as integer 1–4
// ---------------------------------------------------------------------------

/// Weather situation of a rental record, mapped from the source's
/// `weathersit` code. Same total-mapping rules as [`Season`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WeatherSituation {
    Clear,
    Cloudy,
    LightRain,
    HeavyRain,
}

impl WeatherSituation {
    pub const ALL: [WeatherSituation; 4] = [
        WeatherSituation::Clear,
        WeatherSituation::Cloudy,
        WeatherSituation::LightRain,
        WeatherSituation::HeavyRain,
    ];

    /// Map a source code (1–4) to a weather situation.
    pub fn from_code(code: u8) -> Option<WeatherSituation> {
        match code {
            1 => Some(WeatherSituation::Clear),
            2 => Some(WeatherSituation::Cloudy),
            3 => Some(WeatherSituation::LightRain),
            4 => Some(WeatherSituation::HeavyRain),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeatherSituation::Clear => "Clear",
            WeatherSituation::Cloudy => "Cloudy",
            WeatherSituation::LightRain => "Light Rain",
            WeatherSituation::HeavyRain => "Heavy Rain",
        }
    }
}

impl fmt::Display for WeatherSituation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Records – one row of each source table
// ---------------------------------------------------------------------------

/// One calendar day of rentals (one row of `day.csv`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub season: Season,
    pub weather: WeatherSituation,
    pub working_day: bool,
    /// Total rentals that day. Never negative in valid data.
    pub rentals: u32,
}

/// One hour of one day of rentals (one row of `hour.csv`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    /// Hour of day, 0–23.
    pub hour: u8,
    pub season: Season,
    pub weather: WeatherSituation,
    pub working_day: bool,
    pub rentals: u32,
}

// ---------------------------------------------------------------------------
// BikeData – the session handle
// ---------------------------------------------------------------------------

/// Both collections, loaded and validated once at startup and read-only
/// afterwards. Filtering works on index views into these vectors.
#[derive(Debug, Clone)]
pub struct BikeData {
    pub daily: Vec<DailyRecord>,
    pub hourly: Vec<HourlyRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_codes_map_one_to_one() {
        // Four distinct outputs covering the whole enum: a bijection on 1-4.
        let mapped: Vec<Season> = (1..=4).map(|c| Season::from_code(c).unwrap()).collect();
        assert_eq!(
            mapped,
            vec![Season::Spring, Season::Summer, Season::Fall, Season::Winter]
        );
    }

    #[test]
    fn out_of_range_codes_are_rejected() {
        assert_eq!(Season::from_code(0), None);
        assert_eq!(Season::from_code(5), None);
        assert_eq!(WeatherSituation::from_code(0), None);
        assert_eq!(WeatherSituation::from_code(255), None);
    }

    #[test]
    fn weather_codes_map_to_expected_labels() {
        let labels: Vec<&str> = (1..=4)
            .map(|c| WeatherSituation::from_code(c).unwrap().label())
            .collect();
        assert_eq!(labels, vec!["Clear", "Cloudy", "Light Rain", "Heavy Rain"]);
    }

    #[test]
    fn canonical_order_covers_every_season_once() {
        let mut seen = Season::CANONICAL_ORDER.to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 4);
        assert_eq!(Season::CANONICAL_ORDER[0], Season::Fall);
    }
}
