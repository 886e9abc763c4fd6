use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::error::DataFormatError;
use super::model::{BikeData, DailyRecord, HourlyRecord, Season, WeatherSituation};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and validate both rental tables. Called exactly once, before the UI
/// starts; the returned [`BikeData`] is the immutable session handle.
pub fn load(day_path: &Path, hour_path: &Path) -> Result<BikeData, DataFormatError> {
    let daily = load_daily(day_path)?;
    let hourly = load_hourly(hour_path)?;
    Ok(BikeData { daily, hourly })
}

/// Load the daily table (`day.csv` layout).
pub fn load_daily(path: &Path) -> Result<Vec<DailyRecord>, DataFormatError> {
    let file = File::open(path).map_err(|source| DataFormatError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_daily(file, path)
}

/// Load the hourly table (`hour.csv` layout).
pub fn load_hourly(path: &Path) -> Result<Vec<HourlyRecord>, DataFormatError> {
    let file = File::open(path).map_err(|source| DataFormatError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_hourly(file, path)
}

// ---------------------------------------------------------------------------
// Raw rows – the source columns we decode, everything else is ignored
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawDaily {
    dteday: String,
    season: u8,
    weathersit: u8,
    workingday: u8,
    cnt: i64,
}

#[derive(Debug, Deserialize)]
struct RawHourly {
    dteday: String,
    hr: i64,
    season: u8,
    weathersit: u8,
    workingday: u8,
    cnt: i64,
}

const DAILY_COLUMNS: [&str; 5] = ["dteday", "season", "weathersit", "workingday", "cnt"];
const HOURLY_COLUMNS: [&str; 6] = ["dteday", "hr", "season", "weathersit", "workingday", "cnt"];

// ---------------------------------------------------------------------------
// CSV readers
// ---------------------------------------------------------------------------

fn read_daily<R: io::Read>(input: R, path: &Path) -> Result<Vec<DailyRecord>, DataFormatError> {
    let mut reader = csv_reader(input);
    require_columns(&mut reader, path, &DAILY_COLUMNS)?;

    let mut parsed = Vec::new();
    for (i, result) in reader.deserialize::<RawDaily>().enumerate() {
        let row = i + 2; // header is line 1
        let raw = result.map_err(|source| DataFormatError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let fields = validate_common(
            path,
            row,
            &raw.dteday,
            raw.season,
            raw.weathersit,
            raw.workingday,
            raw.cnt,
        )?;
        parsed.push(DailyRecord {
            date: fields.date,
            season: fields.season,
            weather: fields.weather,
            working_day: fields.working_day,
            rentals: fields.rentals,
        });
    }

    let before = parsed.len();
    let records = dedup_daily(parsed);
    if records.len() < before {
        log::debug!(
            "{}: dropped {} duplicate daily rows",
            path.display(),
            before - records.len()
        );
    }
    Ok(records)
}

fn read_hourly<R: io::Read>(input: R, path: &Path) -> Result<Vec<HourlyRecord>, DataFormatError> {
    let mut reader = csv_reader(input);
    require_columns(&mut reader, path, &HOURLY_COLUMNS)?;

    let mut parsed = Vec::new();
    for (i, result) in reader.deserialize::<RawHourly>().enumerate() {
        let row = i + 2;
        let raw = result.map_err(|source| DataFormatError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let fields = validate_common(
            path,
            row,
            &raw.dteday,
            raw.season,
            raw.weathersit,
            raw.workingday,
            raw.cnt,
        )?;
        let hour = match raw.hr {
            h @ 0..=23 => h as u8,
            other => {
                return Err(DataFormatError::HourOutOfRange {
                    path: path.to_path_buf(),
                    row,
                    value: other,
                })
            }
        };
        parsed.push(HourlyRecord {
            date: fields.date,
            hour,
            season: fields.season,
            weather: fields.weather,
            working_day: fields.working_day,
            rentals: fields.rentals,
        });
    }

    let before = parsed.len();
    let records = dedup_hourly(parsed);
    if records.len() < before {
        log::debug!(
            "{}: dropped {} duplicate hourly rows",
            path.display(),
            before - records.len()
        );
    }
    Ok(records)
}

fn csv_reader<R: io::Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input)
}

fn require_columns<R: io::Read>(
    reader: &mut csv::Reader<R>,
    path: &Path,
    required: &[&'static str],
) -> Result<(), DataFormatError> {
    let headers = reader.headers().map_err(|source| DataFormatError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    for &column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(DataFormatError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Row validation
// ---------------------------------------------------------------------------

struct CommonFields {
    date: NaiveDate,
    season: Season,
    weather: WeatherSituation,
    working_day: bool,
    rentals: u32,
}

/// Validate the columns shared by both tables, with the source row number
/// attached to every failure.
fn validate_common(
    path: &Path,
    row: usize,
    raw_date: &str,
    season_code: u8,
    weather_code: u8,
    workingday: u8,
    cnt: i64,
) -> Result<CommonFields, DataFormatError> {
    let date = parse_date(path, row, raw_date)?;
    let season =
        Season::from_code(season_code).ok_or_else(|| DataFormatError::UnknownSeasonCode {
            path: path.to_path_buf(),
            row,
            code: season_code,
        })?;
    let weather = WeatherSituation::from_code(weather_code).ok_or_else(|| {
        DataFormatError::UnknownWeatherCode {
            path: path.to_path_buf(),
            row,
            code: weather_code,
        }
    })?;
    let working_day = match workingday {
        0 => false,
        1 => true,
        other => {
            return Err(DataFormatError::InvalidWorkingDay {
                path: path.to_path_buf(),
                row,
                value: other,
            })
        }
    };
    if cnt < 0 {
        return Err(DataFormatError::NegativeCount {
            path: path.to_path_buf(),
            row,
            value: cnt,
        });
    }
    Ok(CommonFields {
        date,
        season,
        weather,
        working_day,
        rentals: cnt as u32,
    })
}

fn parse_date(path: &Path, row: usize, value: &str) -> Result<NaiveDate, DataFormatError> {
    // ISO dates are the documented layout; the slash variant shows up in
    // spreadsheet re-exports of the same data.
    const FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .ok_or_else(|| DataFormatError::InvalidDate {
            path: path.to_path_buf(),
            row,
            value: value.to_string(),
        })
}

// ---------------------------------------------------------------------------
// De-duplication – composite key, first occurrence wins
// ---------------------------------------------------------------------------

fn dedup_daily(records: Vec<DailyRecord>) -> Vec<DailyRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert((r.date, r.season)))
        .collect()
}

fn dedup_hourly(records: Vec<HourlyRecord>) -> Vec<HourlyRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert((r.date, r.hour, r.season)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src() -> &'static Path {
        Path::new("test.csv")
    }

    const DAILY_HEADER: &str = "dteday,season,weathersit,workingday,cnt\n";
    const HOURLY_HEADER: &str = "dteday,hr,season,weathersit,workingday,cnt\n";

    fn daily(body: &str) -> Result<Vec<DailyRecord>, DataFormatError> {
        let csv = format!("{DAILY_HEADER}{body}");
        read_daily(csv.as_bytes(), src())
    }

    fn hourly(body: &str) -> Result<Vec<HourlyRecord>, DataFormatError> {
        let csv = format!("{HOURLY_HEADER}{body}");
        read_hourly(csv.as_bytes(), src())
    }

    #[test]
    fn parses_and_maps_daily_rows() {
        let records = daily(
            "2011-01-03,1,1,1,120\n\
             2011-07-15,2,2,0,431\n",
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2011, 1, 3).unwrap());
        assert_eq!(records[0].season, Season::Spring);
        assert_eq!(records[0].weather, WeatherSituation::Clear);
        assert!(records[0].working_day);
        assert_eq!(records[0].rentals, 120);
        assert_eq!(records[1].season, Season::Summer);
        assert_eq!(records[1].weather, WeatherSituation::Cloudy);
        assert!(!records[1].working_day);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "instant,dteday,season,yr,weathersit,workingday,casual,cnt\n\
                   1,2011-01-01,4,0,3,0,12,85\n";
        let records = read_daily(csv.as_bytes(), src()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].season, Season::Winter);
        assert_eq!(records[0].weather, WeatherSituation::LightRain);
        assert_eq!(records[0].rentals, 85);
    }

    #[test]
    fn slash_dates_are_accepted() {
        let records = daily("2011/02/01,1,1,1,50\n").unwrap();
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2011, 2, 1).unwrap());
    }

    #[test]
    fn unparseable_date_is_a_load_error() {
        let err = daily("01-02-2011,1,1,1,50\n").unwrap_err();
        assert!(matches!(err, DataFormatError::InvalidDate { row: 2, .. }));
    }

    #[test]
    fn out_of_range_season_code_fails_loudly() {
        let err = daily("2011-01-01,5,1,1,50\n").unwrap_err();
        assert!(matches!(
            err,
            DataFormatError::UnknownSeasonCode { row: 2, code: 5, .. }
        ));
    }

    #[test]
    fn out_of_range_weather_code_fails_loudly() {
        let err = daily("2011-01-01,1,9,1,50\n").unwrap_err();
        assert!(matches!(
            err,
            DataFormatError::UnknownWeatherCode { code: 9, .. }
        ));
    }

    #[test]
    fn bad_working_day_flag_fails() {
        let err = daily("2011-01-01,1,1,2,50\n").unwrap_err();
        assert!(matches!(
            err,
            DataFormatError::InvalidWorkingDay { value: 2, .. }
        ));
    }

    #[test]
    fn negative_count_fails() {
        let err = daily("2011-01-01,1,1,1,-3\n").unwrap_err();
        assert!(matches!(
            err,
            DataFormatError::NegativeCount { value: -3, .. }
        ));
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let csv = "dteday,season,weathersit,workingday\n2011-01-01,1,1,1\n";
        let err = read_daily(csv.as_bytes(), src()).unwrap_err();
        assert!(matches!(
            err,
            DataFormatError::MissingColumn { column: "cnt", .. }
        ));
    }

    #[test]
    fn hour_out_of_range_fails() {
        let err = hourly("2011-01-01,24,1,1,1,10\n").unwrap_err();
        assert!(matches!(
            err,
            DataFormatError::HourOutOfRange { value: 24, .. }
        ));
    }

    #[test]
    fn duplicate_daily_rows_keep_first_occurrence() {
        let records = daily(
            "2011-01-01,1,1,1,100\n\
             2011-01-02,1,1,1,200\n\
             2011-01-01,1,2,0,999\n",
        )
        .unwrap();
        // Third row repeats (date, season) of the first; the first wins and
        // source order is otherwise preserved.
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].rentals, 100);
        assert_eq!(records[1].rentals, 200);
    }

    #[test]
    fn duplicate_hourly_rows_keyed_by_date_hour_season() {
        let records = hourly(
            "2011-01-01,8,1,1,1,40\n\
             2011-01-01,9,1,1,1,55\n\
             2011-01-01,8,1,1,1,70\n\
             2011-01-01,8,2,1,1,70\n",
        )
        .unwrap();
        // Same date+hour with a different season is a distinct key.
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].rentals, 40);
    }

    #[test]
    fn dedup_is_idempotent() {
        let records = daily(
            "2011-01-01,1,1,1,100\n\
             2011-01-01,1,1,1,150\n\
             2011-03-05,2,1,1,300\n",
        )
        .unwrap();
        let again = dedup_daily(records.clone());
        assert_eq!(again, records);
    }

    #[test]
    fn empty_body_loads_as_empty_collection() {
        let records = daily("").unwrap();
        assert!(records.is_empty());
    }
}
