use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Demand over the day as a mixture of peaks (hour, width, amplitude) on a
/// constant floor.
fn hourly_profile(hour: f64, peaks: &[(f64, f64, f64)], floor: f64) -> f64 {
    floor
        + peaks
            .iter()
            .map(|&(mu, sigma, amp)| gaussian(hour, mu, sigma, amp))
            .sum::<f64>()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

// ---------------------------------------------------------------------------
// Output rows
// ---------------------------------------------------------------------------

#[derive(Serialize, Clone)]
struct DayRow {
    instant: i64,
    dteday: String,
    season: u8,
    yr: u8,
    mnth: u32,
    holiday: u8,
    weekday: u32,
    workingday: u8,
    weathersit: u8,
    temp: f64,
    atemp: f64,
    hum: f64,
    windspeed: f64,
    casual: i64,
    registered: i64,
    cnt: i64,
}

#[derive(Serialize, Clone)]
struct HourRow {
    instant: i64,
    dteday: String,
    season: u8,
    yr: u8,
    mnth: u32,
    hr: u32,
    holiday: u8,
    weekday: u32,
    workingday: u8,
    weathersit: u8,
    temp: f64,
    atemp: f64,
    hum: f64,
    windspeed: f64,
    casual: i64,
    registered: i64,
    cnt: i64,
}

// ---------------------------------------------------------------------------
// Synthesis rules
// ---------------------------------------------------------------------------

// Commute shape on working days, one broad leisure hump otherwise.
const COMMUTE_PEAKS: [(f64, f64, f64); 3] = [
    (8.0, 1.2, 260.0),
    (13.0, 4.0, 90.0),
    (17.5, 1.5, 300.0),
];
const LEISURE_PEAKS: [(f64, f64, f64); 1] = [(14.0, 3.5, 190.0)];

const HOLIDAYS_2011: [(u32, u32); 6] = [(1, 17), (4, 15), (7, 4), (9, 5), (11, 24), (12, 26)];

fn season_code(month: u32) -> u8 {
    match month {
        3..=5 => 1,
        6..=8 => 2,
        9..=11 => 3,
        _ => 4,
    }
}

fn season_factor(code: u8) -> f64 {
    match code {
        1 => 0.45,
        2 => 0.95,
        3 => 1.0,
        _ => 0.65,
    }
}

fn weather_factor(code: u8) -> f64 {
    match code {
        1 => 1.0,
        2 => 0.8,
        3 => 0.45,
        _ => 0.15,
    }
}

fn is_holiday(date: NaiveDate) -> bool {
    HOLIDAYS_2011.contains(&(date.month(), date.day()))
}

fn day_weather(rng: &mut SimpleRng) -> u8 {
    let roll = rng.next_f64();
    if roll < 0.62 {
        1
    } else if roll < 0.88 {
        2
    } else if roll < 0.98 {
        3
    } else {
        4
    }
}

/// Hourly weather mostly follows the day, with an occasional one-step drift.
fn hour_weather(day: u8, rng: &mut SimpleRng) -> u8 {
    if rng.next_f64() < 0.15 {
        let shift: i8 = if rng.next_f64() < 0.5 { -1 } else { 1 };
        (day as i8 + shift).clamp(1, 4) as u8
    } else {
        day
    }
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let start = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2011, 12, 31).unwrap();

    let mut days: Vec<DayRow> = Vec::new();
    let mut hours: Vec<HourRow> = Vec::new();

    let mut day_instant: i64 = 1;
    let mut hour_instant: i64 = 1;

    for date in start.iter_days().take_while(|d| *d <= end) {
        let season = season_code(date.month());
        let holiday = is_holiday(date);
        let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        let working = !weekend && !holiday;
        let weather = day_weather(&mut rng);

        // Normalized like the source data: degrees over a 0..1 scale.
        let day_of_year = date.ordinal() as f64;
        let base_temp = (0.5 - 0.3 * (2.0 * PI * day_of_year / 365.0).cos()
            + rng.gauss(0.0, 0.03))
        .clamp(0.0, 1.0);

        let (peaks, floor): (&[(f64, f64, f64)], f64) = if working {
            (&COMMUTE_PEAKS, 25.0)
        } else {
            (&LEISURE_PEAKS, 30.0)
        };

        let mut day_cnt: i64 = 0;
        let mut day_casual: i64 = 0;
        let mut day_registered: i64 = 0;

        for hr in 0..24u32 {
            let hour_wx = hour_weather(weather, &mut rng);
            let demand = hourly_profile(f64::from(hr), peaks, floor)
                * season_factor(season)
                * weather_factor(hour_wx)
                * rng.gauss(1.0, 0.08);
            let cnt = demand.round().max(0.0) as i64;

            let registered_share = if working { 0.85 } else { 0.6 };
            let registered = (cnt as f64 * registered_share).round() as i64;
            let casual = cnt - registered;

            let temp = (base_temp + 0.08 * gaussian(f64::from(hr), 15.0, 3.5, 1.0)
                + rng.gauss(0.0, 0.01))
            .clamp(0.0, 1.0);
            let atemp = (temp + rng.gauss(0.0, 0.02)).clamp(0.0, 1.0);
            let hum = (0.65 - 0.2 * (temp - 0.5) + rng.gauss(0.0, 0.05)).clamp(0.0, 1.0);
            let windspeed = (0.19 + rng.gauss(0.0, 0.05)).clamp(0.0, 0.6);

            hours.push(HourRow {
                instant: hour_instant,
                dteday: date.format("%Y-%m-%d").to_string(),
                season,
                yr: 0,
                mnth: date.month(),
                hr,
                holiday: holiday as u8,
                weekday: date.weekday().num_days_from_sunday(),
                workingday: working as u8,
                weathersit: hour_wx,
                temp: round4(temp),
                atemp: round4(atemp),
                hum: round4(hum),
                windspeed: round4(windspeed),
                casual,
                registered,
                cnt,
            });
            hour_instant += 1;

            day_cnt += cnt;
            day_casual += casual;
            day_registered += registered;
        }

        days.push(DayRow {
            instant: day_instant,
            dteday: date.format("%Y-%m-%d").to_string(),
            season,
            yr: 0,
            mnth: date.month(),
            holiday: holiday as u8,
            weekday: date.weekday().num_days_from_sunday(),
            workingday: working as u8,
            weathersit: weather,
            temp: round4(base_temp),
            atemp: round4((base_temp + rng.gauss(0.0, 0.02)).clamp(0.0, 1.0)),
            hum: round4((0.65 - 0.2 * (base_temp - 0.5) + rng.gauss(0.0, 0.05)).clamp(0.0, 1.0)),
            windspeed: round4((0.19 + rng.gauss(0.0, 0.05)).clamp(0.0, 0.6)),
            casual: day_casual,
            registered: day_registered,
            cnt: day_cnt,
        });
        day_instant += 1;
    }

    // A few duplicated export rows so de-duplication has work to do.
    for &i in &[9usize, 119, 239] {
        let dup = days[i].clone();
        days.push(dup);
    }
    for &i in &[99usize, 999, 4999] {
        let dup = hours[i].clone();
        hours.push(dup);
    }

    let mut day_writer = csv::Writer::from_path("day.csv").expect("Failed to create day.csv");
    for row in &days {
        day_writer.serialize(row).expect("Failed to write day row");
    }
    day_writer.flush().expect("Failed to flush day.csv");

    let mut hour_writer = csv::Writer::from_path("hour.csv").expect("Failed to create hour.csv");
    for row in &hours {
        hour_writer.serialize(row).expect("Failed to write hour row");
    }
    hour_writer.flush().expect("Failed to flush hour.csv");

    println!(
        "Wrote {} daily rows to day.csv and {} hourly rows to hour.csv",
        days.len(),
        hours.len()
    );
}
