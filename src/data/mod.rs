/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  day.csv / hour.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate + de-duplicate → BikeData
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ BikeData  │  Vec<DailyRecord>, Vec<HourlyRecord> (read-only)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  season / hour-range / working-day → index views
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ aggregate │  per-group sums, stats, five-number summaries
///   └──────────┘
/// ```
///
/// Data flows one way; nothing below writes back to the collections above.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
