use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─── Domain records ──────────────────────────────────────────────────────────

/// One already-parsed forecast sample. The engine only looks at these five
/// fields; everything else the feed sends is dropped at the wire boundary.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ForecastRecord {
    /// Local timestamp of the sample (the feed spaces these 3 h apart)
    pub timestamp: NaiveDateTime,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub cloud_cover_pct: f64,
    pub description: String,
}

/// Current observed conditions at the requested location.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub description: String,
    pub cloud_cover_pct: f64,
    pub humidity_pct: f64,
}

/// Per-day weather view: bucket aggregates plus the raw records, for the
/// presentation layer's expandable day rows.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WeatherDay {
    pub date: NaiveDate,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub description: String,
    pub avg_cloud_cover_pct: f64,
    pub avg_humidity_pct: f64,
    pub records: Vec<ForecastRecord>,
}

// ─── OpenWeatherMap wire types ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastItem {
    /// "yyyy-MM-dd HH:mm:ss", local to the forecast point
    pub dt_txt: String,
    pub main: MainReadings,
    pub clouds: CloudCover,
    pub weather: Vec<ConditionText>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    pub main: MainReadings,
    pub clouds: CloudCover,
    pub weather: Vec<ConditionText>,
}

#[derive(Debug, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Deserialize)]
pub struct CloudCover {
    pub all: f64,
}

#[derive(Debug, Deserialize)]
pub struct ConditionText {
    pub description: String,
}
