use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDate, Timelike, Utc};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::Config;
use crate::error::FeedError;
use crate::models::forecast::WeatherDay;
use crate::models::solar::{ArrayConfig, GeoCoordinate};
use crate::services::{forecast_grouper, report_service, weather_service};
use crate::shared_state::SharedState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LocationQuery {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

/// Report parameters. Array fields left out fall back to the configured
/// default arrays; `date`/`hour` fall back to the server's UTC clock when
/// the client does not send its local time.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    pub lat: f64,
    pub lon: f64,
    /// Client-local calendar date (ISO), e.g. 2024-06-21
    pub date: Option<NaiveDate>,
    /// Client-local hour, 0-23
    pub hour: Option<u32>,
    pub kwp1: Option<f64>,
    pub azimuth1: Option<f64>,
    pub tilt1: Option<f64>,
    pub efficiency1: Option<f64>,
    pub losses1: Option<f64>,
    pub kwp2: Option<f64>,
    pub azimuth2: Option<f64>,
    pub tilt2: Option<f64>,
    pub efficiency2: Option<f64>,
    pub losses2: Option<f64>,
}

/// GET /api/config/arrays
/// List the configured default arrays
///
/// Returns the two array configurations used when a report request does
/// not override them.
#[utoipa::path(
    get,
    path = "/api/config/arrays",
    responses(
        (status = 200, description = "Default array configurations", body = Vec<ArrayConfig>)
    )
)]
pub async fn list_default_arrays(State(config): State<Config>) -> Response {
    Json(vec![config.array1, config.array2]).into_response()
}

/// GET /api/weather/current
/// Current observed conditions at the coordinates
///
/// Returns temperature, description, cloud cover and humidity as reported
/// by the weather provider.
#[utoipa::path(
    get,
    path = "/api/weather/current",
    params(LocationQuery),
    responses(
        (status = 200, description = "Current conditions", body = crate::models::forecast::CurrentConditions),
        (status = 502, description = "Weather feed unavailable or malformed")
    )
)]
pub async fn get_current_weather(
    Query(query): Query<LocationQuery>,
    State(state): State<SharedState>,
) -> Response {
    match weather_service::fetch_current(&state.http, &state.config.weather, query.lat, query.lon)
        .await
    {
        Ok(conditions) => (StatusCode::OK, Json(conditions)).into_response(),
        Err(e) => feed_error_response(e),
    }
}

/// GET /api/weather/forecast
/// Per-day weather summaries for the next days
///
/// Groups the provider's 3-hour forecast series into calendar days and
/// returns up to 5 day summaries (fewer when the feed is short), each with
/// its raw records for the expandable detail view.
#[utoipa::path(
    get,
    path = "/api/weather/forecast",
    params(LocationQuery),
    responses(
        (status = 200, description = "Day summaries, earliest first", body = Vec<WeatherDay>),
        (status = 502, description = "Weather feed unavailable, empty or malformed")
    )
)]
pub async fn get_weather_forecast(
    Query(query): Query<LocationQuery>,
    State(state): State<SharedState>,
) -> Response {
    let records = match weather_service::fetch_forecast(
        &state.http,
        &state.config.weather,
        query.lat,
        query.lon,
    )
    .await
    {
        Ok(records) => records,
        Err(e) => return feed_error_response(e),
    };

    let days: Vec<WeatherDay> = forecast_grouper::group_by_day(&records)
        .into_iter()
        .take(report_service::FORECAST_HORIZON_DAYS)
        .map(|bucket| {
            let (temp_min, temp_max) = bucket.temp_range();
            WeatherDay {
                date: bucket.date,
                temp_min_c: temp_min,
                temp_max_c: temp_max,
                description: bucket.dominant_description(),
                avg_cloud_cover_pct: bucket.avg_cloud_cover(),
                avg_humidity_pct: bucket.avg_humidity(),
                records: bucket.records,
            }
        })
        .collect();

    (StatusCode::OK, Json(days)).into_response()
}

/// GET /api/solar/report
/// Full solar yield report for two arrays
///
/// Computes the current-hour estimate, the theoretical hourly maxima, and
/// per-day yield summaries with hour-by-hour breakdowns for up to 5
/// forecast days.
#[utoipa::path(
    get,
    path = "/api/solar/report",
    params(ReportQuery),
    responses(
        (status = 200, description = "Complete yield report", body = crate::models::solar::SolarReport),
        (status = 502, description = "Weather feed unavailable, empty or malformed")
    )
)]
pub async fn get_solar_report(
    Query(query): Query<ReportQuery>,
    State(state): State<SharedState>,
) -> Response {
    let current = match weather_service::fetch_current(
        &state.http,
        &state.config.weather,
        query.lat,
        query.lon,
    )
    .await
    {
        Ok(conditions) => conditions,
        Err(e) => return feed_error_response(e),
    };

    let records = match weather_service::fetch_forecast(
        &state.http,
        &state.config.weather,
        query.lat,
        query.lon,
    )
    .await
    {
        Ok(records) => records,
        Err(e) => return feed_error_response(e),
    };

    let now = Utc::now();
    let date = query.date.unwrap_or_else(|| now.date_naive());
    let hour = query.hour.unwrap_or_else(|| now.hour()).min(23);

    let defaults = &state.config;
    let array1 = ArrayConfig {
        kwp: query.kwp1.unwrap_or(defaults.array1.kwp),
        azimuth_deg: query.azimuth1.unwrap_or(defaults.array1.azimuth_deg),
        tilt_deg: query.tilt1.unwrap_or(defaults.array1.tilt_deg),
        efficiency_pct: query.efficiency1.unwrap_or(defaults.array1.efficiency_pct),
        losses_pct: query.losses1.unwrap_or(defaults.array1.losses_pct),
    };
    let array2 = ArrayConfig {
        kwp: query.kwp2.unwrap_or(defaults.array2.kwp),
        azimuth_deg: query.azimuth2.unwrap_or(defaults.array2.azimuth_deg),
        tilt_deg: query.tilt2.unwrap_or(defaults.array2.tilt_deg),
        efficiency_pct: query.efficiency2.unwrap_or(defaults.array2.efficiency_pct),
        losses_pct: query.losses2.unwrap_or(defaults.array2.losses_pct),
    };

    let location = GeoCoordinate { latitude: query.lat, longitude: query.lon };
    let report = report_service::build_report(
        location,
        date,
        hour,
        current.cloud_cover_pct,
        &records,
        &array1,
        &array2,
    );

    (StatusCode::OK, Json(report)).into_response()
}

fn feed_error_response(error: FeedError) -> Response {
    eprintln!("[FEED] {}", error);
    (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({
            "kind": error.kind(),
            "error": error.to_string(),
        })),
    )
        .into_response()
}
