use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─── Request-scoped inputs ───────────────────────────────────────────────────

/// WGS84 point, degrees. Not validated beyond being finite doubles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Physical parameters of one PV array. Two independent instances exist per
/// report request. Values outside nominal ranges (tilt > 90 etc.) are
/// computed through the formulas unclamped; rejecting them is the
/// configuration loader's job, not the engine's.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct ArrayConfig {
    /// Nameplate capacity in kWp
    pub kwp: f64,
    /// Panel azimuth in degrees, 180 = south
    pub azimuth_deg: f64,
    /// Panel inclination from horizontal, degrees
    pub tilt_deg: f64,
    /// Module efficiency in percent
    pub efficiency_pct: f64,
    /// System losses in percent (cabling, inverter, soiling)
    pub losses_pct: f64,
}

// ─── Derived geometry ────────────────────────────────────────────────────────

/// Sun position for one (latitude, date, hour). Azimuth is 0 by convention
/// whenever the sun is below the horizon.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct SunPositionSample {
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
}

// ─── Report output ───────────────────────────────────────────────────────────

/// One daylight hour of the per-day breakdown.
///
/// The three `*_fraction` fields are the bar magnitudes for charting:
/// current yield, the elevation-bounded maximum for this hour, and the
/// day's overall maximum, each divided by the STC theoretical maximum.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HourlyDetail {
    pub hour: u32,
    pub sun_elevation_deg: f64,
    pub cloud_cover_pct: f64,
    /// Min/max/avg radiation across the two array orientations for this hour
    pub radiation_min_w_m2: f64,
    pub radiation_max_w_m2: f64,
    pub radiation_avg_w_m2: f64,
    pub array1_kwh_per_kwp: f64,
    pub array1_kwh: f64,
    pub array2_kwh_per_kwp: f64,
    pub array2_kwh: f64,
    pub total_kwh: f64,
    pub current_fraction: f64,
    pub hour_max_fraction: f64,
    pub day_max_fraction: f64,
}

/// Full-day summary: weather aggregates from the forecast bucket plus the
/// computed irradiance/yield figures for both arrays.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub avg_cloud_cover_pct: f64,
    pub avg_humidity_pct: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    /// Most frequent weather description of the day's records
    pub description: String,
    /// Irradiance range over daylight hours, array 1 orientation
    pub radiation_min_w_m2: f64,
    pub radiation_max_w_m2: f64,
    pub radiation_avg_w_m2: f64,
    pub array1_yield_kwh: f64,
    pub array2_yield_kwh: f64,
    pub total_yield_kwh: f64,
    pub peak_sun_elevation_deg: f64,
    /// Hourly ceiling under STC (1000 W/m²), both arrays combined
    pub stc_max_hourly_kwh: f64,
    /// Hourly ceiling at this day's peak sun elevation, clear sky
    pub day_max_hourly_kwh: f64,
    pub hours: Vec<HourlyDetail>,
}

/// Live estimate for the requested local hour.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CurrentEstimate {
    pub sun: SunPositionSample,
    pub cloud_cover_pct: f64,
    pub array1_radiation_w_m2: f64,
    pub array2_radiation_w_m2: f64,
    pub array1_power_kw: f64,
    pub array2_power_kw: f64,
    pub total_power_kw: f64,
    /// Yield accumulated from hour 0 through the current hour
    pub array1_day_yield_kwh: f64,
    pub array2_day_yield_kwh: f64,
    pub total_day_yield_kwh: f64,
}

/// Complete per-request report: current conditions, theoretical maxima for
/// the request day, and up to five forecast-day summaries.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SolarReport {
    pub location: GeoCoordinate,
    /// Client-local calendar date the report was computed for
    pub date: NaiveDate,
    /// Client-local hour, 0-23
    pub hour: u32,
    pub current: CurrentEstimate,
    pub stc_max_hourly_kwh: f64,
    pub peak_sun_elevation_deg: f64,
    pub day_max_hourly_kwh: f64,
    pub days: Vec<DailySummary>,
}
