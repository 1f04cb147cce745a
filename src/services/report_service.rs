/// Pure report assembly: takes already-fetched forecast records plus the
/// request parameters and produces the full per-request report. No I/O
/// happens here, which keeps the whole pipeline deterministic and testable
/// without a live feed.

use chrono::NaiveDate;

use crate::models::forecast::ForecastRecord;
use crate::models::solar::{
    ArrayConfig, CurrentEstimate, DailySummary, GeoCoordinate, SolarReport,
};
use crate::services::{daily_report, forecast_grouper, irradiance, sun_geometry};

/// Callers take at most this many of the earliest forecast days. A shorter
/// feed simply yields fewer days; it is never padded.
pub const FORECAST_HORIZON_DAYS: usize = 5;

/// Flat assumption for DC-to-AC conversion in the live power figure.
const INVERTER_EFFICIENCY: f64 = 0.96;

/// Live estimate for the requested local hour: sun position, per-array
/// irradiance and AC power, and the yield accumulated since midnight.
pub fn current_estimate(
    latitude: f64,
    date: NaiveDate,
    hour: u32,
    cloud_cover_pct: f64,
    array1: &ArrayConfig,
    array2: &ArrayConfig,
) -> CurrentEstimate {
    let sun = sun_geometry::elevation_azimuth(latitude, date, hour);

    let radiation1 = irradiance::hourly_radiation(
        latitude,
        date,
        hour,
        cloud_cover_pct,
        array1.azimuth_deg,
        array1.tilt_deg,
    );
    let radiation2 = irradiance::hourly_radiation(
        latitude,
        date,
        hour,
        cloud_cover_pct,
        array2.azimuth_deg,
        array2.tilt_deg,
    );

    let power1 = current_power_kw(radiation1, array1.kwp);
    let power2 = current_power_kw(radiation2, array2.kwp);

    let day_yield1 = day_yield_through_hour(latitude, date, hour, cloud_cover_pct, array1);
    let day_yield2 = day_yield_through_hour(latitude, date, hour, cloud_cover_pct, array2);

    CurrentEstimate {
        sun,
        cloud_cover_pct,
        array1_radiation_w_m2: radiation1,
        array2_radiation_w_m2: radiation2,
        array1_power_kw: power1,
        array2_power_kw: power2,
        total_power_kw: power1 + power2,
        array1_day_yield_kwh: day_yield1,
        array2_day_yield_kwh: day_yield2,
        total_day_yield_kwh: day_yield1 + day_yield2,
    }
}

fn current_power_kw(radiation_w_m2: f64, kwp: f64) -> f64 {
    (radiation_w_m2 / 1000.0) * kwp * INVERTER_EFFICIENCY
}

/// Yield accumulated from hour 0 through `hour` inclusive, absolute kWh.
fn day_yield_through_hour(
    latitude: f64,
    date: NaiveDate,
    hour: u32,
    cloud_cover_pct: f64,
    array: &ArrayConfig,
) -> f64 {
    let mut total = 0.0;
    for h in 0..=hour.min(23) {
        let radiation = irradiance::hourly_radiation(
            latitude,
            date,
            h,
            cloud_cover_pct,
            array.azimuth_deg,
            array.tilt_deg,
        );
        total +=
            irradiance::hourly_yield_per_kwp(radiation, array.efficiency_pct, array.losses_pct)
                * array.kwp;
    }
    total
}

/// Assemble the complete report for one request. `date` and `hour` are the
/// client-local time, threaded in explicitly; `current_cloud_cover_pct` is
/// the live observation, while each forecast day uses its bucket average.
pub fn build_report(
    location: GeoCoordinate,
    date: NaiveDate,
    hour: u32,
    current_cloud_cover_pct: f64,
    records: &[ForecastRecord],
    array1: &ArrayConfig,
    array2: &ArrayConfig,
) -> SolarReport {
    let stc_max = daily_report::stc_max_hourly_kwh(array1, array2);
    let peak_elevation = sun_geometry::peak_elevation(location.latitude, date);
    let day_max = daily_report::day_max_hourly_kwh(peak_elevation, array1, array2);

    let current = current_estimate(
        location.latitude,
        date,
        hour,
        current_cloud_cover_pct,
        array1,
        array2,
    );

    let days = forecast_grouper::group_by_day(records)
        .into_iter()
        .take(FORECAST_HORIZON_DAYS)
        .map(|bucket| {
            let avg_cloud = bucket.avg_cloud_cover();
            let solar = daily_report::summarize_day(
                location.latitude,
                bucket.date,
                avg_cloud,
                array1,
                array2,
            );
            let (temp_min, temp_max) = bucket.temp_range();

            DailySummary {
                date: bucket.date,
                avg_cloud_cover_pct: avg_cloud,
                avg_humidity_pct: bucket.avg_humidity(),
                temp_min_c: temp_min,
                temp_max_c: temp_max,
                description: bucket.dominant_description(),
                radiation_min_w_m2: solar.radiation_min_w_m2,
                radiation_max_w_m2: solar.radiation_max_w_m2,
                radiation_avg_w_m2: solar.radiation_avg_w_m2,
                array1_yield_kwh: solar.array1_yield_kwh,
                array2_yield_kwh: solar.array2_yield_kwh,
                total_yield_kwh: solar.total_yield_kwh(),
                peak_sun_elevation_deg: solar.peak_sun_elevation_deg,
                stc_max_hourly_kwh: solar.stc_max_hourly_kwh,
                day_max_hourly_kwh: solar.day_max_hourly_kwh,
                hours: solar.hours,
            }
        })
        .collect();

    SolarReport {
        location,
        date,
        hour,
        current,
        stc_max_hourly_kwh: stc_max,
        peak_sun_elevation_deg: peak_elevation,
        day_max_hourly_kwh: day_max,
        days,
    }
}
