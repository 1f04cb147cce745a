/// Full-day aggregation: one explicit 24-hour sweep per (date, array pair)
/// feeding the daily yield totals, the daylight irradiance range for the
/// first array's orientation, and the per-hour breakdown rows with their
/// chart fractions.

use chrono::NaiveDate;

use crate::models::solar::{ArrayConfig, HourlyDetail};
use crate::services::{irradiance, sun_geometry};

/// Computed solar portion of a day summary; the caller merges in the
/// weather aggregates from the matching forecast bucket.
#[derive(Debug, Clone)]
pub struct DaySolar {
    pub radiation_min_w_m2: f64,
    pub radiation_max_w_m2: f64,
    pub radiation_avg_w_m2: f64,
    pub array1_yield_kwh: f64,
    pub array2_yield_kwh: f64,
    pub peak_sun_elevation_deg: f64,
    pub stc_max_hourly_kwh: f64,
    pub day_max_hourly_kwh: f64,
    pub hours: Vec<HourlyDetail>,
}

impl DaySolar {
    pub fn total_yield_kwh(&self) -> f64 {
        self.array1_yield_kwh + self.array2_yield_kwh
    }
}

/// Combined hourly ceiling of both arrays under STC irradiance
/// (1000 W/m², ideal orientation). Independent of geometry and date.
pub fn stc_max_hourly_kwh(array1: &ArrayConfig, array2: &ArrayConfig) -> f64 {
    max_yield_at(irradiance::STC_IRRADIANCE_W_M2, array1, array2)
}

/// Combined hourly ceiling at a given peak sun elevation: the best either
/// array could do that day under a clear sky with ideal orientation.
pub fn day_max_hourly_kwh(
    peak_elevation_deg: f64,
    array1: &ArrayConfig,
    array2: &ArrayConfig,
) -> f64 {
    max_yield_at(irradiance::clear_sky_radiation(peak_elevation_deg.max(0.0)), array1, array2)
}

fn max_yield_at(radiation_w_m2: f64, array1: &ArrayConfig, array2: &ArrayConfig) -> f64 {
    irradiance::hourly_yield_per_kwp(radiation_w_m2, array1.efficiency_pct, array1.losses_pct)
        * array1.kwp
        + irradiance::hourly_yield_per_kwp(radiation_w_m2, array2.efficiency_pct, array2.losses_pct)
            * array2.kwp
}

/// Sweep the 24 local hours of one calendar day for a pair of arrays.
///
/// Daily yields sum all 24 hourly yields (night hours contribute 0). The
/// irradiance range and average cover daylight hours only, for the first
/// array's orientation; hours with the sun at or below the horizon are
/// excluded from the average rather than counted as zero.
pub fn summarize_day(
    latitude: f64,
    date: NaiveDate,
    avg_cloud_cover_pct: f64,
    array1: &ArrayConfig,
    array2: &ArrayConfig,
) -> DaySolar {
    let stc_max = stc_max_hourly_kwh(array1, array2);
    let peak_elevation = sun_geometry::peak_elevation(latitude, date);
    let day_max = day_max_hourly_kwh(peak_elevation, array1, array2);
    let day_max_fraction = fraction_of(day_max, stc_max);

    let mut array1_total = 0.0;
    let mut array2_total = 0.0;
    let mut radiation_min = f64::MAX;
    let mut radiation_max: f64 = 0.0;
    let mut radiation_sum = 0.0;
    let mut daylight_hours = 0u32;
    let mut hours = Vec::new();

    for hour in 0..24 {
        let sun = sun_geometry::elevation_azimuth(latitude, date, hour);

        let radiation1 = irradiance::hourly_radiation(
            latitude,
            date,
            hour,
            avg_cloud_cover_pct,
            array1.azimuth_deg,
            array1.tilt_deg,
        );
        let radiation2 = irradiance::hourly_radiation(
            latitude,
            date,
            hour,
            avg_cloud_cover_pct,
            array2.azimuth_deg,
            array2.tilt_deg,
        );

        let yield1_per_kwp =
            irradiance::hourly_yield_per_kwp(radiation1, array1.efficiency_pct, array1.losses_pct);
        let yield2_per_kwp =
            irradiance::hourly_yield_per_kwp(radiation2, array2.efficiency_pct, array2.losses_pct);
        let yield1 = yield1_per_kwp * array1.kwp;
        let yield2 = yield2_per_kwp * array2.kwp;
        array1_total += yield1;
        array2_total += yield2;

        if sun.elevation_deg <= 0.0 {
            continue;
        }

        radiation_min = radiation_min.min(radiation1);
        radiation_max = radiation_max.max(radiation1);
        radiation_sum += radiation1;
        daylight_hours += 1;

        // Elevation-bounded ceiling for this specific hour.
        let hour_max = max_yield_at(
            irradiance::clear_sky_radiation(sun.elevation_deg),
            array1,
            array2,
        );

        hours.push(HourlyDetail {
            hour,
            sun_elevation_deg: sun.elevation_deg,
            cloud_cover_pct: avg_cloud_cover_pct,
            radiation_min_w_m2: radiation1.min(radiation2),
            radiation_max_w_m2: radiation1.max(radiation2),
            radiation_avg_w_m2: (radiation1 + radiation2) / 2.0,
            array1_kwh_per_kwp: yield1_per_kwp,
            array1_kwh: yield1,
            array2_kwh_per_kwp: yield2_per_kwp,
            array2_kwh: yield2,
            total_kwh: yield1 + yield2,
            current_fraction: fraction_of(yield1 + yield2, stc_max),
            hour_max_fraction: fraction_of(hour_max, stc_max),
            day_max_fraction,
        });
    }

    if daylight_hours == 0 {
        radiation_min = 0.0;
    }
    let radiation_avg = if daylight_hours > 0 {
        radiation_sum / daylight_hours as f64
    } else {
        0.0
    };

    DaySolar {
        radiation_min_w_m2: radiation_min,
        radiation_max_w_m2: radiation_max,
        radiation_avg_w_m2: radiation_avg,
        array1_yield_kwh: array1_total,
        array2_yield_kwh: array2_total,
        peak_sun_elevation_deg: peak_elevation,
        stc_max_hourly_kwh: stc_max,
        day_max_hourly_kwh: day_max,
        hours,
    }
}

fn fraction_of(value: f64, ceiling: f64) -> f64 {
    if ceiling > 0.0 { value / ceiling } else { 0.0 }
}
