/// Empirical irradiance and per-array yield model.
///
/// Calibrated heuristic, not a physical simulation: a 1000 W/m² clear-sky
/// reference scaled by sun elevation, a linear cloud attenuation that
/// bottoms out at 30% under full overcast, a cosine angle-of-incidence
/// orientation factor, and a fixed 10% derate during the hot hours 10-16.

use chrono::NaiveDate;
use std::f64::consts::PI;

use crate::services::sun_geometry;

const DEG: f64 = PI / 180.0;

/// Standard Test Conditions reference irradiance, W/m².
pub const STC_IRRADIANCE_W_M2: f64 = 1000.0;
/// Full overcast removes at most 70% of clear-sky irradiance.
const CLOUD_ATTENUATION_MAX: f64 = 0.70;
/// Assumed module area per installed kWp.
const AREA_M2_PER_KWP: f64 = 5.0;
/// Derate during the hot daytime window (hours 10-16 inclusive).
const HEAT_DERATE: f64 = 0.90;

/// Clear-sky irradiance on the horizontal at a given sun elevation.
/// Negative elevations yield a negative sine; callers gate on elevation > 0.
pub fn clear_sky_radiation(elevation_deg: f64) -> f64 {
    STC_IRRADIANCE_W_M2 * (elevation_deg * DEG).sin()
}

/// Cosine of the angle of incidence between sun vector and panel normal,
/// clamped at 0: a panel facing away from the sun receives no direct
/// irradiance in this model (no rear-side contribution).
pub fn orientation_factor(
    sun_elevation_deg: f64,
    sun_azimuth_deg: f64,
    panel_azimuth_deg: f64,
    panel_tilt_deg: f64,
) -> f64 {
    if sun_elevation_deg <= 0.0 {
        return 0.0;
    }

    let elevation = sun_elevation_deg * DEG;
    let sun_azimuth = sun_azimuth_deg * DEG;
    let panel_azimuth = panel_azimuth_deg * DEG;
    let tilt = panel_tilt_deg * DEG;

    let cos_incidence = elevation.sin() * tilt.cos()
        + elevation.cos() * tilt.sin() * (sun_azimuth - panel_azimuth).cos();

    cos_incidence.max(0.0)
}

/// Effective irradiance on one panel orientation for one local hour, W/m².
/// Zero whenever the sun is at or below the horizon.
pub fn hourly_radiation(
    latitude: f64,
    date: NaiveDate,
    hour: u32,
    cloud_cover_pct: f64,
    panel_azimuth_deg: f64,
    panel_tilt_deg: f64,
) -> f64 {
    let elevation = sun_geometry::sun_elevation(latitude, date, hour);
    if elevation <= 0.0 {
        return 0.0;
    }

    let azimuth = sun_geometry::sun_azimuth(latitude, date, hour);

    let base = clear_sky_radiation(elevation);
    let cloud_factor = 1.0 - (cloud_cover_pct / 100.0) * CLOUD_ATTENUATION_MAX;
    let orientation = orientation_factor(elevation, azimuth, panel_azimuth_deg, panel_tilt_deg);
    let temp_factor = if (10..=16).contains(&hour) { HEAT_DERATE } else { 1.0 };

    base * cloud_factor * orientation * temp_factor
}

/// Energy produced in one hour per installed kWp, in kWh/kWp.
/// The caller multiplies by the array's kWp for absolute kWh.
pub fn hourly_yield_per_kwp(radiation_w_m2: f64, efficiency_pct: f64, losses_pct: f64) -> f64 {
    // W/m² over one hour -> kWh/m²
    let kwh_per_m2 = radiation_w_m2 / 1000.0;
    // kWh/m² -> kWh/kWp at 5 m² module area per kWp
    let kwh_per_kwp = kwh_per_m2 * AREA_M2_PER_KWP;

    kwh_per_kwp * (efficiency_pct / 100.0) * (1.0 - losses_pct / 100.0)
}
