/// ============================================================
///  Solar geometry for the yield forecast engine
///
///  Closed-form trigonometry, hour resolution:
///   1. Declination    - 23.45° x sin(360/365 x (doy - 81))
///   2. Hour angle     - (hour - 12) x 15°
///   3. Elevation      - asin(sin·sin + cos·cos·cos)
///   4. Azimuth        - acos of the normalized azimuth cosine,
///                       mirrored to the afternoon side for hour > 12
/// ============================================================

use chrono::{Datelike, NaiveDate};
use std::f64::consts::PI;

use crate::models::solar::SunPositionSample;

const EARTH_AXIAL_TILT_DEG: f64 = 23.45;
const DEGREES_PER_HOUR: f64 = 15.0;
const DEG: f64 = PI / 180.0;

/// Solar declination in degrees for a Gregorian calendar date.
pub fn solar_declination(date: NaiveDate) -> f64 {
    let doy = date.ordinal() as f64; // 1-366
    EARTH_AXIAL_TILT_DEG * ((360.0 / 365.0) * (doy - 81.0) * DEG).sin()
}

/// Hour angle in degrees; negative before local solar noon.
fn hour_angle(hour: u32) -> f64 {
    (hour as f64 - 12.0) * DEGREES_PER_HOUR
}

/// Sun elevation above the horizon in degrees. May be negative (sun below
/// horizon); callers treat elevation <= 0 as "no yield".
pub fn sun_elevation(latitude: f64, date: NaiveDate, hour: u32) -> f64 {
    let lat = latitude * DEG;
    let decl = solar_declination(date) * DEG;
    let omega = hour_angle(hour) * DEG;

    let sin_elevation = lat.sin() * decl.sin() + lat.cos() * decl.cos() * omega.cos();
    sin_elevation.asin() / DEG
}

/// Compass bearing of the sun in degrees (180 = south). Returns 0 whenever
/// the sun is at or below the horizon, matching the no-yield convention.
pub fn sun_azimuth(latitude: f64, date: NaiveDate, hour: u32) -> f64 {
    let lat = latitude * DEG;
    let decl = solar_declination(date) * DEG;
    let omega = hour_angle(hour) * DEG;

    let sin_elevation = lat.sin() * decl.sin() + lat.cos() * decl.cos() * omega.cos();
    let elevation = sin_elevation.asin();
    if elevation <= 0.0 {
        return 0.0;
    }

    // Clamped to [-1, 1]: near the horizon the quotient can overshoot the
    // acos domain by a few ulps.
    let cos_azimuth = (decl.sin() - lat.sin() * sin_elevation) / (lat.cos() * elevation.cos());
    let azimuth = cos_azimuth.clamp(-1.0, 1.0).acos() / DEG;

    if hour > 12 { 360.0 - azimuth } else { azimuth }
}

/// Elevation and azimuth for one local solar hour.
pub fn elevation_azimuth(latitude: f64, date: NaiveDate, hour: u32) -> SunPositionSample {
    SunPositionSample {
        elevation_deg: sun_elevation(latitude, date, hour),
        azimuth_deg: sun_azimuth(latitude, date, hour),
    }
}

/// Highest sun elevation of the day, scanned over the 24 local hours.
/// Floored at 0: during polar night no hour clears the horizon and the
/// theoretical-maximum displays work from a 0° peak.
pub fn peak_elevation(latitude: f64, date: NaiveDate) -> f64 {
    let mut max_elevation: f64 = 0.0;
    for hour in 0..24 {
        max_elevation = max_elevation.max(sun_elevation(latitude, date, hour));
    }
    max_elevation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_declination_near_solstices() {
        let summer = solar_declination(date(2024, 6, 21));
        assert!(
            summer > 23.0 && summer <= 23.45,
            "summer solstice declination should approach +23.45°, got {:.2}",
            summer
        );
        let winter = solar_declination(date(2024, 12, 21));
        assert!(
            winter < -23.0 && winter >= -23.45,
            "winter solstice declination should approach -23.45°, got {:.2}",
            winter
        );
    }

    #[test]
    fn test_berlin_summer_noon_elevation() {
        // Berlin, near summer solstice: noon sun stands at about 60°
        let elevation = sun_elevation(52.52, date(2024, 6, 21), 12);
        assert!(
            elevation > 59.0 && elevation < 61.0,
            "Berlin solstice noon elevation should be 59-61°, got {:.2}",
            elevation
        );
    }

    #[test]
    fn test_midnight_below_horizon() {
        let elevation = sun_elevation(52.52, date(2024, 6, 21), 0);
        assert!(elevation < 0.0, "midnight sun below horizon at 52.5°N, got {:.2}", elevation);
    }

    #[test]
    fn test_azimuth_zero_below_horizon() {
        assert_eq!(sun_azimuth(52.52, date(2024, 12, 21), 0), 0.0);
        assert_eq!(sun_azimuth(52.52, date(2024, 12, 21), 23), 0.0);
    }

    #[test]
    fn test_azimuth_south_at_noon() {
        // At solar noon the hour angle is 0 and the sun bears due south
        // from a northern mid-latitude site.
        let azimuth = sun_azimuth(52.52, date(2024, 6, 21), 12);
        assert!(
            (azimuth - 180.0).abs() < 1.0,
            "noon azimuth should be ~180° (south), got {:.2}",
            azimuth
        );
    }

    #[test]
    fn test_azimuth_mirrored_afternoon() {
        // Morning and afternoon hours equidistant from noon land on
        // opposite sides of south.
        let morning = sun_azimuth(52.52, date(2024, 6, 21), 9);
        let afternoon = sun_azimuth(52.52, date(2024, 6, 21), 15);
        assert!(morning < 180.0, "morning azimuth east of south, got {:.2}", morning);
        assert!(afternoon > 180.0, "afternoon azimuth west of south, got {:.2}", afternoon);
        assert!(
            ((360.0 - afternoon) - morning).abs() < 1.0,
            "azimuths should mirror around south: morning {:.2}, afternoon {:.2}",
            morning,
            afternoon
        );
    }

    #[test]
    fn test_elevation_symmetric_around_noon() {
        // Hour-angle symmetry: elevation at noon-k matches noon+k.
        let d = date(2024, 6, 21);
        for k in 1..=6 {
            let before = sun_elevation(52.52, d, 12 - k);
            let after = sun_elevation(52.52, d, 12 + k);
            assert!(
                (before - after).abs() < 1e-9,
                "elevation should be symmetric around noon, hour offset {}: {:.6} vs {:.6}",
                k,
                before,
                after
            );
        }
    }

    #[test]
    fn test_peak_elevation_matches_noon() {
        let d = date(2024, 6, 21);
        let peak = peak_elevation(52.52, d);
        let noon = sun_elevation(52.52, d, 12);
        assert!(
            (peak - noon).abs() < 1e-9,
            "daily peak should be the noon sample, peak {:.4} vs noon {:.4}",
            peak,
            noon
        );
    }

    #[test]
    fn test_peak_elevation_floor_polar_night() {
        // Svalbard in late December: the sun never rises, peak reports 0.
        assert_eq!(peak_elevation(78.0, date(2024, 12, 21)), 0.0);
    }
}
