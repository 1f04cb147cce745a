pub mod daily_report;
pub mod forecast_grouper;
pub mod irradiance;
pub mod report_service;
pub mod sun_geometry;
pub mod weather_service;
