use utoipa::OpenApi;
use crate::controllers::forecast_controller;
use crate::models::{forecast, solar};

#[derive(OpenApi)]
#[openapi(
    paths(
        forecast_controller::list_default_arrays,
        forecast_controller::get_current_weather,
        forecast_controller::get_weather_forecast,
        forecast_controller::get_solar_report
    ),
    components(
        schemas(
            forecast::CurrentConditions,
            forecast::WeatherDay,
            forecast::ForecastRecord,
            solar::GeoCoordinate,
            solar::ArrayConfig,
            solar::SunPositionSample,
            solar::HourlyDetail,
            solar::DailySummary,
            solar::CurrentEstimate,
            solar::SolarReport
        )
    ),
    tags(
        (name = "solar-yield-forecast", description = "Solar Yield Forecast API")
    )
)]
pub struct ApiDoc;
