use axum::{routing::get, Router};

use crate::controllers::forecast_controller::{
    get_current_weather, get_solar_report, get_weather_forecast, list_default_arrays,
};
use crate::shared_state::SharedState;

/// Build the `/api/*` sub-router. Handlers extract `State<SharedState>`
/// (or `State<Config>` via `FromRef`) from a single `.with_state(shared)`.
pub fn api_routes(shared: SharedState) -> Router {
    Router::new()
        .route("/config/arrays", get(list_default_arrays))
        .route("/weather/current", get(get_current_weather))
        .route("/weather/forecast", get(get_weather_forecast))
        .route("/solar/report", get(get_solar_report))
        .with_state(shared)
}
