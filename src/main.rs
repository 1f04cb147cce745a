mod routes;
mod controllers;
mod services;
mod models;
mod api_docs;
mod shared_state;
mod config;
mod error;

use std::net::SocketAddr;
use axum::{Router, routing::get, response::Html};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use crate::api_docs::ApiDoc;
use crate::config::Config;
use crate::routes::forecast_routes::api_routes;
use crate::shared_state::SharedState;

#[tokio::main]
async fn main() {
    // 1. Load configuration
    let config = match Config::load("config.json") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config.json: {}", e);
            return;
        }
    };
    println!(
        "Configuration loaded: array 1 {:.1} kWp @ {:.0}°, array 2 {:.1} kWp @ {:.0}°",
        config.array1.kwp, config.array1.azimuth_deg,
        config.array2.kwp, config.array2.azimuth_deg
    );

    // 2. Shared state: config + one HTTP client for the weather provider
    let state = SharedState::new(config.clone());

    // 3. Start Axum HTTP server
    let server_port = config.server.port;
    let app = Router::new()
        .nest("/api", api_routes(state))
        .route("/scalar", get(|| async {
            Html(Scalar::new(ApiDoc::openapi()).to_html())
        }))
        // The presentation layer is served elsewhere; let it call us.
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], server_port));
    println!("API Server listening on http://{}", addr);
    println!("Scalar UI: http://{}/scalar", addr);

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
