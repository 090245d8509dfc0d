//! Web front end that renders the weather for a city.
//!
//! # Design
//! The router only depends on `WeatherApi`, so tests can hand it a service
//! built over a stub transport. Service calls are blocking and run on
//! tokio's blocking pool.

pub mod config;

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use services_core::{ServiceError, WeatherApi};
use thiserror::Error;
use tokio::{net::TcpListener, task::JoinError};

pub use config::{AppConfig, ConfigError};

/// Shown when the request carries no usable city.
pub const CITY_PROMPT: &str = "Please provide a city via query string: ?city=xyz.";

pub type SharedWeather = Arc<dyn WeatherApi + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    weather: SharedWeather,
}

#[derive(Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("weather lookup did not complete: {0}")]
    Worker(#[from] JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "weather request failed");
        let status = match &self {
            AppError::Service(ServiceError::Status { .. }) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

pub fn app(weather: SharedWeather) -> Router {
    Router::new()
        .route("/weather", get(get_weather))
        .with_state(AppState { weather })
}

pub async fn run(listener: TcpListener, weather: SharedWeather) -> Result<(), std::io::Error> {
    axum::serve(listener, app(weather)).await
}

async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<String, AppError> {
    let Some(city) = query.city.filter(|c| !c.trim().is_empty()) else {
        return Ok(CITY_PROMPT.to_string());
    };
    let weather = Arc::clone(&state.weather);
    let report = tokio::task::spawn_blocking(move || weather.get_weather(&city)).await??;
    Ok(report.to_string())
}
