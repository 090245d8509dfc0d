//! Client for the public weather API.

use crate::error::{Result, ServiceError};
use crate::http::{HttpMethod, HttpRequest, Transport};
use crate::response::ServiceClient;
use crate::types::Weather;

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://weathers.co/api.php";

pub trait WeatherApi {
    /// Current weather for `city`. Blank names are rejected before any
    /// request is sent.
    fn get_weather(&self, city: &str) -> Result<Weather>;
}

#[derive(Debug, Clone)]
pub struct WeatherService<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> WeatherService<T> {
    pub fn new(transport: T) -> Self {
        Self::with_base_url(transport, DEFAULT_WEATHER_BASE_URL)
    }

    pub fn with_base_url(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_get_weather(&self, city: &str) -> Result<HttpRequest> {
        if city.trim().is_empty() {
            return Err(ServiceError::InvalidArgument(
                "City cannot be empty.".to_string(),
            ));
        }
        Ok(HttpRequest::new(
            HttpMethod::Get,
            format!("{}?city={}", self.base_url, urlencoding::encode(city)),
        ))
    }
}

impl<T: Transport> ServiceClient for WeatherService<T> {
    type Transport = T;

    fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> WeatherApi for WeatherService<T> {
    fn get_weather(&self, city: &str) -> Result<Weather> {
        let request = self.build_get_weather(city)?;
        let content = self.get_response_content(request)?;
        Ok(serde_json::from_str(content.as_deref().unwrap_or_default())?)
    }
}
