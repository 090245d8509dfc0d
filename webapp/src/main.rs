use std::sync::Arc;

use anyhow::Context;
use services_core::{LoggingTransport, UreqTransport, WeatherService};
use services_webapp::AppConfig;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    let transport = LoggingTransport::new(UreqTransport::new());
    let weather = WeatherService::with_base_url(transport, &config.weather_base_url);

    let addr = format!("127.0.0.1:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, weather_base_url = %config.weather_base_url, "web app listening");
    services_webapp::run(listener, Arc::new(weather)).await?;
    Ok(())
}
