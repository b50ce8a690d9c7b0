// OpenWeather client - Current conditions by city name
use crate::application::error::{Upstream, UpstreamError};
use crate::application::upstream::{WeatherPayload, WeatherSource};
use crate::domain::city::CityQuery;
use crate::infrastructure::config::WeatherSettings;
use crate::infrastructure::http_client::{build_http_client, classify_transport, read_json};
use async_trait::async_trait;

/// Temperatures come back in Celsius and wind speed in m/s.
const UNITS: &str = "metric";

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(settings: &WeatherSettings) -> anyhow::Result<Self> {
        Ok(Self {
            http: build_http_client(settings.timeout())?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        })
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current_weather(&self, city: &CityQuery) -> Result<WeatherPayload, UpstreamError> {
        let url = format!("{}/weather", self.base_url);
        tracing::debug!(%url, city = %city, "requesting current weather");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", UNITS),
            ])
            .send()
            .await
            .map_err(classify_transport)?;

        read_json(response, Upstream::Weather).await
    }
}
