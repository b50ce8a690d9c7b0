// Weather service - Use case for the single-city weather report
use crate::application::error::{ServiceError, Upstream};
use crate::application::normalizer::normalize_weather;
use crate::application::upstream::WeatherSource;
use crate::domain::city::CityQuery;
use crate::domain::weather::WeatherReport;
use chrono::Utc;
use std::sync::Arc;

#[derive(Clone)]
pub struct WeatherService {
    source: Arc<dyn WeatherSource>,
}

impl WeatherService {
    pub fn new(source: Arc<dyn WeatherSource>) -> Self {
        Self { source }
    }

    #[tracing::instrument(skip_all, fields(city = %city))]
    pub async fn get_weather(&self, city: &CityQuery) -> Result<WeatherReport, ServiceError> {
        let payload = self.source.current_weather(city).await.map_err(|e| {
            tracing::warn!(error = %e, "weather lookup failed");
            ServiceError::upstream(Upstream::Weather, city.as_str(), e)
        })?;

        let snapshot = normalize_weather(payload);
        tracing::info!(resolved = %snapshot.city, "weather lookup succeeded");
        Ok(WeatherReport::new(snapshot, Utc::now()))
    }
}
