// Dashboard service - Use case for the combined weather and news view
use crate::application::error::ServiceError;
use crate::application::normalizer::{normalize_news, normalize_weather};
use crate::application::upstream::{NewsSource, WeatherSource};
use crate::domain::city::CityQuery;
use crate::domain::dashboard::DashboardResult;
use chrono::Utc;
use futures::future;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    weather_source: Arc<dyn WeatherSource>,
    news_source: Arc<dyn NewsSource>,
}

impl DashboardService {
    pub fn new(weather_source: Arc<dyn WeatherSource>, news_source: Arc<dyn NewsSource>) -> Self {
        Self {
            weather_source,
            news_source,
        }
    }

    /// Fetch weather and news concurrently and merge whatever succeeded.
    ///
    /// Each branch settles on its own; a failed branch leaves its field
    /// empty. Only when both branches fail is the whole request an error.
    #[tracing::instrument(skip_all, fields(city = %city))]
    pub async fn get_dashboard(&self, city: &CityQuery) -> Result<DashboardResult, ServiceError> {
        let (weather, news) = future::join(
            self.weather_source.current_weather(city),
            self.news_source.search_news(city),
        )
        .await;

        let weather = match weather {
            Ok(payload) => Some(normalize_weather(payload)),
            Err(e) => {
                tracing::warn!(error = %e, "weather unavailable for dashboard");
                None
            }
        };

        let news = match news {
            Ok(payload) => Some(normalize_news(payload)),
            Err(e) => {
                tracing::warn!(error = %e, "news unavailable for dashboard");
                None
            }
        };

        if weather.is_none() && news.is_none() {
            return Err(ServiceError::NoDataAvailable {
                city: city.to_string(),
            });
        }

        let news = news.unwrap_or_default();
        tracing::info!(
            weather = weather.is_some(),
            articles = news.len(),
            "dashboard assembled"
        );

        Ok(DashboardResult::new(city.to_string(), weather, news, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::UpstreamError;
    use crate::application::upstream::{NewsPayload, WeatherPayload};
    use crate::test_support::{
        FakeNewsSource, FakeWeatherSource, sample_news_payload, sample_weather_payload,
    };
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::Barrier;

    fn london() -> CityQuery {
        CityQuery::parse("London").unwrap()
    }

    #[tokio::test]
    async fn test_both_upstreams_succeed() {
        let weather = FakeWeatherSource::ok();
        let news = FakeNewsSource::ok();
        let service = DashboardService::new(weather.clone(), news.clone());

        let result = service.get_dashboard(&london()).await.unwrap();

        assert_eq!(result.city, "London");
        assert_eq!(result.weather.unwrap().city, "London");
        assert_eq!(result.news.len(), 2);
        assert_eq!(weather.calls(), 1);
        assert_eq!(news.calls(), 1);
    }

    #[tokio::test]
    async fn test_news_failure_keeps_weather() {
        let service = DashboardService::new(
            FakeWeatherSource::ok(),
            FakeNewsSource::failing(UpstreamError::Status(500)),
        );

        let result = service.get_dashboard(&london()).await.unwrap();

        assert!(result.weather.is_some());
        assert!(result.news.is_empty());
    }

    #[tokio::test]
    async fn test_weather_failure_keeps_news() {
        let service = DashboardService::new(
            FakeWeatherSource::failing(UpstreamError::NotFound),
            FakeNewsSource::ok(),
        );

        let result = service.get_dashboard(&london()).await.unwrap();

        assert!(result.weather.is_none());
        assert_eq!(result.news.len(), 2);
    }

    #[tokio::test]
    async fn test_weather_failure_with_empty_news_is_still_success() {
        let service = DashboardService::new(
            FakeWeatherSource::failing(UpstreamError::Timeout),
            FakeNewsSource::with_payload(NewsPayload::default()),
        );

        let result = service.get_dashboard(&london()).await.unwrap();

        assert!(result.weather.is_none());
        assert!(result.news.is_empty());
    }

    #[tokio::test]
    async fn test_both_failures_report_no_data() {
        let weather = FakeWeatherSource::failing(UpstreamError::Timeout);
        let news = FakeNewsSource::failing(UpstreamError::Unauthorized);
        let service = DashboardService::new(weather.clone(), news.clone());

        let err = service.get_dashboard(&london()).await.unwrap_err();

        assert!(matches!(err, ServiceError::NoDataAvailable { ref city } if city == "London"));
        assert_eq!(weather.calls(), 1);
        assert_eq!(news.calls(), 1);
    }

    #[tokio::test]
    async fn test_repeated_calls_produce_identical_data() {
        let service = DashboardService::new(FakeWeatherSource::ok(), FakeNewsSource::ok());

        let first = service.get_dashboard(&london()).await.unwrap();
        let second = service.get_dashboard(&london()).await.unwrap();

        assert_eq!(first.city, second.city);
        assert_eq!(first.weather, second.weather);
        assert_eq!(first.news, second.news);
    }

    struct RendezvousWeather(Arc<Barrier>);
    struct RendezvousNews(Arc<Barrier>);

    #[async_trait]
    impl WeatherSource for RendezvousWeather {
        async fn current_weather(&self, _city: &CityQuery) -> Result<WeatherPayload, UpstreamError> {
            self.0.wait().await;
            Ok(sample_weather_payload())
        }
    }

    #[async_trait]
    impl NewsSource for RendezvousNews {
        async fn search_news(&self, _city: &CityQuery) -> Result<NewsPayload, UpstreamError> {
            self.0.wait().await;
            Ok(sample_news_payload())
        }
    }

    #[tokio::test]
    async fn test_upstream_calls_are_in_flight_together() {
        // Each call blocks until the other has started.
        let barrier = Arc::new(Barrier::new(2));
        let service = DashboardService::new(
            Arc::new(RendezvousWeather(barrier.clone())),
            Arc::new(RendezvousNews(barrier)),
        );

        let result = tokio::time::timeout(Duration::from_secs(2), service.get_dashboard(&london()))
            .await
            .expect("upstream calls were not dispatched concurrently")
            .unwrap();

        assert!(result.weather.is_some());
        assert_eq!(result.news.len(), 2);
    }
}
