// Dashboard domain model
use super::news::NewsArticle;
use super::weather::WeatherSnapshot;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResult {
    pub city: String,
    pub weather: Option<WeatherSnapshot>,
    pub news: Vec<NewsArticle>,
    pub timestamp: DateTime<Utc>,
}

impl DashboardResult {
    pub fn new(
        city: String,
        weather: Option<WeatherSnapshot>,
        news: Vec<NewsArticle>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            city,
            weather,
            news,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_weather_serializes_as_null() {
        let result = DashboardResult::new("Oslo".to_string(), None, Vec::new(), Utc::now());
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["city"], "Oslo");
        assert!(json["weather"].is_null());
        assert_eq!(json["news"], serde_json::json!([]));
    }
}
