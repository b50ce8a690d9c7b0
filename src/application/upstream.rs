// Upstream ports - Raw payload schemas and the traits the services fetch through
use crate::application::error::UpstreamError;
use crate::domain::city::CityQuery;
use async_trait::async_trait;
use serde::Deserialize;

/// Current-weather response as returned by the weather upstream (metric units).
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherPayload {
    pub coord: CoordPayload,
    #[serde(default)]
    pub weather: Vec<ConditionPayload>,
    pub main: MainPayload,
    pub wind: WindPayload,
    #[serde(default)]
    pub sys: SysPayload,
    #[serde(default)]
    pub rain: Option<RainPayload>,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoordPayload {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConditionPayload {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainPayload {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
    pub pressure: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindPayload {
    pub speed: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SysPayload {
    #[serde(default)]
    pub country: Option<String>,
}

/// Precipitation accumulated over the last one and three hours.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RainPayload {
    #[serde(rename = "1h", default)]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h", default)]
    pub three_hours: Option<f64>,
}

/// Article search response as returned by the news upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsPayload {
    #[serde(default)]
    pub articles: Vec<ArticlePayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePayload {
    #[serde(default)]
    pub source: Option<SourcePayload>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourcePayload {
    #[serde(default)]
    pub name: Option<String>,
}

#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch current conditions for a city
    async fn current_weather(&self, city: &CityQuery) -> Result<WeatherPayload, UpstreamError>;
}

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Search recent articles mentioning a city, newest first
    async fn search_news(&self, city: &CityQuery) -> Result<NewsPayload, UpstreamError>;
}
