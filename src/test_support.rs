// Shared fixtures for unit tests
use crate::application::error::UpstreamError;
use crate::application::upstream::{NewsPayload, NewsSource, WeatherPayload, WeatherSource};
use crate::domain::city::CityQuery;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn sample_weather_json() -> serde_json::Value {
    json!({
        "coord": { "lon": -0.1257, "lat": 51.5085 },
        "weather": [{ "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }],
        "base": "stations",
        "main": { "temp": 12.49, "feels_like": 11.5, "temp_min": 11.0, "temp_max": 13.9, "humidity": 81, "pressure": 1012 },
        "visibility": 10000,
        "wind": { "speed": 4.12, "deg": 240 },
        "sys": { "type": 2, "country": "GB", "sunrise": 1760595000, "sunset": 1760633000 },
        "name": "London",
        "cod": 200
    })
}

pub fn sample_weather_payload() -> WeatherPayload {
    serde_json::from_value(sample_weather_json()).unwrap()
}

pub fn sample_news_json() -> serde_json::Value {
    json!({
        "status": "ok",
        "totalResults": 3,
        "articles": [
            {
                "source": { "id": "bbc-news", "name": "BBC News" },
                "author": "Jo Reporter",
                "title": "Tube strike called off",
                "description": "Unions reached an agreement overnight.",
                "url": "https://example.com/tube",
                "urlToImage": "https://example.com/tube.jpg",
                "publishedAt": "2026-10-16T08:00:00Z",
                "content": "..."
            },
            {
                "source": { "id": null, "name": "Wire" },
                "author": null,
                "title": null,
                "description": "An article without a headline.",
                "url": "https://example.com/untitled",
                "urlToImage": null,
                "publishedAt": "2026-10-16T07:30:00Z"
            },
            {
                "title": "Thames barrier closes",
                "description": "High tides expected this weekend.",
                "url": "https://example.com/thames",
                "publishedAt": "2026-10-15T21:10:00Z"
            }
        ]
    })
}

pub fn sample_news_payload() -> NewsPayload {
    serde_json::from_value(sample_news_json()).unwrap()
}

/// Weather upstream that returns a canned outcome and counts calls.
pub struct FakeWeatherSource {
    outcome: Result<WeatherPayload, UpstreamError>,
    calls: AtomicUsize,
}

impl FakeWeatherSource {
    pub fn ok() -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(sample_weather_payload()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: UpstreamError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherSource for FakeWeatherSource {
    async fn current_weather(&self, _city: &CityQuery) -> Result<WeatherPayload, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// News upstream that returns a canned outcome and counts calls.
pub struct FakeNewsSource {
    outcome: Result<NewsPayload, UpstreamError>,
    calls: AtomicUsize,
}

impl FakeNewsSource {
    pub fn ok() -> Arc<Self> {
        Self::with_payload(sample_news_payload())
    }

    pub fn with_payload(payload: NewsPayload) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(payload),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: UpstreamError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NewsSource for FakeNewsSource {
    async fn search_news(&self, _city: &CityQuery) -> Result<NewsPayload, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_upstream(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}
