// HTTP request handlers
use crate::application::error::ServiceError;
use crate::domain::city::{CityQuery, ValidationError};
use crate::domain::dashboard::DashboardResult;
use crate::domain::news::NewsFeed;
use crate::domain::weather::WeatherReport;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use chrono::Utc;
use serde_json::{Value, json};
use std::sync::Arc;

/// Service documentation
pub async fn api_index() -> Json<Value> {
    Json(json!({
        "message": "City Dashboard API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Weather and news for a city, fetched from upstream services",
        "endpoints": {
            "weather": {
                "url": "/api/weather/:city",
                "method": "GET",
                "description": "Get weather data for a specific city",
                "example": "/api/weather/London"
            },
            "news": {
                "url": "/api/news/:city",
                "method": "GET",
                "description": "Get news articles related to a city",
                "example": "/api/news/Paris"
            },
            "dashboard": {
                "url": "/api/dashboard/:city",
                "method": "GET",
                "description": "Get both weather and news in one request",
                "example": "/api/dashboard/Tokyo"
            }
        }
    }))
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now(),
        "uptime": state.started_at.elapsed().as_secs_f64(),
    }))
}

pub async fn get_weather(
    city: Result<Path<String>, PathRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<WeatherReport>, ServiceError> {
    let city = city_from_path(city)?;
    let report = state.weather_service.get_weather(&city).await?;
    Ok(Json(report))
}

pub async fn get_news(
    city: Result<Path<String>, PathRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<NewsFeed>, ServiceError> {
    let city = city_from_path(city)?;
    let feed = state.news_service.get_news(&city).await?;
    Ok(Json(feed))
}

/// Weather and news in one response, tolerating either upstream failing
pub async fn get_dashboard(
    city: Result<Path<String>, PathRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardResult>, ServiceError> {
    let city = city_from_path(city)?;
    let dashboard = state.dashboard_service.get_dashboard(&city).await?;
    Ok(Json(dashboard))
}

/// A segment that cannot be decoded is treated like a missing city
fn city_from_path(
    raw: Result<Path<String>, PathRejection>,
) -> Result<CityQuery, ValidationError> {
    let Path(city) = raw.map_err(|rejection| {
        tracing::debug!(%rejection, "city segment rejected");
        ValidationError::MalformedCity
    })?;
    CityQuery::parse(&city)
}

/// An API prefix requested with an empty city segment
pub async fn missing_city() -> ServiceError {
    ValidationError::EmptyCity.into()
}
