// Weather domain models
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Current conditions for a city, in metric units.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// Degrees Celsius, rounded
    pub temperature: i32,
    pub description: String,
    pub coordinates: Coordinates,
    /// Degrees Celsius, rounded
    pub feels_like: i32,
    /// Metres per second
    pub wind_speed: f64,
    pub country_code: String,
    /// Millimetres, 0 when no precipitation was reported
    pub rain_volume: f64,
    pub humidity: u32,
    /// Hectopascal
    pub pressure: u32,
    pub city: String,
    pub icon: String,
}

/// Body of the single-city weather endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    #[serde(flatten)]
    pub snapshot: WeatherSnapshot,
    pub timestamp: DateTime<Utc>,
}

impl WeatherReport {
    pub fn new(snapshot: WeatherSnapshot, timestamp: DateTime<Utc>) -> Self {
        Self {
            snapshot,
            timestamp,
        }
    }
}
