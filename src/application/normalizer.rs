// Normalizers - Map raw upstream payloads onto the domain model
//
// The single-city endpoints and the dashboard share these, so a field
// mapping only ever lives in one place.
use crate::application::upstream::{ArticlePayload, NewsPayload, RainPayload, WeatherPayload};
use crate::domain::news::NewsArticle;
use crate::domain::weather::{Coordinates, WeatherSnapshot};

pub fn normalize_weather(payload: WeatherPayload) -> WeatherSnapshot {
    let condition = payload.weather.into_iter().next().unwrap_or_default();

    WeatherSnapshot {
        temperature: round_half_up(payload.main.temp),
        description: condition.description,
        coordinates: Coordinates {
            lat: payload.coord.lat,
            lon: payload.coord.lon,
        },
        feels_like: round_half_up(payload.main.feels_like),
        wind_speed: payload.wind.speed,
        country_code: payload.sys.country.unwrap_or_default(),
        rain_volume: rain_volume(payload.rain.as_ref()),
        humidity: payload.main.humidity,
        pressure: payload.main.pressure,
        city: payload.name,
        icon: condition.icon,
    }
}

/// Keeps upstream order and drops anything without both a title and a description.
pub fn normalize_news(payload: NewsPayload) -> Vec<NewsArticle> {
    payload
        .articles
        .into_iter()
        .filter_map(normalize_article)
        .collect()
}

fn normalize_article(article: ArticlePayload) -> Option<NewsArticle> {
    let title = article.title.filter(|t| !t.is_empty())?;
    let description = article.description.filter(|d| !d.is_empty())?;

    Some(NewsArticle {
        title,
        description,
        source: article.source.and_then(|s| s.name).unwrap_or_default(),
        published_at: article.published_at.unwrap_or_default(),
        url: article.url.unwrap_or_default(),
        url_to_image: article.url_to_image,
        author: article.author,
    })
}

/// Three-hour accumulation wins over one-hour; nothing reported means 0 mm.
fn rain_volume(rain: Option<&RainPayload>) -> f64 {
    rain.and_then(|r| r.three_hours.or(r.one_hour)).unwrap_or(0.0)
}

/// Nearest integer, halves toward positive infinity (-2.5 -> -2, 2.5 -> 3)
fn round_half_up(value: f64) -> i32 {
    // `value + 0.5` can round up to the next integer just below a half
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i32
}
