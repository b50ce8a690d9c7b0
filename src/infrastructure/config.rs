use anyhow::Context;
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub weather: WeatherSettings,
    #[serde(default)]
    pub news: NewsSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served for any path the API does not claim
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherSettings {
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewsSettings {
    #[serde(default = "default_news_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for NewsSettings {
    fn default() -> Self {
        Self {
            base_url: default_news_base_url(),
            api_key: String::new(),
            page_size: default_page_size(),
            language: default_language(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_news_base_url() -> String {
    "https://newsapi.org/v2".to_string()
}

fn default_page_size() -> u32 {
    6
}

fn default_language() -> String {
    "en".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

impl WeatherSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl NewsSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl AppConfig {
    /// Log a warning for every upstream that has no API key configured.
    pub fn warn_on_missing_keys(&self) {
        if self.weather.api_key.is_empty() {
            tracing::warn!("OPENWEATHER_API_KEY is not set; weather requests will be rejected upstream");
        }
        if self.news.api_key.is_empty() {
            tracing::warn!("NEWS_API_KEY is not set; news requests will be rejected upstream");
        }
    }
}

/// Load configuration from `config/app.toml` (optional), `DASHBOARD_*`
/// variables and the conventional `OPENWEATHER_API_KEY`, `NEWS_API_KEY`
/// and `PORT` variables, later sources winning.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/app").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .set_override_option("weather.api_key", std::env::var("OPENWEATHER_API_KEY").ok())?
        .set_override_option("news.api_key", std::env::var("NEWS_API_KEY").ok())?
        .set_override_option("server.port", std::env::var("PORT").ok())?
        .build()?;

    Ok(settings.try_deserialize()?)
}
