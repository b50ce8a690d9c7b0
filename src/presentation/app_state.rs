// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::news_service::NewsService;
use crate::application::upstream::{NewsSource, WeatherSource};
use crate::application::weather_service::WeatherService;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub weather_service: WeatherService,
    pub news_service: NewsService,
    pub dashboard_service: DashboardService,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(weather_source: Arc<dyn WeatherSource>, news_source: Arc<dyn NewsSource>) -> Self {
        Self {
            weather_service: WeatherService::new(weather_source.clone()),
            news_service: NewsService::new(news_source.clone()),
            dashboard_service: DashboardService::new(weather_source, news_source),
            started_at: Instant::now(),
        }
    }
}
