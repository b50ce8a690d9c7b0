// News service - Use case for the single-city news feed
use crate::application::error::{ServiceError, Upstream};
use crate::application::normalizer::normalize_news;
use crate::application::upstream::NewsSource;
use crate::domain::city::CityQuery;
use crate::domain::news::NewsFeed;
use std::sync::Arc;

#[derive(Clone)]
pub struct NewsService {
    source: Arc<dyn NewsSource>,
}

impl NewsService {
    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        Self { source }
    }

    #[tracing::instrument(skip_all, fields(city = %city))]
    pub async fn get_news(&self, city: &CityQuery) -> Result<NewsFeed, ServiceError> {
        let payload = self.source.search_news(city).await.map_err(|e| {
            tracing::warn!(error = %e, "news lookup failed");
            ServiceError::upstream(Upstream::News, city.as_str(), e)
        })?;

        let articles = normalize_news(payload);
        tracing::info!(articles = articles.len(), "news lookup succeeded");
        Ok(NewsFeed::new(city.to_string(), articles))
    }
}
