// NewsAPI client - Recent articles mentioning a city
use crate::application::error::{Upstream, UpstreamError};
use crate::application::upstream::{NewsPayload, NewsSource};
use crate::domain::city::CityQuery;
use crate::infrastructure::config::NewsSettings;
use crate::infrastructure::http_client::{build_http_client, classify_transport, read_json};
use async_trait::async_trait;

const SORT_BY: &str = "publishedAt";

#[derive(Debug, Clone)]
pub struct NewsApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    page_size: String,
    language: String,
}

impl NewsApiClient {
    pub fn new(settings: &NewsSettings) -> anyhow::Result<Self> {
        Ok(Self {
            http: build_http_client(settings.timeout())?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            page_size: settings.page_size.to_string(),
            language: settings.language.clone(),
        })
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn search_news(&self, city: &CityQuery) -> Result<NewsPayload, UpstreamError> {
        let url = format!("{}/everything", self.base_url);
        tracing::debug!(%url, city = %city, "searching news");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", city.as_str()),
                ("sortBy", SORT_BY),
                ("pageSize", self.page_size.as_str()),
                ("language", self.language.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(classify_transport)?;

        read_json(response, Upstream::News).await
    }
}
