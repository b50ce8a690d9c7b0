// News domain models
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub title: String,
    pub description: String,
    /// Name of the publishing source
    pub source: String,
    pub published_at: String,
    pub url: String,
    pub url_to_image: Option<String>,
    pub author: Option<String>,
}

/// Body of the single-city news endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsFeed {
    pub city: String,
    pub total_results: usize,
    pub articles: Vec<NewsArticle>,
}

impl NewsFeed {
    pub fn new(city: String, articles: Vec<NewsArticle>) -> Self {
        Self {
            city,
            total_results: articles.len(),
            articles,
        }
    }
}
