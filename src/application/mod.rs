// Application layer - Use cases and the upstream ports they depend on
pub mod dashboard_service;
pub mod error;
pub mod news_service;
pub mod normalizer;
pub mod upstream;
pub mod weather_service;
