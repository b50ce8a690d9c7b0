// Route table and middleware stack
use crate::presentation::app_state::AppState;
use crate::presentation::error_response::{handle_panic, not_found};
use crate::presentation::handlers::{
    api_index, get_dashboard, get_news, get_weather, health_check, missing_city,
};
use axum::{Router, handler::HandlerWithoutStateExt, routing::get};
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, cors::CorsLayer,
    services::ServeDir, trace::TraceLayer,
};

pub fn build_router(state: Arc<AppState>, static_dir: &str) -> Router {
    // Anything the API does not claim is looked up on disk before giving up
    let static_files = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    // Known paths hit with another method get the same JSON 404 as unknown ones
    Router::new()
        .route("/", get(api_index).fallback(not_found))
        .route("/health", get(health_check).fallback(not_found))
        .route("/api/weather/", get(missing_city).fallback(not_found))
        .route("/api/weather/:city", get(get_weather).fallback(not_found))
        .route("/api/news/", get(missing_city).fallback(not_found))
        .route("/api/news/:city", get(get_news).fallback(not_found))
        .route("/api/dashboard/", get(missing_city).fallback(not_found))
        .route("/api/dashboard/:city", get(get_dashboard).fallback(not_found))
        .fallback_service(static_files)
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
}
