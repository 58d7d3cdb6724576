pub mod api;

pub use api::*;

use crate::config::Config;
use axum::{http::HeaderValue, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Build the full application router
pub fn create_app(config: &Config) -> Router {
    Router::new()
        .nest("/api", create_api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(config)),
        )
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins = config.cors_origin_list();
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins.iter().filter_map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| warn!(%origin, "Ignoring invalid CORS origin"))
                .ok()
        }))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}
