//! CORS Middleware Configuration

use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Create the CORS layer for the public ingestion surface.
///
/// The endpoint is called by tracking snippets embedded on arbitrary
/// sites, so any origin may GET and POST; preflights are answered with
/// 200 and an empty body.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
