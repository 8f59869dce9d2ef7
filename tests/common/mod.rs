//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use tower::ServiceExt;

use sitepulse::config::{AnalyticsSettings, ServerSettings, Settings};
use sitepulse::infrastructure::store::StatsStore;
use sitepulse::presentation::http::routes;
use sitepulse::presentation::middleware::cors;
use sitepulse::startup::AppState;

/// Test application builder
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a test application with default analytics settings
    pub fn new() -> Self {
        Self::with_analytics(AnalyticsSettings::default())
    }

    /// Create a test application with custom analytics settings
    pub fn with_analytics(analytics: AnalyticsSettings) -> Self {
        let settings = Settings {
            server: ServerSettings {
                host: "127.0.0.1".into(),
                port: 0,
            },
            analytics: analytics.clone(),
            environment: "test".into(),
        };

        let state = AppState {
            store: Arc::new(StatsStore::new(&analytics)),
            settings: Arc::new(settings),
        };

        Self {
            router: routes::create_router(state).layer(cors::create_cors_layer()),
        }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .header("Origin", "https://tracked.example")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a request with an arbitrary method and empty body
    pub async fn request(&self, method: &str, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Make a CORS preflight request
    pub async fn preflight(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri(uri)
                    .header("Origin", "https://tracked.example")
                    .header("Access-Control-Request-Method", "POST")
                    .header("Access-Control-Request-Headers", "Content-Type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// Read a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Generate a unique session identifier
pub fn unique_session_id() -> String {
    format!("sess_{}", uuid::Uuid::new_v4())
}
