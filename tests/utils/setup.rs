use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

use hornets_dashboard::{build_router, AppConfig, AppState, RosterFixture, SportsDataSource};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

pub struct TestAppBuilder {
    config: AppConfig,
    data_source: Option<Arc<dyn SportsDataSource>>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            data_source: None,
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_data_source(mut self, source: Arc<dyn SportsDataSource>) -> Self {
        self.data_source = Some(source);
        self
    }

    pub fn build(self) -> Router {
        let state = AppState::new(
            self.config,
            self.data_source,
            RosterFixture::charlotte_hornets(),
        );
        build_router(state)
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
