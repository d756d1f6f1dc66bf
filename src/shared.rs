use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::config::AppConfig;
use crate::players::fixtures::RosterFixture;
use crate::session::SessionValidator;
use crate::upstream::{BallDontLieClient, SportsDataSource, UpstreamError};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// `None` when no API key is configured
    pub data_source: Option<Arc<dyn SportsDataSource>>,
    pub roster_fixture: Arc<RosterFixture>,
    pub session_validator: Option<Arc<SessionValidator>>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        data_source: Option<Arc<dyn SportsDataSource>>,
        roster_fixture: RosterFixture,
    ) -> Self {
        let session_validator = config
            .session_secret
            .as_deref()
            .map(|secret| Arc::new(SessionValidator::new(secret)));

        Self {
            config: Arc::new(config),
            data_source,
            roster_fixture: Arc::new(roster_fixture),
            session_validator,
        }
    }

    /// Wires the live balldontlie client when an API key is present
    pub fn from_config(config: AppConfig) -> Result<Self, UpstreamError> {
        let data_source: Option<Arc<dyn SportsDataSource>> = match config.api_key.as_deref() {
            Some(api_key) => {
                let client = BallDontLieClient::new(
                    config.api_url.as_str(),
                    api_key,
                    config.upstream_timeout,
                )?;
                Some(Arc::new(client) as Arc<dyn SportsDataSource>)
            }
            None => {
                warn!("BALL_DONT_LIE_API_KEY is not set; games will fail and players will use mock data");
                None
            }
        };

        Ok(Self::new(
            config,
            data_source,
            RosterFixture::charlotte_hornets(),
        ))
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "API key is not configured".to_string(),
            ),
            AppError::Upstream(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn missing_api_key_is_a_server_error_with_fixed_message() {
        let response = AppError::MissingApiKey.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "API key is not configured" })
        );
    }

    #[tokio::test]
    async fn upstream_errors_surface_their_message() {
        let error = AppError::from(UpstreamError::Status {
            resource: "games".to_string(),
            status: 503,
            body: "Service Unavailable".to_string(),
        });
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to fetch games: 503 Service Unavailable" })
        );
    }

    #[test]
    fn session_validator_follows_configured_secret() {
        let ungated = AppState::new(AppConfig::default(), None, RosterFixture::charlotte_hornets());
        let gated = AppState::new(
            AppConfig::default().with_session_secret("secret"),
            None,
            RosterFixture::charlotte_hornets(),
        );

        assert!(ungated.session_validator.is_none());
        assert!(gated.session_validator.is_some());
    }
}
