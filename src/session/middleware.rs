use axum::{
    extract::{Request, State},
    http::header::{AUTHORIZATION, COOKIE},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use url::form_urlencoded;

use super::token::SessionValidator;

/// Cookie the auth provider stores the session token in
pub const SESSION_COOKIE: &str = "appSession";
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Session gate - lets requests with a valid session token through and
/// redirects everything else to the login route.
/// Usage: .layer(middleware::from_fn_with_state(validator, session::require_session))
/// Handlers can then extract Extension(claims): Extension<SessionClaims>.
#[instrument(skip(validator, req, next))]
pub async fn require_session(
    State(validator): State<Arc<SessionValidator>>,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_string(), |pq| pq.as_str().to_string());

    let Some(token) = session_token(&req) else {
        warn!(path = %path, "No session token on request; redirecting to login");
        return login_redirect(&path);
    };

    let claims = match validator.validate(&token) {
        Ok(claims) => claims,
        Err(e) => {
            warn!(path = %path, "Session rejected: {}", e);
            return login_redirect(&path);
        }
    };

    info!(subject = %claims.sub, path = %path, "Session accepted");

    // Add claims to request extensions for handlers to use
    req.extensions_mut().insert(claims);

    next.run(req).await
}

/// Bearer token first, then the session cookie
fn session_token(req: &Request) -> Option<String> {
    let bearer = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string());
    if bearer.is_some() {
        return bearer;
    }

    req.headers()
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
}

fn login_redirect(return_to: &str) -> Response {
    let return_to: String = form_urlencoded::byte_serialize(return_to.as_bytes()).collect();
    Redirect::temporary(&format!("{LOGIN_PATH}?returnTo={return_to}")).into_response()
}
