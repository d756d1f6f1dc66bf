use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::{games, players, session, shared::AppState};

/// Dashboard API router. The session gate wraps every route when a session
/// secret is configured.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/games", get(games::list_games))
        .route("/api/players", get(players::list_players))
        .route("/api/players/leaders", get(players::list_leaders));

    let api = match state.session_validator.clone() {
        Some(validator) => {
            api.layer(middleware::from_fn_with_state(validator, session::require_session))
        }
        None => {
            warn!("SESSION_SECRET is not set; API routes are not gated");
            api
        }
    };

    api.layer(TraceLayer::new_for_http()).with_state(state)
}
