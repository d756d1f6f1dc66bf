use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument};

use super::{service::GameService, view::GamesResponse};
use crate::shared::{AppError, AppState};

/// HTTP handler for the season game log
///
/// GET /api/games
/// Returns games (most recent first) and the season win/loss record
#[instrument(name = "list_games", skip(state))]
pub async fn list_games(State(state): State<AppState>) -> Result<Json<GamesResponse>, AppError> {
    info!("Listing season games");

    let service = GameService::new(state.data_source.clone(), Arc::clone(&state.config));
    let response = service.season_games(Utc::now().date_naive()).await?;

    Ok(Json(response))
}
