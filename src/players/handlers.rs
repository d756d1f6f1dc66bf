use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::{info, instrument};

use super::{
    format::{leaders, LeaderEntry, StatCategory},
    service::PlayerService,
};
use crate::shared::{AppError, AppState};

/// Tells clients whether the roster is live or the mock fallback
pub const ROSTER_SOURCE_HEADER: &str = "x-roster-source";

const DEFAULT_LEADER_LIMIT: usize = 5;

fn player_service(state: &AppState) -> PlayerService {
    PlayerService::new(
        state.data_source.clone(),
        Arc::clone(&state.config),
        Arc::clone(&state.roster_fixture),
    )
}

/// HTTP handler for the tracked team's roster
///
/// GET /api/players
/// Always 200; falls back to the mock roster when live data is unavailable
#[instrument(name = "list_players", skip(state))]
pub async fn list_players(State(state): State<AppState>) -> impl IntoResponse {
    info!("Listing players");

    let outcome = player_service(&state).roster().await;
    let source = outcome.source_label();

    info!(players = outcome.players().len(), source, "Players listed");

    ([(ROSTER_SOURCE_HEADER, source)], Json(outcome.into_players()))
}

#[derive(Debug, Deserialize)]
pub struct LeadersParams {
    pub category: Option<String>,
    /// Parsed by the handler so bad values get the JSON error body
    pub limit: Option<String>,
}

/// HTTP handler for per-category leaderboards
///
/// GET /api/players/leaders?category=points_per_game&limit=5
#[instrument(name = "list_leaders", skip(state))]
pub async fn list_leaders(
    State(state): State<AppState>,
    Query(params): Query<LeadersParams>,
) -> Result<impl IntoResponse, AppError> {
    let category = match params.category.as_deref() {
        Some(raw) => StatCategory::from_str(raw).map_err(|_| {
            let known: Vec<String> = StatCategory::iter().map(|c| c.to_string()).collect();
            AppError::BadRequest(format!(
                "Unknown category '{raw}', expected one of: {}",
                known.join(", ")
            ))
        })?,
        None => StatCategory::PointsPerGame,
    };
    let limit = match params.limit.as_deref() {
        Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid limit '{raw}', expected a non-negative integer"
            ))
        })?,
        None => DEFAULT_LEADER_LIMIT,
    };

    let outcome = player_service(&state).roster().await;
    let entries: Vec<LeaderEntry> = leaders(outcome.players(), category, limit);

    info!(%category, limit, entries = entries.len(), "Leaders listed");

    Ok((
        [(ROSTER_SOURCE_HEADER, outcome.source_label())],
        Json(entries),
    ))
}
