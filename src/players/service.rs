use futures::future::join_all;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use super::{
    fixtures::RosterFixture,
    models::{sort_by_points, Player, PlayerStats},
};
use crate::{
    config::AppConfig,
    upstream::{fetch_all_players, ApiPlayer, PlayersQuery, SportsDataSource, UpstreamError},
};

/// Where a served roster came from
#[derive(Debug, Clone, PartialEq)]
pub enum RosterOutcome {
    Live(Vec<Player>),
    /// Mock roster served in place of live data
    Degraded { players: Vec<Player>, reason: String },
}

impl RosterOutcome {
    pub fn players(&self) -> &[Player] {
        match self {
            RosterOutcome::Live(players) => players,
            RosterOutcome::Degraded { players, .. } => players,
        }
    }

    pub fn into_players(self) -> Vec<Player> {
        match self {
            RosterOutcome::Live(players) => players,
            RosterOutcome::Degraded { players, .. } => players,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, RosterOutcome::Degraded { .. })
    }

    pub fn source_label(&self) -> &'static str {
        match self {
            RosterOutcome::Live(_) => "live",
            RosterOutcome::Degraded { .. } => "fallback",
        }
    }
}

#[derive(Debug, Error)]
enum RosterError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("No players listed for team {0}")]
    EmptyRoster(u32),
}

/// Service for the tracked team's roster and season averages
pub struct PlayerService {
    data_source: Option<Arc<dyn SportsDataSource>>,
    config: Arc<AppConfig>,
    fallback: Arc<RosterFixture>,
}

impl PlayerService {
    pub fn new(
        data_source: Option<Arc<dyn SportsDataSource>>,
        config: Arc<AppConfig>,
        fallback: Arc<RosterFixture>,
    ) -> Self {
        Self {
            data_source,
            config,
            fallback,
        }
    }

    /// Roster sorted by points per game. Never fails: any lookup problem
    /// yields the fallback roster tagged with the reason.
    #[instrument(skip(self))]
    pub async fn roster(&self) -> RosterOutcome {
        match self.live_roster().await {
            Ok(mut players) => {
                sort_by_points(&mut players);
                info!(players = players.len(), "Serving live roster");
                RosterOutcome::Live(players)
            }
            Err(e) => {
                let reason = e.to_string();
                warn!(reason = %reason, "Falling back to mock roster");
                let mut players = self.fallback.players().to_vec();
                sort_by_points(&mut players);
                RosterOutcome::Degraded { players, reason }
            }
        }
    }

    async fn live_roster(&self) -> Result<Vec<Player>, RosterError> {
        let source = self
            .data_source
            .as_deref()
            .ok_or(RosterError::MissingApiKey)?;

        let team_name = &self.config.tracked_team_name;
        let team = source
            .teams()
            .await?
            .into_iter()
            .find(|team| &team.full_name == team_name)
            .ok_or_else(|| RosterError::TeamNotFound(team_name.clone()))?;
        debug!(team_id = team.id, team = %team.full_name, "Resolved tracked team");

        let query = PlayersQuery {
            team_id: team.id,
            per_page: self.config.page_size,
        };
        let roster = fetch_all_players(source, &query, self.config.max_pages).await?;
        if roster.is_empty() {
            return Err(RosterError::EmptyRoster(team.id));
        }

        Ok(enrich_with_averages(source, self.config.season, roster).await)
    }
}

/// One season-average lookup per player, dispatched together. A failed or
/// empty lookup zeroes that player's stats without affecting the others.
async fn enrich_with_averages(
    source: &dyn SportsDataSource,
    season: i32,
    roster: Vec<ApiPlayer>,
) -> Vec<Player> {
    let lookups = roster.into_iter().map(|player| async move {
        let stats = match source.season_average(season, player.id).await {
            Ok(Some(average)) => PlayerStats::from(&average),
            Ok(None) => {
                debug!(player_id = player.id, "No season averages; using zeroed stats");
                PlayerStats::default()
            }
            Err(e) => {
                warn!(player_id = player.id, error = %e, "Season average lookup failed; using zeroed stats");
                PlayerStats::default()
            }
        };
        Player::from_upstream(player, stats)
    });

    join_all(lookups).await
}
