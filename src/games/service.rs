use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::view::GamesResponse;
use crate::{
    config::AppConfig,
    shared::AppError,
    upstream::{fetch_all_games, GamesQuery, SportsDataSource},
};

/// Service for the season game log
pub struct GameService {
    data_source: Option<Arc<dyn SportsDataSource>>,
    config: Arc<AppConfig>,
}

impl GameService {
    pub fn new(data_source: Option<Arc<dyn SportsDataSource>>, config: Arc<AppConfig>) -> Self {
        Self {
            data_source,
            config,
        }
    }

    /// Every tracked-team game from season start through `today`, most recent first.
    /// Any upstream failure fails the whole request.
    #[instrument(skip(self))]
    pub async fn season_games(&self, today: NaiveDate) -> Result<GamesResponse, AppError> {
        let source = self.data_source.as_ref().ok_or_else(|| {
            warn!("Games requested without an API key configured");
            AppError::MissingApiKey
        })?;

        let query = GamesQuery::season_to_date(&self.config, today);
        let raw_games = fetch_all_games(source.as_ref(), &query, self.config.max_pages).await?;
        let response = GamesResponse::build(&raw_games, self.config.tracked_team_id);

        info!(
            games = response.games.len(),
            wins = response.season_record.wins,
            losses = response.season_record.losses,
            "Built season game log"
        );

        Ok(response)
    }
}
