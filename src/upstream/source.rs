use async_trait::async_trait;

use super::{
    models::{ApiGame, ApiPlayer, ApiTeam, Page, SeasonAverage},
    query::{GamesQuery, PlayersQuery},
    UpstreamError,
};

/// Read access to the sports-data provider
#[async_trait]
pub trait SportsDataSource: Send + Sync {
    /// One page of games matching `query`, starting at `cursor`
    async fn games_page(
        &self,
        query: &GamesQuery,
        cursor: Option<u64>,
    ) -> Result<Page<ApiGame>, UpstreamError>;

    async fn teams(&self) -> Result<Vec<ApiTeam>, UpstreamError>;

    async fn players_page(
        &self,
        query: &PlayersQuery,
        cursor: Option<u64>,
    ) -> Result<Page<ApiPlayer>, UpstreamError>;

    /// Season averages for one player. `Ok(None)` when the player has not
    /// appeared this season.
    async fn season_average(
        &self,
        season: i32,
        player_id: u64,
    ) -> Result<Option<SeasonAverage>, UpstreamError>;
}
