use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, AUTHORIZATION},
    Client,
};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::{
    models::{parse_page, ApiGame, ApiPlayer, ApiTeam, Page, SeasonAverage},
    query::{GamesQuery, PlayersQuery},
    source::SportsDataSource,
    UpstreamError,
};

/// balldontlie REST client
#[derive(Debug, Clone)]
pub struct BallDontLieClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl BallDontLieClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .user_agent("hornets-dashboard/0.1")
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::Transport {
                url: base_url.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        resource: &str,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Page<T>, UpstreamError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(url = %url, ?params, "Requesting upstream page");

        let transport_error = |e: reqwest::Error| UpstreamError::Transport {
            url: url.clone(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.api_key.as_str())
            .header(ACCEPT, "application/json")
            .query(params)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            error!(
                resource,
                status = status.as_u16(),
                body = %body,
                "Upstream returned an error status"
            );
            return Err(UpstreamError::Status {
                resource: resource.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        parse_page(&body, resource).map_err(|e| {
            error!(resource, error = %e, "Upstream payload rejected");
            e
        })
    }
}

#[async_trait]
impl SportsDataSource for BallDontLieClient {
    #[instrument(skip(self))]
    async fn games_page(
        &self,
        query: &GamesQuery,
        cursor: Option<u64>,
    ) -> Result<Page<ApiGame>, UpstreamError> {
        self.get_page("games", "games", &query.params(cursor)).await
    }

    #[instrument(skip(self))]
    async fn teams(&self) -> Result<Vec<ApiTeam>, UpstreamError> {
        let page = self.get_page("teams", "teams", &[]).await?;
        Ok(page.data)
    }

    #[instrument(skip(self))]
    async fn players_page(
        &self,
        query: &PlayersQuery,
        cursor: Option<u64>,
    ) -> Result<Page<ApiPlayer>, UpstreamError> {
        self.get_page("players", "players", &query.params(cursor)).await
    }

    #[instrument(skip(self))]
    async fn season_average(
        &self,
        season: i32,
        player_id: u64,
    ) -> Result<Option<SeasonAverage>, UpstreamError> {
        let params = [
            ("season", season.to_string()),
            ("player_id", player_id.to_string()),
        ];
        let page: Page<SeasonAverage> = self
            .get_page("season averages", "season_averages", &params)
            .await?;
        Ok(page.data.into_iter().next())
    }
}
