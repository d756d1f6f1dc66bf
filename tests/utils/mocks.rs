use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use hornets_dashboard::upstream::{
    ApiGame, ApiPlayer, ApiTeam, GamesQuery, Page, PlayersQuery, SeasonAverage,
    SportsDataSource, UpstreamError,
};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// A scripted response: the value, or the HTTP status to fail with
type Scripted<T> = Result<T, u16>;

fn status_error(resource: &str, status: u16) -> UpstreamError {
    UpstreamError::Status {
        resource: resource.to_string(),
        status,
        body: "scripted failure".to_string(),
    }
}

/// In-memory sports data source with scripted pages and request counters
pub struct StubDataSource {
    game_pages: Vec<Scripted<Page<ApiGame>>>,
    teams: Scripted<Vec<ApiTeam>>,
    player_pages: Vec<Scripted<Page<ApiPlayer>>>,
    averages: HashMap<u64, Scripted<Option<SeasonAverage>>>,
    game_cursors: Mutex<Vec<Option<u64>>>,
    team_requests: AtomicUsize,
    player_requests: AtomicUsize,
    average_requests: AtomicUsize,
}

impl StubDataSource {
    pub fn new() -> Self {
        Self {
            game_pages: Vec::new(),
            teams: Ok(Vec::new()),
            player_pages: Vec::new(),
            averages: HashMap::new(),
            game_cursors: Mutex::new(Vec::new()),
            team_requests: AtomicUsize::new(0),
            player_requests: AtomicUsize::new(0),
            average_requests: AtomicUsize::new(0),
        }
    }

    pub fn with_game_page(mut self, page: Page<ApiGame>) -> Self {
        self.game_pages.push(Ok(page));
        self
    }

    pub fn with_failing_game_page(mut self, status: u16) -> Self {
        self.game_pages.push(Err(status));
        self
    }

    pub fn with_teams(mut self, teams: Vec<ApiTeam>) -> Self {
        self.teams = Ok(teams);
        self
    }

    pub fn with_failing_teams(mut self, status: u16) -> Self {
        self.teams = Err(status);
        self
    }

    pub fn with_player_page(mut self, page: Page<ApiPlayer>) -> Self {
        self.player_pages.push(Ok(page));
        self
    }

    pub fn with_average(mut self, average: SeasonAverage) -> Self {
        self.averages.insert(average.player_id, Ok(Some(average)));
        self
    }

    pub fn with_failing_average(mut self, player_id: u64, status: u16) -> Self {
        self.averages.insert(player_id, Err(status));
        self
    }

    pub fn game_cursors(&self) -> Vec<Option<u64>> {
        self.game_cursors.lock().unwrap().clone()
    }

    pub fn game_requests(&self) -> usize {
        self.game_cursors.lock().unwrap().len()
    }

    pub fn team_requests(&self) -> usize {
        self.team_requests.load(Ordering::SeqCst)
    }

    pub fn player_requests(&self) -> usize {
        self.player_requests.load(Ordering::SeqCst)
    }

    pub fn average_requests(&self) -> usize {
        self.average_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SportsDataSource for StubDataSource {
    async fn games_page(
        &self,
        _query: &GamesQuery,
        cursor: Option<u64>,
    ) -> Result<Page<ApiGame>, UpstreamError> {
        let index = {
            let mut cursors = self.game_cursors.lock().unwrap();
            cursors.push(cursor);
            cursors.len() - 1
        };
        match self.game_pages.get(index) {
            Some(Ok(page)) => Ok(page.clone()),
            Some(Err(status)) => Err(status_error("games", *status)),
            None => Err(UpstreamError::malformed("games", "no scripted page")),
        }
    }

    async fn teams(&self) -> Result<Vec<ApiTeam>, UpstreamError> {
        self.team_requests.fetch_add(1, Ordering::SeqCst);
        self.teams
            .clone()
            .map_err(|status| status_error("teams", status))
    }

    async fn players_page(
        &self,
        _query: &PlayersQuery,
        _cursor: Option<u64>,
    ) -> Result<Page<ApiPlayer>, UpstreamError> {
        let index = self.player_requests.fetch_add(1, Ordering::SeqCst);
        match self.player_pages.get(index) {
            Some(Ok(page)) => Ok(page.clone()),
            Some(Err(status)) => Err(status_error("players", *status)),
            None => Ok(Page::last(Vec::new())),
        }
    }

    async fn season_average(
        &self,
        _season: i32,
        player_id: u64,
    ) -> Result<Option<SeasonAverage>, UpstreamError> {
        self.average_requests.fetch_add(1, Ordering::SeqCst);
        match self.averages.get(&player_id) {
            Some(Ok(average)) => Ok(average.clone()),
            Some(Err(status)) => Err(status_error("season averages", *status)),
            None => Ok(None),
        }
    }
}
