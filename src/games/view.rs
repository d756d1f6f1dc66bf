use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::upstream::ApiGame;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opponent {
    pub name: String,
    pub city: String,
    pub abbreviation: String,
}

/// A game seen from the tracked team's side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: u64,
    pub date: String,
    pub datetime: Option<String>,
    pub status: String,
    pub opponent: Opponent,
    pub is_home_game: bool,
    #[serde(rename = "hornetsScore")]
    pub team_score: u32,
    pub opponent_score: u32,
    /// Strictly greater score; a tie counts as a loss
    #[serde(rename = "hornetsWon")]
    pub team_won: bool,
}

impl GameView {
    pub fn from_game(game: &ApiGame, tracked_team_id: u32) -> Self {
        let is_home_game = game.home_team.id == tracked_team_id;
        let (opponent, team_score, opponent_score) = if is_home_game {
            (
                &game.visitor_team,
                game.home_team_score,
                game.visitor_team_score,
            )
        } else {
            (&game.home_team, game.visitor_team_score, game.home_team_score)
        };

        Self {
            id: game.id,
            date: game.date.clone(),
            datetime: game.datetime.clone(),
            status: game.status.clone(),
            opponent: Opponent {
                name: opponent.name.clone(),
                city: opponent.city.clone(),
                abbreviation: opponent.abbreviation.clone(),
            },
            is_home_game,
            team_score,
            opponent_score,
            team_won: team_score > opponent_score,
        }
    }

    fn tipoff(&self) -> Option<DateTime<FixedOffset>> {
        self.datetime
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub wins: usize,
    pub losses: usize,
}

impl SeasonRecord {
    pub fn from_games(games: &[GameView]) -> Self {
        let wins = games.iter().filter(|game| game.team_won).count();
        Self {
            wins,
            losses: games.len() - wins,
        }
    }

    pub fn games_played(&self) -> usize {
        self.wins + self.losses
    }

    /// Wins as a percentage of games played, `None` before the first game
    pub fn win_percentage(&self) -> Option<f64> {
        match self.games_played() {
            0 => None,
            played => Some(self.wins as f64 / played as f64 * 100.0),
        }
    }
}

/// Most recent tip-off first. Stable, so ties keep their input order and
/// games without a parsable timestamp go last.
pub fn sort_most_recent_first(games: &mut [GameView]) {
    games.sort_by(|a, b| b.tipoff().cmp(&a.tipoff()));
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamesResponse {
    pub games: Vec<GameView>,
    pub season_record: SeasonRecord,
}

impl GamesResponse {
    pub fn build(raw_games: &[ApiGame], tracked_team_id: u32) -> Self {
        let mut games: Vec<GameView> = raw_games
            .iter()
            .map(|game| GameView::from_game(game, tracked_team_id))
            .collect();
        sort_most_recent_first(&mut games);
        let season_record = SeasonRecord::from_games(&games);

        Self {
            games,
            season_record,
        }
    }
}
