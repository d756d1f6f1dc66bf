use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumString};

use crate::upstream::{ApiPlayer, ApiTeam, SeasonAverage};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum Position {
    #[serde(rename = "PG")]
    #[strum(serialize = "PG")]
    PointGuard,
    #[serde(rename = "SG")]
    #[strum(serialize = "SG")]
    ShootingGuard,
    #[serde(rename = "SF")]
    #[strum(serialize = "SF")]
    SmallForward,
    #[serde(rename = "PF")]
    #[strum(serialize = "PF")]
    PowerForward,
    #[serde(rename = "C")]
    #[strum(serialize = "C")]
    Center,
}

impl Position {
    /// Maps balldontlie's combined role codes ("G", "F-C", ...) onto a single
    /// position using the first listed role
    pub fn from_upstream(code: &str) -> Option<Self> {
        let code = code.trim();
        if let Ok(position) = Position::from_str(code) {
            return Some(position);
        }
        match code {
            "G" | "G-F" => Some(Position::ShootingGuard),
            "F" | "F-G" => Some(Position::SmallForward),
            "F-C" => Some(Position::PowerForward),
            "C-F" => Some(Position::Center),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerTeam {
    pub id: u32,
    pub abbreviation: String,
    pub city: String,
    pub conference: String,
    pub division: String,
    pub full_name: String,
    pub name: String,
}

impl From<ApiTeam> for PlayerTeam {
    fn from(team: ApiTeam) -> Self {
        Self {
            id: team.id,
            abbreviation: team.abbreviation,
            city: team.city,
            conference: team.conference,
            division: team.division,
            full_name: team.full_name,
            name: team.name,
        }
    }
}

/// Per-game season averages. Percentages are fractions in `[0, 1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub games_played: u32,
    pub minutes_per_game: f64,
    pub points_per_game: f64,
    pub rebounds_per_game: f64,
    pub assists_per_game: f64,
    pub field_goal_percentage: f64,
    pub three_point_percentage: f64,
}

impl From<&SeasonAverage> for PlayerStats {
    fn from(average: &SeasonAverage) -> Self {
        Self {
            games_played: average.games_played,
            minutes_per_game: average
                .min
                .as_ref()
                .map(|minutes| minutes.as_decimal())
                .unwrap_or_default(),
            points_per_game: average.pts.unwrap_or_default(),
            rebounds_per_game: average.reb.unwrap_or_default(),
            assists_per_game: average.ast.unwrap_or_default(),
            field_goal_percentage: average.fg_pct.unwrap_or_default(),
            three_point_percentage: average.fg3_pct.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    /// `None` when the provider lists no recognisable position
    pub position: Option<Position>,
    pub team: PlayerTeam,
    pub stats: PlayerStats,
}

impl Player {
    pub fn from_upstream(player: ApiPlayer, stats: PlayerStats) -> Self {
        Self {
            id: player.id,
            position: Position::from_upstream(&player.position),
            first_name: player.first_name,
            last_name: player.last_name,
            team: player.team.into(),
            stats,
        }
    }
}

/// Highest points per game first
pub fn sort_by_points(players: &mut [Player]) {
    players.sort_by(|a, b| {
        b.stats
            .points_per_game
            .total_cmp(&a.stats.points_per_game)
    });
}
