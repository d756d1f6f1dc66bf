use super::models::{Player, PlayerStats, PlayerTeam, Position};

/// Static roster served when live player data cannot be assembled.
/// Held in `AppState` so tests can inject their own.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterFixture {
    players: Vec<Player>,
}

impl RosterFixture {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// 2024-25 Charlotte Hornets rotation
    pub fn charlotte_hornets() -> Self {
        let rows = [
            // id, first, last, position, gp, min, pts, reb, ast, fg%, 3p%
            (1, "Brandon", "Miller", Position::SmallForward, 58, 32.8, 16.2, 4.1, 2.3, 0.438, 0.371),
            (2, "LaMelo", "Ball", Position::PointGuard, 22, 32.4, 23.9, 5.1, 8.0, 0.441, 0.385),
            (3, "Miles", "Bridges", Position::SmallForward, 37, 33.1, 21.5, 7.2, 3.2, 0.462, 0.354),
            (4, "Grant", "Williams", Position::PowerForward, 44, 30.5, 13.1, 4.8, 2.4, 0.451, 0.375),
            (5, "Nick", "Richards", Position::Center, 51, 18.2, 8.8, 6.4, 0.8, 0.682, 0.000),
            (6, "Tre", "Mann", Position::PointGuard, 15, 17.5, 8.7, 2.1, 2.8, 0.425, 0.348),
            (7, "Davis", "Bertans", Position::PowerForward, 15, 14.8, 7.2, 2.1, 0.8, 0.438, 0.421),
            (8, "Cody", "Martin", Position::SmallForward, 31, 21.5, 5.2, 3.8, 1.8, 0.412, 0.328),
        ];

        let players = rows
            .into_iter()
            .map(|(id, first, last, position, gp, min, pts, reb, ast, fg, fg3)| Player {
                id,
                first_name: first.to_string(),
                last_name: last.to_string(),
                position: Some(position),
                team: charlotte(),
                stats: PlayerStats {
                    games_played: gp,
                    minutes_per_game: min,
                    points_per_game: pts,
                    rebounds_per_game: reb,
                    assists_per_game: ast,
                    field_goal_percentage: fg,
                    three_point_percentage: fg3,
                },
            })
            .collect();

        Self::new(players)
    }
}

fn charlotte() -> PlayerTeam {
    PlayerTeam {
        id: 30,
        abbreviation: "CHA".to_string(),
        city: "Charlotte".to_string(),
        conference: "East".to_string(),
        division: "Southeast".to_string(),
        full_name: "Charlotte Hornets".to_string(),
        name: "Hornets".to_string(),
    }
}
