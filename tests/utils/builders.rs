use hornets_dashboard::upstream::{ApiGame, ApiPlayer, ApiTeam, Minutes, SeasonAverage};

// ============================================================================
// Upstream Record Builders
// ============================================================================

pub const HORNETS_ID: u32 = 30;

pub fn team(id: u32, city: &str, name: &str, abbreviation: &str) -> ApiTeam {
    ApiTeam {
        id,
        conference: "East".to_string(),
        division: "Southeast".to_string(),
        city: city.to_string(),
        name: name.to_string(),
        full_name: format!("{city} {name}"),
        abbreviation: abbreviation.to_string(),
    }
}

pub fn hornets() -> ApiTeam {
    team(HORNETS_ID, "Charlotte", "Hornets", "CHA")
}

pub fn celtics() -> ApiTeam {
    team(2, "Boston", "Celtics", "BOS")
}

pub fn magic() -> ApiTeam {
    team(22, "Orlando", "Magic", "ORL")
}

pub struct GameBuilder {
    game: ApiGame,
}

impl GameBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            game: ApiGame {
                id,
                date: "2025-01-10".to_string(),
                datetime: Some("2025-01-10T00:00:00.000Z".to_string()),
                season: Some(2024),
                status: "Final".to_string(),
                period: Some(4),
                time: Some("Final".to_string()),
                postseason: Some(false),
                home_team_score: 0,
                visitor_team_score: 0,
                home_team: hornets(),
                visitor_team: celtics(),
            },
        }
    }

    pub fn at(mut self, datetime: &str) -> Self {
        self.game.date = datetime.get(..10).unwrap_or(datetime).to_string();
        self.game.datetime = Some(datetime.to_string());
        self
    }

    pub fn home(mut self, team: ApiTeam, score: u32) -> Self {
        self.game.home_team = team;
        self.game.home_team_score = score;
        self
    }

    pub fn visitor(mut self, team: ApiTeam, score: u32) -> Self {
        self.game.visitor_team = team;
        self.game.visitor_team_score = score;
        self
    }

    pub fn build(self) -> ApiGame {
        self.game
    }
}

/// `count` Hornets home games with consecutive ids starting at `first_id`,
/// one day apart, alternating wins and losses
pub fn season_of_games(first_id: u64, count: u64) -> Vec<ApiGame> {
    (0..count)
        .map(|offset| {
            let id = first_id + offset;
            let day = chrono::NaiveDate::from_ymd_opt(2024, 10, 24).unwrap()
                + chrono::Duration::days(id as i64);
            let (hornets_score, opponent_score) = if id % 2 == 0 { (110, 100) } else { (95, 105) };
            GameBuilder::new(id)
                .at(&format!("{}T23:00:00.000Z", day.format("%Y-%m-%d")))
                .home(hornets(), hornets_score)
                .visitor(magic(), opponent_score)
                .build()
        })
        .collect()
}

pub fn player(id: u64, first_name: &str, last_name: &str, position: &str) -> ApiPlayer {
    ApiPlayer {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        position: position.to_string(),
        team: hornets(),
    }
}

pub fn season_average(player_id: u64, points: f64) -> SeasonAverage {
    SeasonAverage {
        player_id,
        season: Some(2024),
        games_played: 40,
        min: Some(Minutes::Text("30:00".to_string())),
        pts: Some(points),
        reb: Some(5.0),
        ast: Some(3.0),
        fg_pct: Some(0.45),
        fg3_pct: Some(0.36),
    }
}
