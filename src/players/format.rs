//! Display helpers for chart widgets. These never touch the served roster;
//! callers apply them per render.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::models::{Player, PlayerStats};

/// Scales a `[0, 1]` fraction to a percentage
pub fn as_percent(fraction: f64) -> f64 {
    fraction * 100.0
}

/// Shortens the first name to an initial when it is longer than two
/// characters: "LaMelo Ball" becomes "L. Ball", "Bo Cruz" stays as is.
pub fn display_name(first_name: &str, last_name: &str) -> String {
    let mut chars = first_name.chars();
    match chars.next() {
        Some(initial) if first_name.chars().count() > 2 => format!("{initial}. {last_name}"),
        _ => format!("{first_name} {last_name}").trim().to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum StatCategory {
    PointsPerGame,
    ReboundsPerGame,
    AssistsPerGame,
    FieldGoalPercentage,
    ThreePointPercentage,
    MinutesPerGame,
}

impl StatCategory {
    pub fn value(&self, stats: &PlayerStats) -> f64 {
        match self {
            StatCategory::PointsPerGame => stats.points_per_game,
            StatCategory::ReboundsPerGame => stats.rebounds_per_game,
            StatCategory::AssistsPerGame => stats.assists_per_game,
            StatCategory::FieldGoalPercentage => stats.field_goal_percentage,
            StatCategory::ThreePointPercentage => stats.three_point_percentage,
            StatCategory::MinutesPerGame => stats.minutes_per_game,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderEntry {
    pub id: u64,
    pub name: String,
    pub value: f64,
}

/// Top `limit` players for `category`, best first. Equal values keep roster order.
pub fn leaders(players: &[Player], category: StatCategory, limit: usize) -> Vec<LeaderEntry> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by(|a, b| category.value(&b.stats).total_cmp(&category.value(&a.stats)));

    ranked
        .into_iter()
        .take(limit)
        .map(|player| LeaderEntry {
            id: player.id,
            name: display_name(&player.first_name, &player.last_name),
            value: category.value(&player.stats),
        })
        .collect()
}
