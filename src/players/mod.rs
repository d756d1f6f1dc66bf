// Public API - what other modules can use
pub use fixtures::RosterFixture;
pub use format::{as_percent, display_name, leaders, LeaderEntry, StatCategory};
pub use handlers::{list_leaders, list_players, ROSTER_SOURCE_HEADER};
pub use models::{sort_by_points, Player, PlayerStats, PlayerTeam, Position};
pub use service::{PlayerService, RosterOutcome};

// Internal modules
pub mod fixtures;
pub mod format;
mod handlers;
pub mod models;
mod service;
