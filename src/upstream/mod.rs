// Public API - what other modules can use
pub use client::BallDontLieClient;
pub use error::UpstreamError;
pub use models::{ApiGame, ApiPlayer, ApiTeam, Minutes, Page, SeasonAverage};
pub use pagination::{collect_pages, fetch_all_games, fetch_all_players};
pub use query::{GamesQuery, PlayersQuery};
pub use source::SportsDataSource;

// Internal modules
mod client;
mod error;
pub mod models;
pub mod pagination;
mod query;
mod source;
