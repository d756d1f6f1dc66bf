// Library crate for the Hornets dashboard backend
// This file exposes the public API for integration tests

pub mod config;
pub mod games;
pub mod players;
pub mod routes;
pub mod session;
pub mod shared;
pub mod upstream;

// Re-export commonly used types for easier access in tests
pub use config::AppConfig;
pub use games::{GameView, GamesResponse, SeasonRecord};
pub use players::{Player, RosterFixture, RosterOutcome};
pub use routes::build_router;
pub use shared::{AppError, AppState};
pub use upstream::{BallDontLieClient, SportsDataSource, UpstreamError};
