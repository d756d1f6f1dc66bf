// Public API - what other modules can use
pub use handlers::list_games;
pub use service::GameService;
pub use view::{sort_most_recent_first, GameView, GamesResponse, Opponent, SeasonRecord};

// Internal modules
mod handlers;
mod service;
pub mod view;
