// Public API - what other modules can use
pub use middleware::{require_session, LOGIN_PATH, SESSION_COOKIE};
pub use token::SessionValidator;
pub use types::SessionClaims;

// Internal modules
mod middleware;
mod token;
mod types;
