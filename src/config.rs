use chrono::NaiveDate;
use std::num::{NonZeroU32, NonZeroU64, NonZeroUsize};
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "https://api.balldontlie.io/v1";
pub const DEFAULT_TRACKED_TEAM_ID: u32 = 30;
pub const DEFAULT_TRACKED_TEAM_NAME: &str = "Charlotte Hornets";
pub const DEFAULT_SEASON: i32 = 2024;
pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_MAX_PAGES: usize = 50;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Runtime configuration for the dashboard backend
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// balldontlie API key. `None` disables every upstream call.
    pub api_key: Option<String>,
    pub api_url: String,
    pub tracked_team_id: u32,
    pub tracked_team_name: String,
    pub season_start: NaiveDate,
    pub season: i32,
    pub page_size: u32,
    pub max_pages: usize,
    pub upstream_timeout: Duration,
    /// HS256 secret for session tokens. `None` leaves the API ungated.
    pub session_secret: Option<String>,
    pub bind_address: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            tracked_team_id: DEFAULT_TRACKED_TEAM_ID,
            tracked_team_name: DEFAULT_TRACKED_TEAM_NAME.to_string(),
            season_start: default_season_start(),
            season: DEFAULT_SEASON,
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
            upstream_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_secret: None,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_key: non_empty_var("BALL_DONT_LIE_API_KEY"),
            api_url: non_empty_var("BALL_DONT_LIE_API_URL").unwrap_or(defaults.api_url),
            tracked_team_id: parsed_var("TRACKED_TEAM_ID").unwrap_or(defaults.tracked_team_id),
            tracked_team_name: non_empty_var("TRACKED_TEAM_NAME")
                .unwrap_or(defaults.tracked_team_name),
            season_start: parsed_var("SEASON_START_DATE").unwrap_or(defaults.season_start),
            season: parsed_var("SEASON").unwrap_or(defaults.season),
            page_size: parsed_var("PAGE_SIZE")
                .map(NonZeroU32::get)
                .unwrap_or(defaults.page_size),
            max_pages: parsed_var("MAX_PAGES")
                .map(NonZeroUsize::get)
                .unwrap_or(defaults.max_pages),
            upstream_timeout: parsed_var("UPSTREAM_TIMEOUT_SECS")
                .map(|secs: NonZeroU64| Duration::from_secs(secs.get()))
                .unwrap_or(defaults.upstream_timeout),
            session_secret: non_empty_var("SESSION_SECRET"),
            bind_address: non_empty_var("BIND_ADDRESS").unwrap_or(defaults.bind_address),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_session_secret(mut self, secret: impl Into<String>) -> Self {
        self.session_secret = Some(secret.into());
        self
    }
}

fn default_season_start() -> NaiveDate {
    // 2024-25 regular season opener
    NaiveDate::from_ymd_opt(2024, 10, 24).unwrap_or_default()
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parsed_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = non_empty_var(name)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(variable = name, value = %raw, "Ignoring unparsable environment variable");
            None
        }
    }
}
