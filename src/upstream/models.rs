use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::UpstreamError;

/// Team reference as returned by balldontlie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiTeam {
    pub id: u32,
    #[serde(default)]
    pub conference: String,
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub abbreviation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiGame {
    pub id: u64,
    pub date: String,
    #[serde(default)]
    pub datetime: Option<String>,
    #[serde(default)]
    pub season: Option<i32>,
    pub status: String,
    #[serde(default)]
    pub period: Option<u32>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub postseason: Option<bool>,
    pub home_team_score: u32,
    pub visitor_team_score: u32,
    pub home_team: ApiTeam,
    pub visitor_team: ApiTeam,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiPlayer {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub position: String,
    pub team: ApiTeam,
}

/// Minutes come back as "MM:SS" text from most seasons, as a number from some
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Minutes {
    Number(f64),
    Text(String),
}

impl Minutes {
    pub fn as_decimal(&self) -> f64 {
        match self {
            Minutes::Number(value) => *value,
            Minutes::Text(text) => parse_minutes(text).unwrap_or(0.0),
        }
    }
}

fn parse_minutes(text: &str) -> Option<f64> {
    let text = text.trim();
    let value = match text.split_once(':') {
        Some((minutes, seconds)) => {
            let minutes: f64 = minutes.parse().ok()?;
            let seconds: f64 = seconds.parse().ok()?;
            minutes + seconds / 60.0
        }
        None => text.parse().ok()?,
    };
    Some(value).filter(|minutes| minutes.is_finite())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonAverage {
    pub player_id: u64,
    #[serde(default)]
    pub season: Option<i32>,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub min: Option<Minutes>,
    #[serde(default)]
    pub pts: Option<f64>,
    #[serde(default)]
    pub reb: Option<f64>,
    #[serde(default)]
    pub ast: Option<f64>,
    #[serde(default)]
    pub fg_pct: Option<f64>,
    #[serde(default)]
    pub fg3_pct: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub next_cursor: Option<u64>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// One validated page of upstream records
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub next_cursor: Option<u64>,
}

impl<T> Page<T> {
    pub fn last(data: Vec<T>) -> Self {
        Self {
            data,
            next_cursor: None,
        }
    }

    pub fn with_cursor(data: Vec<T>, next_cursor: u64) -> Self {
        Self {
            data,
            next_cursor: Some(next_cursor),
        }
    }
}

#[derive(Deserialize)]
struct RawPage {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    meta: Option<PageMeta>,
}

/// Parses a response body into a page. The `data` field must be present and
/// an array; anything else is rejected without partial recovery.
pub fn parse_page<T: DeserializeOwned>(body: &str, resource: &str) -> Result<Page<T>, UpstreamError> {
    let raw: RawPage = serde_json::from_str(body)
        .map_err(|e| UpstreamError::malformed(resource, e.to_string()))?;

    let items = match raw.data {
        Some(serde_json::Value::Array(items)) => items,
        Some(_) => return Err(UpstreamError::malformed(resource, "data is not an array")),
        None => return Err(UpstreamError::malformed(resource, "missing data field")),
    };

    let data = items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| UpstreamError::malformed(resource, e.to_string()))?;

    Ok(Page {
        data,
        next_cursor: raw.meta.and_then(|meta| meta.next_cursor),
    })
}
