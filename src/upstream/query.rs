use chrono::NaiveDate;

use crate::config::AppConfig;

/// Fixed filter for the games listing; the cursor is appended per page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamesQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub team_id: u32,
    pub per_page: u32,
}

impl GamesQuery {
    /// Season-to-date games for the tracked team, ending on `today`
    pub fn season_to_date(config: &AppConfig, today: NaiveDate) -> Self {
        Self {
            start_date: config.season_start,
            end_date: today,
            team_id: config.tracked_team_id,
            per_page: config.page_size,
        }
    }

    pub fn params(&self, cursor: Option<u64>) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("start_date", self.start_date.format("%Y-%m-%d").to_string()),
            ("end_date", self.end_date.format("%Y-%m-%d").to_string()),
            ("team_ids[]", self.team_id.to_string()),
            ("per_page", self.per_page.to_string()),
        ];
        push_cursor(&mut params, cursor);
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayersQuery {
    pub team_id: u32,
    pub per_page: u32,
}

impl PlayersQuery {
    pub fn params(&self, cursor: Option<u64>) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("team_ids[]", self.team_id.to_string()),
            ("per_page", self.per_page.to_string()),
        ];
        push_cursor(&mut params, cursor);
        params
    }
}

fn push_cursor(params: &mut Vec<(&'static str, String)>, cursor: Option<u64>) {
    if let Some(cursor) = cursor {
        params.push(("cursor", cursor.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> GamesQuery {
        GamesQuery {
            start_date: NaiveDate::from_ymd_opt(2024, 10, 24).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            team_id: 30,
            per_page: 100,
        }
    }

    #[test]
    fn games_params_without_cursor() {
        let params = query().params(None);
        assert_eq!(
            params,
            vec![
                ("start_date", "2024-10-24".to_string()),
                ("end_date", "2025-03-01".to_string()),
                ("team_ids[]", "30".to_string()),
                ("per_page", "100".to_string()),
            ]
        );
    }

    #[test]
    fn cursor_is_appended_last() {
        let params = query().params(Some(500));
        assert_eq!(params.len(), 5);
        assert_eq!(params.last(), Some(&("cursor", "500".to_string())));
    }

    #[test]
    fn season_to_date_uses_config() {
        let config = AppConfig::default();
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let query = GamesQuery::season_to_date(&config, today);

        assert_eq!(query.start_date, config.season_start);
        assert_eq!(query.end_date, today);
        assert_eq!(query.team_id, 30);
        assert_eq!(query.per_page, 100);
    }
}
