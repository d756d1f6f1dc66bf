use std::future::Future;
use tracing::{info, instrument, warn};

use super::{
    models::{ApiGame, ApiPlayer, Page},
    query::{GamesQuery, PlayersQuery},
    source::SportsDataSource,
    UpstreamError,
};

/// Drives a cursor-paginated endpoint until it stops returning a cursor.
///
/// Pages are requested strictly one after another and their records are
/// concatenated in arrival order. Any failing page aborts the whole walk and
/// nothing collected so far is returned. At most `max_pages` requests are
/// issued; a chain that is still going after that is reported as
/// [`UpstreamError::PageLimitExceeded`].
pub async fn collect_pages<T, F, Fut>(
    resource: &str,
    max_pages: usize,
    mut fetch_page: F,
) -> Result<Vec<T>, UpstreamError>
where
    F: FnMut(Option<u64>) -> Fut,
    Fut: Future<Output = Result<Page<T>, UpstreamError>>,
{
    let mut records = Vec::new();
    let mut cursor = None;

    for page_number in 1..=max_pages {
        let page = fetch_page(cursor).await?;
        let fetched = page.data.len();
        records.extend(page.data);

        info!(
            resource,
            page = page_number,
            fetched,
            total = records.len(),
            next_cursor = ?page.next_cursor,
            "Fetched page"
        );

        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => return Ok(records),
        }
    }

    warn!(resource, max_pages, "Cursor chain exceeded page limit");
    Err(UpstreamError::PageLimitExceeded {
        resource: resource.to_string(),
        max_pages,
    })
}

/// All games matching `query`, across every page
#[instrument(skip(source))]
pub async fn fetch_all_games(
    source: &dyn SportsDataSource,
    query: &GamesQuery,
    max_pages: usize,
) -> Result<Vec<ApiGame>, UpstreamError> {
    collect_pages("games", max_pages, |cursor| source.games_page(query, cursor)).await
}

/// The full roster for `query.team_id`, across every page
#[instrument(skip(source))]
pub async fn fetch_all_players(
    source: &dyn SportsDataSource,
    query: &PlayersQuery,
    max_pages: usize,
) -> Result<Vec<ApiPlayer>, UpstreamError> {
    collect_pages("players", max_pages, |cursor| source.players_page(query, cursor)).await
}
