use axum::{Json, extract::State};

use prism_types::api::NewsItem;
use prism_types::time::opt_iso8601;

use crate::{ApiError, AppState};

/// GET /api/news — every news item, newest first.
pub async fn list_news(
    State(state): State<AppState>,
) -> Result<Json<Vec<NewsItem>>, ApiError> {
    let rows = state.db.list_news()?;

    let items = rows
        .into_iter()
        .map(|row| NewsItem {
            id: row.id,
            title: row.title,
            content: row.content,
            created_at: opt_iso8601(row.created_at.as_deref()),
            author: row.author,
            version_tag: row.version_tag,
        })
        .collect();

    Ok(Json(items))
}
