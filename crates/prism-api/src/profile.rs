use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use prism_types::api::Profile;
use prism_types::time::opt_iso8601;

use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct ProfileParams {
    pub uid: Option<String>,
}

/// GET /api/profile?uid=N — public profile for one user.
pub async fn get_profile(
    State(state): State<AppState>,
    Query(params): Query<ProfileParams>,
) -> Result<Json<Profile>, ApiError> {
    let uid = params
        .uid
        .ok_or(ApiError::Validation("UID обязателен"))?;

    // A non-numeric uid cannot match any user.
    let user = uid
        .parse::<i64>()
        .ok()
        .map(|uid| state.db.get_user_by_uid(uid))
        .transpose()?
        .flatten()
        .ok_or(ApiError::NotFound("Пользователь не найден"))?;

    Ok(Json(Profile {
        uid: user.uid,
        username: user.username,
        created_at: opt_iso8601(user.created_at.as_deref()),
        last_login: opt_iso8601(user.last_login.as_deref()),
        downloads_count: user.downloads_count,
        favorite_version: user.favorite_version,
    }))
}
