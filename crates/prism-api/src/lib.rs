pub mod account;
pub mod error;
pub mod news;
pub mod profile;
pub mod versions;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use prism_db::Database;

pub use error::ApiError;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
}

/// All site routes. CORS and tracing layers are applied by the server
/// binary on top of this.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/account", post(account::account))
        .route("/api/news", get(news::list_news))
        .route("/api/profile", get(profile::get_profile))
        .route("/api/versions", get(versions::list_versions))
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
