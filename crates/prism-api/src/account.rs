use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use sha2::{Digest, Sha256};

use prism_types::api::{AccountRequest, AccountResponse};

use crate::{ApiError, AppState};

/// POST /api/account — register and login share one endpoint, dispatched
/// on the `action` field of the body.
pub async fn account(
    State(state): State<AppState>,
    body: Result<Json<AccountRequest>, JsonRejection>,
) -> Result<Json<AccountResponse>, ApiError> {
    let Json(req) = body?;

    let username = req.username.trim();
    let password = req.password.trim();

    if username.is_empty() || password.is_empty() {
        return Err(ApiError::Validation("Логин и пароль обязательны"));
    }

    match req.action.as_deref() {
        Some("register") => register(&state, username, password),
        Some("login") => login(&state, username, password),
        _ => Err(ApiError::Validation("Неизвестное действие")),
    }
}

fn register(
    state: &AppState,
    username: &str,
    password: &str,
) -> Result<Json<AccountResponse>, ApiError> {
    // The UNIQUE constraint on username decides conflicts, so two
    // concurrent registrations cannot both slip through.
    let Some(uid) = state.db.create_user(username, &sha256_hex(password))? else {
        return Err(ApiError::Conflict("Пользователь уже существует"));
    };

    Ok(Json(AccountResponse {
        success: true,
        uid,
        username: username.to_string(),
    }))
}

fn login(
    state: &AppState,
    username: &str,
    password: &str,
) -> Result<Json<AccountResponse>, ApiError> {
    let Some((uid, username)) = state
        .db
        .find_user_by_credentials(username, &sha256_hex(password))?
    else {
        return Err(ApiError::Unauthorized("Неверный логин или пароль"));
    };

    state.db.touch_last_login(uid)?;

    Ok(Json(AccountResponse {
        success: true,
        uid,
        username,
    }))
}

/// Stored credential contract: unsalted SHA-256 of the password, rendered
/// as lowercase hex. A known weak scheme, but changing it would invalidate
/// every credential already on disk.
pub fn sha256_hex(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::sha256_hex;

    #[test]
    fn hashing_is_deterministic() {
        assert_eq!(sha256_hex("pw1"), sha256_hex("pw1"));
        assert_ne!(sha256_hex("pw1"), sha256_hex("pw2"));
    }

    #[test]
    fn hash_is_64_lowercase_hex_chars() {
        let h = sha256_hex("secret");
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn matches_the_reference_digest() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
