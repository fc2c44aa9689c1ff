use serde::{Deserialize, Serialize};

// -- Account --

/// Unknown body fields are ignored, matching what the existing client
/// may already be sending.
#[derive(Debug, Deserialize)]
pub struct AccountRequest {
    pub action: Option<String>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Returned by both register and login. The client only ever needs the
/// identity pair; no token is issued.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub success: bool,
    pub uid: i64,
    pub username: String,
}

// -- News --

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: Option<String>,
    pub author: Option<String>,
    pub version_tag: Option<String>,
}

// -- Profile --

/// Public profile fields. Timestamps are ISO-8601 strings or null,
/// never omitted.
#[derive(Debug, Serialize)]
pub struct Profile {
    pub uid: i64,
    pub username: String,
    pub created_at: Option<String>,
    pub last_login: Option<String>,
    pub downloads_count: i64,
    pub favorite_version: Option<String>,
}

// -- Versions --

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionEntry {
    pub version: String,
    pub release_date: Option<String>,
    pub description: Option<String>,
    pub download_url: Option<String>,
    pub features: Vec<String>,
    pub is_latest: bool,
}

// -- Errors --

/// Every failure response is `{"error": <message>}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
