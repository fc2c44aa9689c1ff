/// Database row types — these map directly to SQLite rows.
/// Distinct from prism-types API models to keep the DB layer independent.

pub struct UserRow {
    pub uid: i64,
    pub username: String,
    pub created_at: Option<String>,
    pub last_login: Option<String>,
    pub downloads_count: i64,
    pub favorite_version: Option<String>,
}

pub struct NewsRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: Option<String>,
    pub author: Option<String>,
    pub version_tag: Option<String>,
}

pub struct VersionRow {
    pub version_name: String,
    pub release_date: Option<String>,
    pub description: Option<String>,
    pub download_url: Option<String>,
    pub features: Option<String>,
    pub is_latest: bool,
}
