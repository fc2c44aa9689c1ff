use axum::{Json, extract::State};
use tracing::warn;

use prism_types::api::VersionEntry;
use prism_types::time::opt_iso8601;

use crate::{ApiError, AppState};

/// GET /api/versions — all releases, the latest group first, then by
/// release date descending within each group.
pub async fn list_versions(
    State(state): State<AppState>,
) -> Result<Json<Vec<VersionEntry>>, ApiError> {
    let rows = state.db.list_versions()?;

    let entries = rows
        .into_iter()
        .map(|row| VersionEntry {
            features: decode_features(&row.version_name, row.features.as_deref()),
            version: row.version_name,
            release_date: opt_iso8601(row.release_date.as_deref()),
            description: row.description,
            download_url: row.download_url,
            is_latest: row.is_latest,
        })
        .collect();

    Ok(Json(entries))
}

/// Features are stored as a JSON array of strings; NULL means none were
/// recorded and renders as the empty list.
fn decode_features(version: &str, stored: Option<&str>) -> Vec<String> {
    let Some(raw) = stored else {
        return Vec::new();
    };

    match serde_json::from_str(raw) {
        Ok(features) => features,
        Err(e) => {
            warn!("Malformed features for version {}: {}", version, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::decode_features;

    #[test]
    fn null_decodes_to_empty_list() {
        assert!(decode_features("v1.0", None).is_empty());
    }

    #[test]
    fn json_array_keeps_its_order() {
        let features = decode_features("v1.0", Some(r#"["fast launch","new ui","auto update"]"#));
        assert_eq!(features, ["fast launch", "new ui", "auto update"]);
    }

    #[test]
    fn malformed_json_decodes_to_empty_list() {
        assert!(decode_features("v1.0", Some("not json")).is_empty());
    }
}
