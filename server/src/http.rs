use crate::state::AppState;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use axum::response::IntoResponse;
use tower_http::set_header::SetResponseHeaderLayer;

/// Stamps `Access-Control-Allow-Origin: *` on every response, preflight or not.
pub fn build_cors() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"))
}

pub async fn get_version_info(State(state): State<AppState>) -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/json")], state.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use upcheck_common::version::{LATEST, VersionInfo};

    #[tokio::test]
    async fn test_version_info_returns_ok_json() {
        let state = AppState::new(&LATEST).unwrap();
        let resp = get_version_info(State(state)).await.into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
    }

    #[tokio::test]
    async fn test_version_info_body_matches_latest() {
        let state = AppState::new(&LATEST).unwrap();
        let resp = get_version_info(State(state)).await.into_response();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();

        let info: VersionInfo = serde_json::from_slice(&body).unwrap();
        assert_eq!(info, LATEST);

        let raw = std::str::from_utf8(&body).unwrap();
        let keys = ["version", "update_url", "force_update", "update_msg"];
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| format!("\"{key}\":"))
            .map(|key| raw.find(&key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
