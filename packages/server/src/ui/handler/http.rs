//! HTTP endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};

use crate::{
    domain::DisplayName,
    infrastructure::dto::http::HubStateDto,
    ui::{assets::Public, state::AppState},
};

const INDEX_FILE: &str = "index.html";

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Debug endpoint to get the current hub state (for testing purposes)
pub async fn debug_hub_state(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HubStateDto>, StatusCode> {
    match state.get_hub_state_usecase.execute().await {
        Ok(hub_state) => {
            let history = hub_state.hub.history();
            Ok(Json(HubStateDto {
                users: hub_state
                    .hub
                    .display_names()
                    .into_iter()
                    .map(|name| name.map(DisplayName::into_string))
                    .collect(),
                connections: hub_state.connections,
                history_len: history.len(),
                history_capacity: history.capacity(),
            }))
        }
        Err(e) => {
            tracing::error!("Failed to read hub state: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Browser client entry page
pub async fn index() -> Response {
    serve_asset(INDEX_FILE)
}

/// Remaining browser client assets
pub async fn public_files(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    if path.is_empty() {
        return serve_asset(INDEX_FILE);
    }
    serve_asset(path)
}

fn serve_asset(path: &str) -> Response {
    match Public::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404").into_response(),
    }
}
