// HTTP request handlers
use crate::domain::navigation::{MenuItem, RenderInstruction};
use crate::domain::page::PageKey;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Serialize)]
pub struct PageView {
    pub key: PageKey,
    pub instruction: RenderInstruction,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Landing page: the configured default page
pub async fn home(State(state): State<Arc<AppState>>) -> Response {
    let key = state.navigation_service.default_page().clone();
    render_page(&state, key)
}

/// One page of the shell, selected by its menu label
pub async fn show_page(
    Path(key): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    render_page(&state, PageKey::new(key))
}

/// Navigation menu with the content kind behind each entry
pub async fn list_pages(State(state): State<Arc<AppState>>) -> Json<Vec<MenuItem>> {
    Json(state.navigation_service.menu())
}

/// Render instruction for one page as JSON
pub async fn describe_page(
    Path(key): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let key = PageKey::new(key);
    match state.navigation_service.dispatch(&key) {
        Ok(instruction) => Json(PageView { key, instruction }).into_response(),
        Err(e) => (StatusCode::NOT_FOUND, Json(json!({ "error": e.to_string() }))).into_response(),
    }
}

fn render_page(state: &AppState, key: PageKey) -> Response {
    match state.navigation_service.dispatch(&key) {
        Ok(instruction) => Html(state.renderer.render_page(&key, &instruction)).into_response(),
        Err(e) => {
            tracing::info!("Page request rejected: {}", e);
            (
                StatusCode::NOT_FOUND,
                Html(state.renderer.render_not_found(key.as_str())),
            )
                .into_response()
        }
    }
}
