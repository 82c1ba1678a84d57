// Router assembly
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{describe_page, health_check, home, list_pages, show_page};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/healthz", get(health_check))
        .route("/pages/:key", get(show_page))
        .route("/api/pages", get(list_pages))
        .route("/api/pages/:key", get(describe_page))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::catalog::Catalog;
    use crate::application::navigation_service::NavigationService;
    use crate::infrastructure::config::test_support::shipped_config;
    use crate::infrastructure::html::HtmlRenderer;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        let catalog = Arc::new(Catalog::from_config(&shipped_config()).unwrap());
        let state = Arc::new(AppState {
            navigation_service: NavigationService::new(catalog.clone()),
            renderer: Arc::new(HtmlRenderer::from_catalog(&catalog)),
        });
        router(state)
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(get("/healthz").await, (StatusCode::OK, "ok".to_string()));
    }

    #[tokio::test]
    async fn test_home_renders_default_page() {
        let (status, body) = get("/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h2>NYC 311 Service Requests Analysis</h2>"));
        assert!(body.contains(r#"<a class="active" aria-current="page" href="/pages/Overview">"#));
        assert!(!body.contains("<iframe"));
    }

    #[tokio::test]
    async fn test_dashboard_page_embeds_resolved_view() {
        let (status, body) = get("/pages/Dashboard%201").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(
            r#"src="https://public.tableau.com/views/Project_17660793660610/TemporalPattrensofNYC?:showVizHome=no&amp;:embed=yes""#
        ));
        assert!(body.contains(r#"height="900" scrolling="yes""#));
    }

    #[tokio::test]
    async fn test_video_page_uses_player() {
        let (status, body) = get("/pages/Video").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<video controls"));
        assert!(!body.contains("<iframe"));
    }

    #[tokio::test]
    async fn test_unknown_page_is_not_found() {
        let (status, body) = get("/pages/Admin").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("<code>Admin</code>"));
    }

    #[tokio::test]
    async fn test_api_lists_menu_in_order() {
        let (status, body) = get("/api/pages").await;
        assert_eq!(status, StatusCode::OK);

        let menu: serde_json::Value = serde_json::from_str(&body).unwrap();
        let menu = menu.as_array().unwrap();
        assert_eq!(menu.len(), 8);
        assert_eq!(menu[0]["key"], "Overview");
        assert_eq!(menu[0]["branch"], "overview");
        assert_eq!(menu[1]["branch"], "dashboard");
        assert_eq!(menu[6]["key"], "Video");
        assert_eq!(menu[6]["branch"], "document");
        assert_eq!(menu[7]["branch"], "tools");
    }

    #[tokio::test]
    async fn test_api_describes_page() {
        let (status, body) = get("/api/pages/Report").await;
        assert_eq!(status, StatusCode::OK);

        let view: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(view["key"], "Report");
        assert_eq!(view["instruction"]["kind"], "frame");
        assert_eq!(view["instruction"]["height"], 900);
        assert_eq!(
            view["instruction"]["url"],
            "https://drive.google.com/file/d/1RMyoIJ3h8hKZL9LtiFtMXGgJ2aUxMv9y/preview"
        );

        let (status, body) = get("/api/pages/Tools").await;
        assert_eq!(status, StatusCode::OK);
        let view: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(view["instruction"]["kind"], "tools");
        assert_eq!(view["instruction"]["tools"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_api_unknown_page() {
        let (status, body) = get("/api/pages/Nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(error["error"], "unknown page 'Nope'");
    }
}
