// Application state for HTTP handlers
use crate::application::navigation_service::NavigationService;
use crate::application::page_renderer::PageRenderer;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub navigation_service: NavigationService,
    pub renderer: Arc<dyn PageRenderer>,
}
