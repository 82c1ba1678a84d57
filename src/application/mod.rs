// Application layer - Catalog validation and navigation use cases
pub mod catalog;
pub mod navigation_service;
pub mod page_renderer;
