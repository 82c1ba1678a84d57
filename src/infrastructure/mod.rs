// Infrastructure layer - Configuration files and HTML rendering
pub mod config;
pub mod html;
