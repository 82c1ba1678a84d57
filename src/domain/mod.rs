// Domain layer - Pages, embed links and render instructions
pub mod embed;
pub mod navigation;
pub mod page;
