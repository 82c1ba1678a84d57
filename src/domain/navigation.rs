// Navigation domain model - what a selected page turns into
use super::page::{OverviewContent, PageKey, ToolEntry};
use serde::Serialize;
use thiserror::Error;

/// The content source a page key is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Overview,
    Dashboard,
    Document,
    Tools,
}

impl Branch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Overview => "overview",
            Branch::Dashboard => "dashboard",
            Branch::Document => "document",
            Branch::Tools => "tools",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameEmbed {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub height: u32,
    pub scrolling: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoEmbed {
    pub title: String,
    pub url: String,
    pub link: String,
}

/// Render instruction handed to the page renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderInstruction {
    Overview(OverviewContent),
    Frame(FrameEmbed),
    Video(VideoEmbed),
    Tools { tools: Vec<ToolEntry> },
}

impl RenderInstruction {
    /// Url the browser will load from an external service, if any.
    pub fn external_url(&self) -> Option<&str> {
        match self {
            RenderInstruction::Frame(frame) => Some(&frame.url),
            RenderInstruction::Video(video) => Some(&video.url),
            RenderInstruction::Overview(_) | RenderInstruction::Tools { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub key: PageKey,
    pub branch: Branch,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("unknown page '{0}'")]
    UnknownPage(String),
}
